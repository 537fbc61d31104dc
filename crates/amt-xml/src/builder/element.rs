use std::borrow::Cow;
use std::fmt;

use crate::builder::Attribute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<'a> {
    /// Represents a text content within an XML element.
    Text(Cow<'a, str>),
    /// Represents child elements within an XML element.
    Elements(Vec<Element<'a>>),

    None,
}

/// Represents an XML element.
///
/// An element without content is written self-closing (`<a/>`). An element
/// holding empty text or an empty child list is written with an explicit
/// closing tag (`<a></a>`), which WS-Management peers expect for
/// parameterless method inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    /// The qualified name of the element.
    name: Cow<'a, str>,
    /// The attributes of the element, written in insertion order.
    attributes: Vec<Attribute<'a>>,
    /// The content of the element.
    content: Content<'a>,
}

impl<'a> Element<'a> {
    /// Creates a new instance of `Element` with the given name.
    ///
    /// # Example
    ///
    /// ```
    /// use amt_xml::builder::Element;
    /// let element = Element::new("w:SelectorSet");
    /// ```
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::None,
        }
    }

    /// Adds an attribute to the element and returns a modified `Element`.
    pub fn add_attribute(mut self, attribute: Attribute<'a>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds a child element to the element and returns a modified `Element`.
    ///
    /// Any text content previously set is replaced.
    pub fn add_child(mut self, child: Element<'a>) -> Self {
        match self.content {
            Content::None | Content::Text(_) => {
                self.content = Content::Elements(vec![child]);
            }
            Content::Elements(ref mut children) => {
                children.push(child);
            }
        }
        self
    }

    pub fn add_children(mut self, children: Vec<Element<'a>>) -> Self {
        match self.content {
            Content::Elements(ref mut existing) => existing.extend(children),
            Content::None | Content::Text(_) => self.content = Content::Elements(children),
        }
        self
    }

    /// Sets the text content of the element and returns a modified `Element`.
    ///
    /// Any child elements previously added are replaced.
    pub fn set_text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Content<'a> {
        &self.content
    }

    /// Appends the rendered element to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for attribute in &self.attributes {
            attribute.write_to(out);
        }

        match &self.content {
            Content::None => {
                out.push_str("/>");
                return;
            }
            Content::Text(text) => {
                out.push('>');
                out.push_str(&super::escape(text));
            }
            Content::Elements(children) => {
                out.push('>');
                for child in children {
                    child.write_to(out);
                }
            }
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_string())
    }
}
