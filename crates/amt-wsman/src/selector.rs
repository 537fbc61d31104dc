use amt_xml::{
    XmlError,
    builder::{Attribute, Element},
    parser::{Node, XmlDeserialize, XmlVisitor},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::creator::MessageCreator;

/// A `<w:Selector Name="...">value</w:Selector>` pair scoping an operation to one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl Selector {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn to_element(&self) -> Element<'_> {
        Element::new("w:Selector")
            .add_attribute(Attribute::new("Name", self.name.as_str()))
            .set_text(self.value.as_str())
    }
}

/// Ordered selectors. Rendering keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSet {
    #[serde(
        rename(serialize = "w:Selector", deserialize = "Selector"),
        default
    )]
    pub selectors: Vec<Selector>,
}

impl SelectorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selector as a key-value pair
    /// Example:
    /// selector_set.add_selector("InstanceID", "Intel(r) AMT:BootSettingData 0")
    /// Generates: <w:Selector Name="InstanceID">Intel(r) AMT:BootSettingData 0</w:Selector>
    pub fn add_selector(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_selector(name, value);
        self
    }

    /// Add a selector using a mutable reference
    pub fn insert_selector(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.selectors.push(Selector::new(name, value));
    }

    /// Value of the first selector with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.selectors
            .iter()
            .find(|selector| selector.name == name)
            .map(|selector| selector.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Selector> {
        self.selectors.iter()
    }

    pub fn to_element(&self) -> Element<'_> {
        Element::new("w:SelectorSet")
            .add_children(self.selectors.iter().map(Selector::to_element).collect())
    }
}

impl From<Selector> for SelectorSet {
    fn from(selector: Selector) -> Self {
        Self {
            selectors: vec![selector],
        }
    }
}

impl<N, V> FromIterator<(N, V)> for SelectorSet
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            selectors: iter
                .into_iter()
                .map(|(name, value)| Selector::new(name, value))
                .collect(),
        }
    }
}

impl<'s> IntoIterator for &'s SelectorSet {
    type Item = &'s Selector;
    type IntoIter = std::slice::Iter<'s, Selector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl MessageCreator {
    /// Renders `<w:SelectorSet>` with one `<w:Selector>` per entry, in order.
    ///
    /// Returns an empty string for an empty set.
    pub fn create_selector(&self, selectors: &SelectorSet) -> String {
        if selectors.is_empty() {
            return String::new();
        }
        selectors.to_element().to_xml_string()
    }
}

pub struct SelectorSetVisitor {
    selectors: Vec<Selector>,
}

impl<'a> XmlVisitor<'a> for SelectorSetVisitor {
    type Value = SelectorSet;

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children {
            if !child.is_element() {
                continue;
            }

            if child.tag_name().name() != "Selector" {
                warn!(
                    "Unexpected child element in SelectorSet: {} (namespace: {:?})",
                    child.tag_name().name(),
                    child.tag_name().namespace()
                );
                continue;
            }

            if let Some(name) = child.attribute("Name") {
                let value = child.text().unwrap_or_default().to_string();
                self.selectors.push(Selector::new(name, value));
            } else {
                warn!("Selector element missing Name attribute");
            }
        }

        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(SelectorSet {
            selectors: self.selectors,
        })
    }
}

impl XmlDeserialize<'_> for SelectorSet {
    type Visitor = SelectorSetVisitor;

    fn visitor() -> Self::Visitor {
        SelectorSetVisitor {
            selectors: Vec::new(),
        }
    }
}
