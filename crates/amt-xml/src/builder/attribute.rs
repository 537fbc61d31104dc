use std::borrow::Cow;

/// Represents an XML attribute with a name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// The qualified name of the attribute, e.g. `Name` or `xmlns:h`.
    name: Cow<'a, str>,
    /// The unescaped value of the attribute.
    value: Cow<'a, str>,
}

impl<'a> Attribute<'a> {
    /// Creates a new instance of `Attribute`.
    ///
    /// # Example
    ///
    /// ```
    /// use amt_xml::builder::Attribute;
    /// let attribute = Attribute::new("Name", "InstanceID");
    /// ```
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.name);
        out.push_str("=\"");
        out.push_str(&super::escape(&self.value));
        out.push('"');
    }
}
