//! A small XML writer used to render WS-Management fragments.
//!
//! Element and attribute names are written verbatim, prefixes included
//! (`w:Selector`, `h:RequestedState`). Namespace declarations are ordinary
//! attributes (`xmlns:h`). Text and attribute values are escaped.
mod attribute;
mod element;

use std::borrow::Cow;

pub use self::attribute::*;
pub use self::element::*;

/// Escapes the five XML special characters.
///
/// Borrows the input when nothing needs escaping.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_xml() {
        let element = Element::new("root");
        assert_eq!(element.to_xml_string(), "<root/>");
    }

    #[test]
    fn test_xml_with_attributes() {
        let element = Element::new("root")
            .add_attribute(Attribute::new("attr1", "value1"))
            .add_attribute(Attribute::new("attr2", "value2"));
        assert_eq!(
            element.to_xml_string(),
            r#"<root attr1="value1" attr2="value2"/>"#
        );
    }

    #[test]
    fn test_xml_with_child_elements() {
        let element = Element::new("a:ReplyTo")
            .add_child(Element::new("a:Address").set_text("http://example.com/anonymous"));
        assert_eq!(
            element.to_xml_string(),
            "<a:ReplyTo><a:Address>http://example.com/anonymous</a:Address></a:ReplyTo>"
        );
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let element = Element::new("root").add_children(vec![
            Element::new("c").set_text("3"),
            Element::new("a").set_text("1"),
            Element::new("b").set_text("2"),
        ]);
        assert_eq!(
            element.to_xml_string(),
            "<root><c>3</c><a>1</a><b>2</b></root>"
        );
    }

    #[test]
    fn test_empty_text_renders_open_and_close_tags() {
        let element = Element::new("h:StartOptIn_INPUT")
            .add_attribute(Attribute::new("xmlns:h", "http://example.com/IPS_OptInService"))
            .set_text("");
        assert_eq!(
            element.to_xml_string(),
            r#"<h:StartOptIn_INPUT xmlns:h="http://example.com/IPS_OptInService"></h:StartOptIn_INPUT>"#
        );
    }

    #[test]
    fn test_empty_children_renders_open_and_close_tags() {
        let element = Element::new("Body").add_children(Vec::new());
        assert_eq!(element.to_xml_string(), "<Body></Body>");
    }

    #[test]
    fn test_setting_text_overwrites_children() {
        let element = Element::new("container")
            .add_child(Element::new("item"))
            .set_text("New text");
        assert_eq!(element.to_xml_string(), "<container>New text</container>");
    }

    #[test]
    fn test_special_characters_in_text_are_escaped() {
        let element = Element::new("test").set_text("Text with <>&\"' characters");
        assert_eq!(
            element.to_xml_string(),
            "<test>Text with &lt;&gt;&amp;&quot;&apos; characters</test>"
        );
    }

    #[test]
    fn test_special_characters_in_attributes_are_escaped() {
        let element = Element::new("test").add_attribute(Attribute::new("Name", "a&b<c"));
        assert_eq!(element.to_xml_string(), r#"<test Name="a&amp;b&lt;c"/>"#);
    }

    #[test]
    fn test_escape_borrows_plain_values() {
        assert!(matches!(escape("InstanceID"), Cow::Borrowed(_)));
        assert!(matches!(escape("a&b"), Cow::Owned(_)));
    }

    #[test]
    fn test_display_matches_to_xml_string() {
        let element = Element::new("a:To").set_text("/wsman");
        assert_eq!(format!("{element}"), element.to_xml_string());
    }

    #[test]
    fn test_unicode_content() {
        let element = Element::new("test").set_text("Hello 世界 🌍");
        assert_eq!(element.to_xml_string(), "<test>Hello 世界 🌍</test>");
    }
}
