use amt_xml::builder::{Attribute, Element};
use serde::Serialize;
use tracing::debug;

use crate::{WsmanError, creator::MessageCreator};

pub const ENUMERATION_NAMESPACE: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration";
pub const ENUMERATE_BODY: &str =
    r#"<Body><Enumerate xmlns="http://schemas.xmlsoap.org/ws/2004/09/enumeration" /></Body>"#;
pub const GET_BODY: &str = "<Body></Body>";
pub const DELETE_BODY: &str = "<Body></Body>";

pub const DEFAULT_MAX_ELEMENTS: u32 = 999;
pub const DEFAULT_MAX_CHARACTERS: u32 = 99999;

/// A request payload that carries its own schema namespace.
///
/// The body encoder calls [`Namespaceable::set_namespace`] with the class'
/// resource URI before serializing, and the payload writes it into its
/// `xmlns:h` attribute field.
pub trait Namespaceable {
    fn set_namespace(&mut self, resource_uri: &str);

    /// Identity used when a Put has no explicit selector set.
    fn instance_id(&self) -> Option<String> {
        None
    }

    /// False for text payloads, which the encoder wraps in an element
    /// declaring `xmlns:h` itself.
    fn carries_namespace(&self) -> bool {
        true
    }
}

impl Namespaceable for String {
    fn set_namespace(&mut self, _resource_uri: &str) {}

    fn instance_id(&self) -> Option<String> {
        Some(self.clone())
    }

    fn carries_namespace(&self) -> bool {
        false
    }
}

impl Namespaceable for &str {
    fn set_namespace(&mut self, _resource_uri: &str) {}

    fn instance_id(&self) -> Option<String> {
        Some((*self).to_owned())
    }

    fn carries_namespace(&self) -> bool {
        false
    }
}

/// Text content under an `<h:…>` root that declares the prefix.
#[derive(Serialize)]
struct NamespacedText<'a, D> {
    #[serde(rename = "@xmlns:h")]
    namespace: &'a str,
    #[serde(rename = "$text")]
    value: &'a D,
}

/// `<Body><Pull>…</Pull></Body>`. Zero limits fall back to 999 elements and
/// 99999 characters.
pub fn create_common_body_pull(
    enumeration_context: &str,
    max_elements: u32,
    max_characters: u32,
) -> String {
    let max_elements = if max_elements == 0 {
        DEFAULT_MAX_ELEMENTS
    } else {
        max_elements
    };
    let max_characters = if max_characters == 0 {
        DEFAULT_MAX_CHARACTERS
    } else {
        max_characters
    };

    let pull = Element::new("Pull")
        .add_attribute(Attribute::new("xmlns", ENUMERATION_NAMESPACE))
        .add_child(Element::new("EnumerationContext").set_text(enumeration_context))
        .add_child(Element::new("MaxElements").set_text(max_elements.to_string()))
        .add_child(Element::new("MaxCharacters").set_text(max_characters.to_string()));

    Element::new("Body").add_child(pull).to_xml_string()
}

impl MessageCreator {
    /// Renders `<Body>` for a payload-carrying request.
    ///
    /// With data, the payload's namespace is set to the class URI and it is
    /// serialized as `<h:{method}>`. Text payloads are written as the content
    /// of `<h:{method} xmlns:h="…">`. Without data, an empty
    /// `<h:{method} xmlns:h="…"></h:{method}>` is emitted.
    pub fn create_body<D>(
        &self,
        method: &str,
        class_name: &str,
        data: Option<D>,
    ) -> Result<String, WsmanError>
    where
        D: Serialize + Namespaceable,
    {
        let Some(mut data) = data else {
            return Ok(self.create_empty_body(method, class_name));
        };

        let resource_uri = self.resource_uri(class_name);
        data.set_namespace(&resource_uri);

        let root = format!("h:{method}");
        let payload = if data.carries_namespace() {
            quick_xml::se::to_string_with_root(&root, &data)
        } else {
            let text = NamespacedText {
                namespace: &resource_uri,
                value: &data,
            };
            quick_xml::se::to_string_with_root(&root, &text)
        }
        .map_err(|error| WsmanError::Serialize {
                class: class_name.to_owned(),
                reason: error.to_string(),
            })?;

        debug!(class = class_name, method, payload_len = payload.len(), "serialized body payload");

        Ok(format!("<Body>{payload}</Body>"))
    }

    /// `<Body><h:{method} xmlns:h="{uri}"></h:{method}></Body>`
    pub fn create_empty_body(&self, method: &str, class_name: &str) -> String {
        let name = format!("h:{method}");
        let input = Element::new(name.as_str())
            .add_attribute(Attribute::new("xmlns:h", self.resource_uri(class_name)))
            .set_text("");
        Element::new("Body").add_child(input).to_xml_string()
    }

    /// `<Body><h:RequestStateChange_INPUT …><h:RequestedState>N</h:RequestedState>…</Body>`
    pub fn create_request_state_change_body(&self, class_name: &str, requested_state: i32) -> String {
        let input = Element::new("h:RequestStateChange_INPUT")
            .add_attribute(Attribute::new("xmlns:h", self.resource_uri(class_name)))
            .add_child(Element::new("h:RequestedState").set_text(requested_state.to_string()));
        Element::new("Body").add_child(input).to_xml_string()
    }
}
