use std::sync::atomic::{AtomicU64, Ordering};

use amt_xml::builder::Element;
use tracing::trace;

use crate::selector::SelectorSet;

pub const XML_COMMON_PREFIX: &str = r#"<?xml version="1.0" encoding="utf-8"?><Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:a="http://schemas.xmlsoap.org/ws/2004/08/addressing" xmlns:w="http://schemas.dmtf.org/wbem/wsman/1/wsman.xsd" xmlns="http://www.w3.org/2003/05/soap-envelope">"#;
pub const XML_COMMON_END: &str = "</Envelope>";
pub const ANONYMOUS_ADDRESS: &str =
    "http://schemas.xmlsoap.org/ws/2004/08/addressing/role/anonymous";
pub const DEFAULT_TIMEOUT: &str = "PT60S";
pub const WSMAN_TO: &str = "/wsman";

/// Builds envelopes and headers for one schema (one resource URI base).
///
/// Owns the message counter. Every call to [`MessageCreator::create_header`]
/// consumes the current value as the `MessageID` and advances it by one, so
/// IDs are unique and strictly increasing from the initial value. Keep one
/// creator per managed device session.
#[derive(Debug, typed_builder::TypedBuilder)]
pub struct MessageCreator {
    #[builder(
        default = AtomicU64::new(0),
        setter(transform = |id: u64| AtomicU64::new(id))
    )]
    message_id: AtomicU64,

    #[builder(default = XML_COMMON_PREFIX.to_owned(), setter(into))]
    xml_common_prefix: String,

    #[builder(default = XML_COMMON_END.to_owned(), setter(into))]
    xml_common_end: String,

    #[builder(default = ANONYMOUS_ADDRESS.to_owned(), setter(into))]
    anonymous_address: String,

    #[builder(default = DEFAULT_TIMEOUT.to_owned(), setter(into))]
    default_timeout: String,

    #[builder(setter(into))]
    resource_uri_base: String,
}

impl MessageCreator {
    /// Creator with default prologue, reply address and timeout, counting from 0.
    pub fn new(resource_uri_base: impl Into<String>) -> Self {
        Self::builder().resource_uri_base(resource_uri_base).build()
    }

    /// The value the next header will carry as its `MessageID`.
    pub fn message_id(&self) -> u64 {
        self.message_id.load(Ordering::SeqCst)
    }

    pub fn resource_uri_base(&self) -> &str {
        &self.resource_uri_base
    }

    pub fn anonymous_address(&self) -> &str {
        &self.anonymous_address
    }

    pub fn default_timeout(&self) -> &str {
        &self.default_timeout
    }

    /// `resource_uri_base + class_name`
    pub fn resource_uri(&self, class_name: &str) -> String {
        format!("{}{class_name}", self.resource_uri_base)
    }

    /// `{resource_uri_base}{class_name}/{method}`
    pub fn method_action(&self, class_name: &str, method: &str) -> String {
        crate::actions::method_action(&self.resource_uri_base, class_name, method)
    }

    /// Concatenates prologue, header, body and epilogue. Inputs are not validated.
    pub fn create_xml(&self, header: &str, body: &str) -> String {
        let mut xml = String::with_capacity(
            self.xml_common_prefix.len() + header.len() + body.len() + self.xml_common_end.len(),
        );
        xml.push_str(&self.xml_common_prefix);
        xml.push_str(header);
        xml.push_str(body);
        xml.push_str(&self.xml_common_end);
        xml
    }

    /// Renders the `<Header>` block and advances the message counter.
    ///
    /// Empty or absent `address`/`timeout` fall back to the creator's
    /// defaults. The selector set is appended only when it has entries.
    pub fn create_header(
        &self,
        action: &str,
        class_name: &str,
        selectors: Option<&SelectorSet>,
        address: Option<&str>,
        timeout: Option<&str>,
    ) -> String {
        let address = address
            .filter(|address| !address.is_empty())
            .unwrap_or(self.anonymous_address.as_str());
        let timeout = timeout
            .filter(|timeout| !timeout.is_empty())
            .unwrap_or(self.default_timeout.as_str());

        let message_id = self.message_id.fetch_add(1, Ordering::SeqCst);

        trace!(
            message_id,
            action,
            class = class_name,
            selectors = selectors.map_or(0, SelectorSet::len),
            "creating header"
        );

        let mut children = vec![
            Element::new("a:Action").set_text(action),
            Element::new("a:To").set_text(WSMAN_TO),
            Element::new("w:ResourceURI").set_text(self.resource_uri(class_name)),
            Element::new("a:MessageID").set_text(message_id.to_string()),
            Element::new("a:ReplyTo").add_child(Element::new("a:Address").set_text(address)),
            Element::new("w:OperationTimeout").set_text(timeout),
        ];

        if let Some(selector_set) = selectors.filter(|set| !set.is_empty()) {
            children.push(selector_set.to_element());
        }

        Element::new("Header").add_children(children).to_xml_string()
    }
}
