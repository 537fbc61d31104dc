use serde::Serialize;
use tracing::debug;

use crate::{
    WsmanError, actions,
    body::{self, Namespaceable},
    creator::MessageCreator,
    selector::SelectorSet,
};

/// Builds request envelopes for one class through a shared [`MessageCreator`].
///
/// Every successful call renders exactly one header and therefore consumes
/// one message ID. Validation failures return before the header is built.
#[derive(Debug, Clone, Copy)]
pub struct Base<'a> {
    creator: &'a MessageCreator,
    class_name: &'a str,
}

impl<'a> Base<'a> {
    pub fn new(creator: &'a MessageCreator, class_name: &'a str) -> Self {
        Self {
            creator,
            class_name,
        }
    }

    pub fn class_name(&self) -> &'a str {
        self.class_name
    }

    pub fn creator(&self) -> &'a MessageCreator {
        self.creator
    }

    fn class(&self) -> Result<&'a str, WsmanError> {
        if self.class_name.is_empty() {
            return Err(WsmanError::MissingClassName);
        }
        Ok(self.class_name)
    }

    fn header(&self, action: &str, selectors: Option<&SelectorSet>) -> Result<String, WsmanError> {
        let class_name = self.class()?;
        Ok(self
            .creator
            .create_header(action, class_name, selectors, None, None))
    }

    pub fn enumerate(&self) -> Result<String, WsmanError> {
        let header = self.header(actions::ENUMERATE, None)?;
        Ok(self.creator.create_xml(&header, body::ENUMERATE_BODY))
    }

    pub fn get(&self, selectors: Option<&SelectorSet>) -> Result<String, WsmanError> {
        let header = self.header(actions::GET, selectors)?;
        Ok(self.creator.create_xml(&header, body::GET_BODY))
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<String, WsmanError> {
        self.pull_with_limits(enumeration_context, 0, 0)
    }

    /// Pull with explicit batch limits; zero selects the defaults.
    pub fn pull_with_limits(
        &self,
        enumeration_context: &str,
        max_elements: u32,
        max_characters: u32,
    ) -> Result<String, WsmanError> {
        if enumeration_context.is_empty() {
            return Err(WsmanError::MissingEnumerationContext(
                self.class_name.to_owned(),
            ));
        }
        let header = self.header(actions::PULL, None)?;
        let body = body::create_common_body_pull(enumeration_context, max_elements, max_characters);
        Ok(self.creator.create_xml(&header, &body))
    }

    pub fn delete(&self, selectors: &SelectorSet) -> Result<String, WsmanError> {
        if selectors.is_empty() {
            return Err(WsmanError::MissingSelector(self.class_name.to_owned()));
        }
        let header = self.header(actions::DELETE, Some(selectors))?;
        Ok(self.creator.create_xml(&header, body::DELETE_BODY))
    }

    /// Put `data` as the full instance representation.
    ///
    /// Without an explicit `selectors`, an `InstanceID` selector is derived
    /// from [`Namespaceable::instance_id`]. When `use_header_selector` is
    /// false no selector is written to the header, whatever was passed.
    pub fn put<D>(
        &self,
        data: D,
        use_header_selector: bool,
        selectors: Option<&SelectorSet>,
    ) -> Result<String, WsmanError>
    where
        D: Serialize + Namespaceable,
    {
        let class_name = self.class()?;

        let selectors = if use_header_selector {
            let selectors = match selectors {
                Some(selectors) => selectors.clone(),
                None => data
                    .instance_id()
                    .map(|id| SelectorSet::new().add_selector("InstanceID", id))
                    .unwrap_or_default(),
            };
            if selectors.is_empty() {
                return Err(WsmanError::MissingSelector(class_name.to_owned()));
            }
            Some(selectors)
        } else {
            if selectors.is_some() {
                debug!(class = class_name, "header selector disabled, ignoring selector set");
            }
            None
        };

        let body = self.creator.create_body(class_name, class_name, Some(data))?;
        let header = self.header(actions::PUT, selectors.as_ref())?;
        Ok(self.creator.create_xml(&header, &body))
    }

    pub fn create<D>(&self, data: D, selectors: Option<&SelectorSet>) -> Result<String, WsmanError>
    where
        D: Serialize + Namespaceable,
    {
        let class_name = self.class()?;
        let body = self.creator.create_body(class_name, class_name, Some(data))?;
        let header = self.header(actions::CREATE, selectors)?;
        Ok(self.creator.create_xml(&header, &body))
    }

    /// `RequestStateChange` with a caller-supplied action URI.
    pub fn request_state_change(
        &self,
        action: &str,
        requested_state: i32,
    ) -> Result<String, WsmanError> {
        if action.is_empty() {
            return Err(WsmanError::MissingAction(self.class_name.to_owned()));
        }
        let class_name = self.class()?;
        let header = self.header(action, None)?;
        let body = self
            .creator
            .create_request_state_change_body(class_name, requested_state);
        Ok(self.creator.create_xml(&header, &body))
    }

    /// Invokes a class method without arguments: `<h:{method}_INPUT …></h:{method}_INPUT>`.
    pub fn method(&self, method: &str, selectors: Option<&SelectorSet>) -> Result<String, WsmanError> {
        self.method_with::<String>(method, selectors, None)
    }

    /// Invokes a class method, serializing `input` as `<h:{method}_INPUT>`.
    pub fn method_with<D>(
        &self,
        method: &str,
        selectors: Option<&SelectorSet>,
        input: Option<D>,
    ) -> Result<String, WsmanError>
    where
        D: Serialize + Namespaceable,
    {
        if method.is_empty() {
            return Err(WsmanError::MissingAction(self.class_name.to_owned()));
        }
        let class_name = self.class()?;
        let body = self
            .creator
            .create_body(&actions::input_method(method), class_name, input)?;
        let action = self.creator.method_action(class_name, method);
        let header = self.header(&action, selectors)?;
        Ok(self.creator.create_xml(&header, &body))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::creator::{XML_COMMON_END, XML_COMMON_PREFIX};

    const AMT_BASE: &str = "http://intel.com/wbem/wscim/1/amt-schema/1/";

    fn envelope(header_inner: &str, body: &str) -> String {
        format!("{XML_COMMON_PREFIX}<Header>{header_inner}</Header>{body}{XML_COMMON_END}")
    }

    fn header_inner(action: &str, class: &str, id: u64, selectors: &str) -> String {
        format!(
            "<a:Action>{action}</a:Action><a:To>/wsman</a:To><w:ResourceURI>{AMT_BASE}{class}</w:ResourceURI><a:MessageID>{id}</a:MessageID><a:ReplyTo><a:Address>http://schemas.xmlsoap.org/ws/2004/08/addressing/role/anonymous</a:Address></a:ReplyTo><w:OperationTimeout>PT60S</w:OperationTimeout>{selectors}"
        )
    }

    #[test]
    fn test_enumerate() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_BootSettingData");
        assert_eq!(
            base.enumerate().unwrap(),
            envelope(
                &header_inner(actions::ENUMERATE, "AMT_BootSettingData", 0, ""),
                body::ENUMERATE_BODY
            )
        );
    }

    #[test]
    fn test_get_with_and_without_selector() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_TLSSettingData");
        assert_eq!(
            base.get(None).unwrap(),
            envelope(
                &header_inner(actions::GET, "AMT_TLSSettingData", 0, ""),
                body::GET_BODY
            )
        );

        let selectors = SelectorSet::new().add_selector("InstanceID", "Intel(r) AMT 802.3 TLS Settings");
        assert_eq!(
            base.get(Some(&selectors)).unwrap(),
            envelope(
                &header_inner(
                    actions::GET,
                    "AMT_TLSSettingData",
                    1,
                    r#"<w:SelectorSet><w:Selector Name="InstanceID">Intel(r) AMT 802.3 TLS Settings</w:Selector></w:SelectorSet>"#
                ),
                body::GET_BODY
            )
        );
    }

    #[test]
    fn test_pull() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_BootSettingData");
        let xml = base.pull("AC070000-0000-0000-0000-000000000000").unwrap();
        assert_eq!(
            xml,
            envelope(
                &header_inner(actions::PULL, "AMT_BootSettingData", 0, ""),
                &body::create_common_body_pull("AC070000-0000-0000-0000-000000000000", 0, 0)
            )
        );
    }

    #[test]
    fn test_pull_without_context_fails_without_consuming_id() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_BootSettingData");
        assert!(matches!(
            base.pull(""),
            Err(WsmanError::MissingEnumerationContext(_))
        ));
        assert_eq!(creator.message_id(), 0);
    }

    #[test]
    fn test_delete_requires_selector() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_PublicPrivateKeyPair");
        assert!(matches!(
            base.delete(&SelectorSet::new()),
            Err(WsmanError::MissingSelector(_))
        ));

        let selectors = SelectorSet::new().add_selector("InstanceID", "Intel(r) AMT Key: Handle: 0");
        let xml = base.delete(&selectors).unwrap();
        assert!(xml.contains(actions::DELETE));
        assert!(xml.contains(
            r#"<w:Selector Name="InstanceID">Intel(r) AMT Key: Handle: 0</w:Selector>"#
        ));
        assert!(xml.ends_with("<Body></Body></Envelope>"));
    }

    #[test]
    fn test_put_without_header_selector_discards_custom_set() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_X");
        let custom = SelectorSet::new().add_selector("Name", "custom");
        let xml = base.put("test-data", false, Some(&custom)).unwrap();
        assert_eq!(
            xml,
            envelope(
                &header_inner(actions::PUT, "AMT_X", 0, ""),
                r#"<Body><h:AMT_X xmlns:h="http://intel.com/wbem/wscim/1/amt-schema/1/AMT_X">test-data</h:AMT_X></Body>"#
            )
        );
        assert!(!xml.contains("SelectorSet"));

        let document = amt_xml::parser::parse(&xml).unwrap();
        let body = amt_xml::parser::find_child(document.root_element(), "Body").unwrap();
        let payload = amt_xml::parser::find_child(body, "AMT_X").unwrap();
        assert_eq!(payload.text(), Some("test-data"));
    }

    #[test]
    fn test_put_with_unserializable_payload_keeps_message_id() {
        #[derive(Default, Serialize)]
        struct Unserializable {
            #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
            namespace: String,
            #[serde(rename = "h:Table")]
            table: HashMap<(i32, i32), i32>,
        }
        crate::impl_namespaceable!(Unserializable);

        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_X");
        let selectors = SelectorSet::new().add_selector("InstanceID", "x");
        let mut payload = Unserializable::default();
        payload.table.insert((1, 2), 3);

        assert!(matches!(
            base.put(payload, true, Some(&selectors)),
            Err(WsmanError::Serialize { .. })
        ));
        assert_eq!(creator.message_id(), 0);
        assert!(base.get(None).unwrap().contains("<a:MessageID>0</a:MessageID>"));
    }

    #[test]
    fn test_put_with_header_selector_uses_custom_set() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_X");
        let custom = SelectorSet::new().add_selector("Name", "custom");
        let xml = base.put("test-data", true, Some(&custom)).unwrap();
        assert!(xml.contains(
            r#"<w:SelectorSet><w:Selector Name="Name">custom</w:Selector></w:SelectorSet></Header>"#
        ));
    }

    #[test]
    fn test_put_synthesizes_instance_id_selector() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_X");
        let xml = base.put("test-data", true, None).unwrap();
        assert!(xml.contains(
            r#"<w:SelectorSet><w:Selector Name="InstanceID">test-data</w:Selector></w:SelectorSet></Header>"#
        ));
    }

    #[test]
    fn test_request_state_change() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "AMT_RedirectionService");
        let action = "http://intel.com/wbem/wscim/1/amt-schema/1/AMT_RedirectionService/RequestStateChange";
        let xml = base.request_state_change(action, 32771).unwrap();
        assert_eq!(
            xml,
            envelope(
                &header_inner(action, "AMT_RedirectionService", 0, ""),
                r#"<Body><h:RequestStateChange_INPUT xmlns:h="http://intel.com/wbem/wscim/1/amt-schema/1/AMT_RedirectionService"><h:RequestedState>32771</h:RequestedState></h:RequestStateChange_INPUT></Body>"#
            )
        );
        assert!(matches!(
            base.request_state_change("", 2),
            Err(WsmanError::MissingAction(_))
        ));
    }

    #[test]
    fn test_method_without_input() {
        let creator = MessageCreator::new("http://intel.com/wbem/wscim/1/ips-schema/1/");
        let base = Base::new(&creator, "IPS_OptInService");
        let xml = base.method("CancelOptIn", None).unwrap();
        assert!(xml.contains(
            "<a:Action>http://intel.com/wbem/wscim/1/ips-schema/1/IPS_OptInService/CancelOptIn</a:Action>"
        ));
        assert!(xml.contains(
            r#"<Body><h:CancelOptIn_INPUT xmlns:h="http://intel.com/wbem/wscim/1/ips-schema/1/IPS_OptInService"></h:CancelOptIn_INPUT></Body>"#
        ));
    }

    #[test]
    fn test_missing_class_name() {
        let creator = MessageCreator::new(AMT_BASE);
        let base = Base::new(&creator, "");
        assert!(matches!(base.enumerate(), Err(WsmanError::MissingClassName)));
        assert_eq!(creator.message_id(), 0);
    }

    #[test]
    fn test_classes_share_the_creator_counter() {
        let creator = MessageCreator::new(AMT_BASE);
        let boot = Base::new(&creator, "AMT_BootSettingData");
        let general = Base::new(&creator, "AMT_GeneralSettings");
        assert!(boot.get(None).unwrap().contains("<a:MessageID>0</a:MessageID>"));
        assert!(general.get(None).unwrap().contains("<a:MessageID>1</a:MessageID>"));
        assert!(boot.enumerate().unwrap().contains("<a:MessageID>2</a:MessageID>"));
    }
}
