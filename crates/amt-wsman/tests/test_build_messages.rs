use amt_wsman::{
    Base, MessageCreator, SelectorSet, actions,
    creator::{XML_COMMON_END, XML_COMMON_PREFIX},
};
use serde::Serialize;

const CIM_BASE: &str = "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/";
const AMT_BASE: &str = "http://intel.com/wbem/wscim/1/amt-schema/1/";

#[derive(Debug, Default, Serialize)]
struct BootSettingData {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:ElementName")]
    element_name: String,
    #[serde(rename = "h:InstanceID")]
    instance_id: String,
    #[serde(rename = "h:UseSOL")]
    use_sol: bool,
}

amt_wsman::impl_namespaceable!(BootSettingData, instance_id);

#[test]
fn test_enumerate_header_is_byte_exact() {
    let creator = MessageCreator::new(CIM_BASE);
    let header = creator.create_header(
        actions::ENUMERATE,
        "CIM_ServiceAvailableToElement",
        None,
        Some(""),
        Some(""),
    );
    assert_eq!(
        header,
        "<Header><a:Action>http://schemas.xmlsoap.org/ws/2004/09/enumeration/Enumerate</a:Action><a:To>/wsman</a:To><w:ResourceURI>http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ServiceAvailableToElement</w:ResourceURI><a:MessageID>0</a:MessageID><a:ReplyTo><a:Address>http://schemas.xmlsoap.org/ws/2004/08/addressing/role/anonymous</a:Address></a:ReplyTo><w:OperationTimeout>PT60S</w:OperationTimeout></Header>"
    );
    assert_eq!(creator.message_id(), 1);
}

#[test]
fn test_message_ids_follow_call_order() {
    let creator = MessageCreator::new(AMT_BASE);
    let base = Base::new(&creator, "AMT_GeneralSettings");
    let messages = [
        base.enumerate().unwrap(),
        base.pull("ctx").unwrap(),
        base.get(None).unwrap(),
        base.method("Ping", None).unwrap(),
    ];
    for (expected, xml) in messages.iter().enumerate() {
        assert!(
            xml.contains(&format!("<a:MessageID>{expected}</a:MessageID>")),
            "message {expected} carries the wrong id: {xml}"
        );
    }
}

#[test]
fn test_envelope_wraps_header_and_body() {
    let creator = MessageCreator::new(AMT_BASE);
    let xml = Base::new(&creator, "AMT_GeneralSettings").get(None).unwrap();
    assert!(xml.starts_with(XML_COMMON_PREFIX));
    assert!(xml.ends_with(&format!("<Body></Body>{XML_COMMON_END}")));
    amt_xml::parser::parse(&xml).expect("envelope is well-formed");
}

#[test]
fn test_put_struct_payload_uses_instance_id() {
    let creator = MessageCreator::new(AMT_BASE);
    let data = BootSettingData {
        element_name: "Intel(r) AMT Boot Configuration Settings".to_owned(),
        instance_id: "Intel(r) AMT:BootSettingData 0".to_owned(),
        use_sol: true,
        ..Default::default()
    };
    let xml = Base::new(&creator, "AMT_BootSettingData")
        .put(data, true, None)
        .unwrap();
    assert!(xml.contains(
        r#"<w:SelectorSet><w:Selector Name="InstanceID">Intel(r) AMT:BootSettingData 0</w:Selector></w:SelectorSet>"#
    ));
    assert!(xml.contains(
        r#"<Body><h:AMT_BootSettingData xmlns:h="http://intel.com/wbem/wscim/1/amt-schema/1/AMT_BootSettingData"><h:ElementName>Intel(r) AMT Boot Configuration Settings</h:ElementName><h:InstanceID>Intel(r) AMT:BootSettingData 0</h:InstanceID><h:UseSOL>true</h:UseSOL></h:AMT_BootSettingData></Body>"#
    ));
}

#[test]
fn test_put_without_identity_requires_selector() {
    let creator = MessageCreator::new(AMT_BASE);
    let result = Base::new(&creator, "AMT_BootSettingData").put(BootSettingData::default(), true, None);
    assert!(matches!(result, Err(amt_wsman::WsmanError::MissingSelector(_))));
    assert_eq!(creator.message_id(), 0);
}

#[test]
fn test_put_without_header_selector_omits_selector_set() {
    let creator = MessageCreator::new(AMT_BASE);
    let custom = SelectorSet::new().add_selector("Name", "ignored");
    let xml = Base::new(&creator, "AMT_X")
        .put("test-data", false, Some(&custom))
        .unwrap();
    assert!(!xml.contains("SelectorSet"));
    assert!(!xml.contains("ignored"));
}

#[test]
fn test_custom_method_action_and_body() {
    let creator = MessageCreator::new(CIM_BASE);
    let xml = Base::new(&creator, "CIM_BootService")
        .method("SetBootConfigRole", None)
        .unwrap();
    assert!(xml.contains(
        "<a:Action>http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_BootService/SetBootConfigRole</a:Action>"
    ));
    assert!(xml.contains("<h:SetBootConfigRole_INPUT xmlns:h=\"http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_BootService\">"));
}

#[test]
fn test_initial_message_id_from_builder() {
    let creator = MessageCreator::builder()
        .resource_uri_base(AMT_BASE)
        .message_id(100)
        .default_timeout("PT30S")
        .build();
    let xml = Base::new(&creator, "AMT_GeneralSettings").get(None).unwrap();
    assert!(xml.contains("<a:MessageID>100</a:MessageID>"));
    assert!(xml.contains("<w:OperationTimeout>PT30S</w:OperationTimeout>"));
    assert_eq!(creator.message_id(), 101);
}
