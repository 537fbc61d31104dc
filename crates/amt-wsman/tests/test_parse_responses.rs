use std::fs;

use amt_wsman::{EndpointReference, ResponseEnvelope};

#[test]
#[tracing_test::traced_test]
fn test_parse_resource_created() {
    let xml = fs::read_to_string("tests/resources/resource_created.xml")
        .expect("Failed to read resource_created.xml");
    let document = amt_xml::parser::parse(&xml).expect("Failed to parse XML");
    let envelope = ResponseEnvelope::from_document(&document).unwrap();

    assert_eq!(envelope.header.relates_to, "4");
    assert!(envelope.header.action.ends_with("CreateResponse"));
    assert!(envelope.fault().unwrap().is_none());

    let payload = envelope.payload_xml().expect("ResourceCreated payload");
    let reference: EndpointReference = quick_xml::de::from_str(payload).unwrap();
    assert!(reference.resource_uri().ends_with("AMT_TLSCredentialContext"));
    assert_eq!(
        reference.selector("ElementInContext"),
        Some("Intel(r) AMT Certificate: Handle: 1")
    );
    assert_eq!(
        reference.selector("ElementProvidingContext"),
        Some("AMT_TLSProtocolEndpointCollection")
    );
}

#[test]
fn test_parse_fault_response() {
    let xml = fs::read_to_string("tests/resources/fault_response.xml")
        .expect("Failed to read fault_response.xml");
    let document = amt_xml::parser::parse(&xml).expect("Failed to parse XML");
    let envelope = ResponseEnvelope::from_document(&document).unwrap();

    assert_eq!(envelope.header.relates_to, "7");
    let fault = envelope.fault().unwrap().expect("fault payload");
    assert_eq!(fault.code, "a:Sender");
    assert_eq!(fault.subcode, "b:DestinationUnreachable");
    assert!(fault.reason.starts_with("No route can be determined"));
    assert_eq!(fault.detail, "");
}
