use super::*;
use crate::{ClientError, ParseError, TransportError, amt, mock::MockTransport};

#[test]
fn test_fault_is_typed_and_keeps_message() {
    let transport = MockTransport::new().with_response("get", FAULT_INVALID_SELECTORS);
    transport.set_current_message("get");
    let messages = amt::Messages::new(&transport);

    let error = messages
        .tls_setting_data()
        .get("unknown")
        .unwrap_err();

    let ClientError::Fault { fault, message } = &error else {
        panic!("expected a fault, got {error:?}");
    };
    assert_eq!(fault.subcode, "c:InvalidSelectors");
    assert_eq!(fault.reason, "The Selectors for the resource were not valid.");
    assert!(message.xml_input.contains(r#"<w:Selector Name="InstanceID">unknown</w:Selector>"#));
    assert_eq!(message.xml_output, FAULT_INVALID_SELECTORS);
    assert!(error.message().is_some());
}

#[test]
fn test_fault_in_http_error_body() {
    let transport = MockTransport::new();
    transport.add_status("get", 400, FAULT_INVALID_SELECTORS);
    transport.set_current_message("get");
    let messages = amt::Messages::new(&transport);

    let error = messages.tls_setting_data().get("unknown").unwrap_err();
    assert!(matches!(error, ClientError::Fault { ref fault, .. } if fault.code == "a:Sender"));
}

#[test]
fn test_transport_error_is_propagated() {
    let transport = MockTransport::new();
    transport.add_status("get", 401, "");
    transport.set_current_message("get");
    let messages = amt::Messages::new(&transport);

    let error = messages.general_settings().get().unwrap_err();
    let ClientError::Transport { source, message } = error else {
        panic!("expected a transport error");
    };
    assert!(matches!(source, TransportError::Status { status: 401, .. }));
    assert!(!message.xml_input.is_empty());
    assert_eq!(message.xml_output, "");
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn test_missing_canned_response() {
    let transport = MockTransport::new();
    transport.set_current_message("nothing");
    let messages = amt::Messages::new(&transport);

    let error = messages.general_settings().get().unwrap_err();
    assert!(matches!(
        error,
        ClientError::Transport {
            source: TransportError::Other(_),
            ..
        }
    ));
}

#[test]
fn test_wrong_payload_keeps_both_sides() {
    let transport = MockTransport::new().with_response("get", GENERAL_SETTINGS_GET);
    transport.set_current_message("get");
    let messages = amt::Messages::new(&transport);

    let error = messages.boot_setting_data().get().unwrap_err();
    assert_eq!(
        error.header().map(|header| header.resource_uri.as_str()),
        Some("http://intel.com/wbem/wscim/1/amt-schema/1/AMT_GeneralSettings")
    );
    let ClientError::Deserialize {
        source,
        header,
        message,
    } = error
    else {
        panic!("expected a deserialize error");
    };
    assert!(matches!(source, ParseError::UnexpectedPayload { .. }));
    assert_eq!(header.map(|header| header.relates_to), Some("0".to_owned()));
    assert!(message.xml_input.contains("AMT_BootSettingData"));
    assert_eq!(message.xml_output, GENERAL_SETTINGS_GET);
}

#[test]
fn test_garbage_response() {
    let transport = MockTransport::new().with_response("get", "not xml at all <");
    transport.set_current_message("get");
    let messages = amt::Messages::new(&transport);

    let error = messages.general_settings().get().unwrap_err();
    assert!(matches!(
        error,
        ClientError::Deserialize {
            source: ParseError::Xml(_),
            header: None,
            ..
        }
    ));
}

#[test]
fn test_validation_errors_do_not_reach_transport() {
    let transport = MockTransport::new();
    let messages = amt::Messages::new(&transport);

    let error = messages.boot_setting_data().pull("").unwrap_err();
    assert!(matches!(
        error,
        ClientError::Wsman(amt_wsman::WsmanError::MissingEnumerationContext(_))
    ));
    assert!(error.message().is_none());
    assert!(transport.requests().is_empty());
    assert_eq!(messages.creator().message_id(), 0);
}
