//! Action URIs placed in `a:Action`.

pub const ENUMERATE: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration/Enumerate";
pub const PULL: &str = "http://schemas.xmlsoap.org/ws/2004/09/enumeration/Pull";
pub const GET: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Get";
pub const PUT: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Put";
pub const CREATE: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Create";
pub const DELETE: &str = "http://schemas.xmlsoap.org/ws/2004/09/transfer/Delete";

/// Suffix appended to a method name to form its input element.
pub const INPUT_SUFFIX: &str = "_INPUT";

/// `{resource_uri_base}{class_name}/{method}`
pub fn method_action(resource_uri_base: &str, class_name: &str, method: &str) -> String {
    format!("{resource_uri_base}{class_name}/{method}")
}

/// `{method}_INPUT`
pub fn input_method(method: &str) -> String {
    format!("{method}{INPUT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_action() {
        assert_eq!(
            method_action(
                "http://intel.com/wbem/wscim/1/ips-schema/1/",
                "IPS_OptInService",
                "StartOptIn"
            ),
            "http://intel.com/wbem/wscim/1/ips-schema/1/IPS_OptInService/StartOptIn"
        );
    }

    #[test]
    fn test_input_method() {
        assert_eq!(input_method("SetBootConfigRole"), "SetBootConfigRole_INPUT");
    }
}
