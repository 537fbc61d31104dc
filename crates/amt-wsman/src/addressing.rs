use serde::{Deserialize, Serialize};

use crate::{creator::WSMAN_TO, selector::SelectorSet};

/// WS-Addressing endpoint reference pointing at one managed instance.
///
/// Serializes with `a:`/`w:` prefixes so it can be nested inside a request
/// payload; deserializes by local name, as found in `ResourceCreated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointReference {
    #[serde(rename(serialize = "a:Address", deserialize = "Address"), default)]
    pub address: String,
    #[serde(
        rename(serialize = "a:ReferenceParameters", deserialize = "ReferenceParameters"),
        default
    )]
    pub reference_parameters: ReferenceParameters,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceParameters {
    #[serde(rename(serialize = "w:ResourceURI", deserialize = "ResourceURI"), default)]
    pub resource_uri: String,
    #[serde(rename(serialize = "w:SelectorSet", deserialize = "SelectorSet"), default)]
    pub selector_set: SelectorSet,
}

impl EndpointReference {
    /// Reference addressed to `/wsman`.
    pub fn new(resource_uri: impl Into<String>, selector_set: SelectorSet) -> Self {
        Self {
            address: WSMAN_TO.to_owned(),
            reference_parameters: ReferenceParameters {
                resource_uri: resource_uri.into(),
                selector_set,
            },
        }
    }

    pub fn resource_uri(&self) -> &str {
        &self.reference_parameters.resource_uri
    }

    pub fn selector(&self, name: &str) -> Option<&str> {
        self.reference_parameters.selector_set.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_with_prefixes() {
        let reference = EndpointReference::new(
            "http://intel.com/wbem/wscim/1/amt-schema/1/AMT_PublicKeyCertificate",
            SelectorSet::new().add_selector("InstanceID", "Intel(r) AMT Certificate: Handle: 1"),
        );
        let xml = quick_xml::se::to_string_with_root("h:ElementInContext", &reference).unwrap();
        assert_eq!(
            xml,
            r#"<h:ElementInContext><a:Address>/wsman</a:Address><a:ReferenceParameters><w:ResourceURI>http://intel.com/wbem/wscim/1/amt-schema/1/AMT_PublicKeyCertificate</w:ResourceURI><w:SelectorSet><w:Selector Name="InstanceID">Intel(r) AMT Certificate: Handle: 1</w:Selector></w:SelectorSet></a:ReferenceParameters></h:ElementInContext>"#
        );
    }

    #[test]
    fn test_deserialize_by_local_name() {
        let xml = r#"<t:ResourceCreated><a:Address>/wsman</a:Address><a:ReferenceParameters><w:ResourceURI>http://intel.com/wbem/wscim/1/amt-schema/1/AMT_TLSCredentialContext</w:ResourceURI><w:SelectorSet><w:Selector Name="ElementInContext">cert</w:Selector><w:Selector Name="ElementProvidingContext">collection</w:Selector></w:SelectorSet></a:ReferenceParameters></t:ResourceCreated>"#;
        let reference: EndpointReference = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(reference.address, "/wsman");
        assert!(reference.resource_uri().ends_with("AMT_TLSCredentialContext"));
        assert_eq!(reference.selector("ElementInContext"), Some("cert"));
        assert_eq!(reference.selector("ElementProvidingContext"), Some("collection"));
    }
}
