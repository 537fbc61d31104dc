use amt_wsman::{EndpointReference, MessageCreator, SelectorSet, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const SETTING_DATA_CLASS: &str = "AMT_TLSSettingData";
pub const CREDENTIAL_CONTEXT_CLASS: &str = "AMT_TLSCredentialContext";
pub const PUBLIC_KEY_CERTIFICATE_CLASS: &str = "AMT_PublicKeyCertificate";
pub const PROTOCOL_ENDPOINT_COLLECTION_CLASS: &str = "AMT_TLSProtocolEndpointCollection";
pub const PROTOCOL_ENDPOINT_COLLECTION_NAME: &str = "TLSProtocolEndpointInstances Collection";

/// TLS configuration of one interface, keyed by `InstanceID`
/// (`Intel(r) AMT 802.3 TLS Settings`, `Intel(r) AMT LMS TLS Settings`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsSettingData {
    #[serde(
        rename = "@xmlns:h",
        skip_deserializing,
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(rename(serialize = "h:AcceptNonSecureConnections", deserialize = "AcceptNonSecureConnections"))]
    pub accept_non_secure_connections: bool,
    #[serde(rename(serialize = "h:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(rename(serialize = "h:Enabled", deserialize = "Enabled"))]
    pub enabled: bool,
    #[serde(rename(serialize = "h:InstanceID", deserialize = "InstanceID"))]
    pub instance_id: String,
    #[serde(rename(serialize = "h:MutualAuthentication", deserialize = "MutualAuthentication"))]
    pub mutual_authentication: bool,
    #[serde(rename(serialize = "h:NonSecureConnectionsSupported", deserialize = "NonSecureConnectionsSupported"))]
    pub non_secure_connections_supported: bool,
    #[serde(
        rename(serialize = "h:TrustedCN", deserialize = "TrustedCN"),
        skip_serializing_if = "Vec::is_empty"
    )]
    pub trusted_cn: Vec<String>,
}

impl_namespaceable!(TlsSettingData, instance_id);

pub struct TlsSettingDataMessages<'a> {
    base: Base<'a, TlsSettingData>,
}

impl<'a> TlsSettingDataMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, SETTING_DATA_CLASS, transport),
        }
    }

    pub fn get(&self, instance_id: &str) -> Result<BodyResponse<TlsSettingData>, ClientError> {
        let selectors = SelectorSet::new().add_selector("InstanceID", instance_id);
        self.base.get(Some(&selectors))
    }

    pub fn enumerate(&self) -> Result<BodyResponse<TlsSettingData>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BodyResponse<TlsSettingData>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn put(
        &self,
        instance_id: &str,
        data: TlsSettingData,
    ) -> Result<BodyResponse<TlsSettingData>, ClientError> {
        let selectors = SelectorSet::new().add_selector("InstanceID", instance_id);
        self.base.put(data, true, Some(&selectors))
    }
}

/// Associates a certificate with the TLS protocol endpoint collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsCredentialContext {
    #[serde(
        rename = "@xmlns:h",
        skip_deserializing,
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(rename(serialize = "h:ElementInContext", deserialize = "ElementInContext"))]
    pub element_in_context: EndpointReference,
    #[serde(rename(serialize = "h:ElementProvidingContext", deserialize = "ElementProvidingContext"))]
    pub element_providing_context: EndpointReference,
}

impl_namespaceable!(TlsCredentialContext);

impl TlsCredentialContext {
    /// Context binding the certificate with `certificate_handle` to the TLS endpoints.
    pub fn for_certificate(resource_uri_base: &str, certificate_handle: &str) -> Self {
        Self {
            namespace: String::new(),
            element_in_context: EndpointReference::new(
                format!("{resource_uri_base}{PUBLIC_KEY_CERTIFICATE_CLASS}"),
                SelectorSet::new().add_selector("InstanceID", certificate_handle),
            ),
            element_providing_context: EndpointReference::new(
                format!("{resource_uri_base}{PROTOCOL_ENDPOINT_COLLECTION_CLASS}"),
                SelectorSet::new().add_selector("ElementName", PROTOCOL_ENDPOINT_COLLECTION_NAME),
            ),
        }
    }
}

pub struct TlsCredentialContextMessages<'a> {
    base: Base<'a, TlsCredentialContext>,
    resource_uri_base: &'a str,
}

impl<'a> TlsCredentialContextMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CREDENTIAL_CONTEXT_CLASS, transport),
            resource_uri_base: creator.resource_uri_base(),
        }
    }

    pub fn enumerate(&self) -> Result<BodyResponse<TlsCredentialContext>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(
        &self,
        enumeration_context: &str,
    ) -> Result<BodyResponse<TlsCredentialContext>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn create(
        &self,
        certificate_handle: &str,
    ) -> Result<BodyResponse<TlsCredentialContext>, ClientError> {
        let data = TlsCredentialContext::for_certificate(self.resource_uri_base, certificate_handle);
        self.base.create(data, None)
    }

    pub fn delete(
        &self,
        certificate_handle: &str,
    ) -> Result<BodyResponse<TlsCredentialContext>, ClientError> {
        let selectors = SelectorSet::new().add_selector("Name", certificate_handle);
        self.base.delete(&selectors)
    }
}
