use amt_wsman::{EndpointReference, MessageCreator, SelectorSet, impl_namespaceable};
use amt_xml::parser::Node;
use serde::{Deserialize, Serialize};

use crate::{
    BodyResponse, ClientError,
    base::Base,
    response::{MethodOutput, ParseError, deserialize_node},
    transport::Transport,
};

pub const MANAGEMENT_SERVICE_CLASS: &str = "AMT_PublicKeyManagementService";
pub const KEY_PAIR_CLASS: &str = "AMT_PublicPrivateKeyPair";

pub const ADD_TRUSTED_ROOT_CERTIFICATE: &str = "AddTrustedRootCertificate";
pub const GENERATE_KEY_PAIR: &str = "GenerateKeyPair";
pub const ADD_KEY: &str = "AddKey";

pub const KEY_ALGORITHM_RSA: i32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicKeyManagementService {
    #[serde(rename = "CreationClassName")]
    pub creation_class_name: String,
    #[serde(rename = "ElementName")]
    pub element_name: String,
    #[serde(rename = "EnabledDefault")]
    pub enabled_default: i32,
    #[serde(rename = "EnabledState")]
    pub enabled_state: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "RequestedState")]
    pub requested_state: i32,
    #[serde(rename = "SystemCreationClassName")]
    pub system_creation_class_name: String,
    #[serde(rename = "SystemName")]
    pub system_name: String,
}

#[derive(Debug, Default, Serialize)]
struct CertificateBlobInput {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:CertificateBlob")]
    certificate_blob: String,
}

impl_namespaceable!(CertificateBlobInput);

#[derive(Debug, Default, Serialize)]
struct GenerateKeyPairInput {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:KeyAlgorithm")]
    key_algorithm: i32,
    #[serde(rename = "h:KeyLength")]
    key_length: u32,
}

impl_namespaceable!(GenerateKeyPairInput);

#[derive(Debug, Default, Serialize)]
struct KeyBlobInput {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:KeyBlob")]
    key_blob: String,
}

impl_namespaceable!(KeyBlobInput);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddTrustedRootCertificateOutput {
    #[serde(rename = "CreatedCertificate")]
    pub created_certificate: EndpointReference,
    #[serde(rename = "ReturnValue")]
    pub return_value: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateKeyPairOutput {
    #[serde(rename = "KeyPair")]
    pub key_pair: EndpointReference,
    #[serde(rename = "ReturnValue")]
    pub return_value: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddKeyOutput {
    #[serde(rename = "CreatedKey")]
    pub created_key: EndpointReference,
    #[serde(rename = "ReturnValue")]
    pub return_value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PublicKeyManagementOutput {
    AddTrustedRootCertificate(AddTrustedRootCertificateOutput),
    GenerateKeyPair(GenerateKeyPairOutput),
    AddKey(AddKeyOutput),
}

impl PublicKeyManagementOutput {
    /// The reference to the object the method created.
    pub fn created(&self) -> &EndpointReference {
        match self {
            Self::AddTrustedRootCertificate(output) => &output.created_certificate,
            Self::GenerateKeyPair(output) => &output.key_pair,
            Self::AddKey(output) => &output.created_key,
        }
    }

    pub fn return_value(&self) -> i32 {
        match self {
            Self::AddTrustedRootCertificate(output) => output.return_value,
            Self::GenerateKeyPair(output) => output.return_value,
            Self::AddKey(output) => output.return_value,
        }
    }
}

impl MethodOutput for PublicKeyManagementOutput {
    fn from_method_payload(method: &str, node: Node<'_, '_>) -> Result<Self, ParseError> {
        match method {
            ADD_TRUSTED_ROOT_CERTIFICATE => deserialize_node(node).map(Self::AddTrustedRootCertificate),
            GENERATE_KEY_PAIR => deserialize_node(node).map(Self::GenerateKeyPair),
            ADD_KEY => deserialize_node(node).map(Self::AddKey),
            other => Err(ParseError::UnsupportedMethod(other.to_owned())),
        }
    }
}

type ManagementResponse = BodyResponse<PublicKeyManagementService, PublicKeyManagementOutput>;

pub struct PublicKeyManagementMessages<'a> {
    base: Base<'a, PublicKeyManagementService, PublicKeyManagementOutput>,
}

impl<'a> PublicKeyManagementMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, MANAGEMENT_SERVICE_CLASS, transport),
        }
    }

    pub fn get(&self) -> Result<ManagementResponse, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<ManagementResponse, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<ManagementResponse, ClientError> {
        self.base.pull(enumeration_context)
    }

    /// Adds a base64 DER certificate to the trusted root store.
    pub fn add_trusted_root_certificate(
        &self,
        certificate_blob: &str,
    ) -> Result<ManagementResponse, ClientError> {
        let input = CertificateBlobInput {
            certificate_blob: certificate_blob.to_owned(),
            ..Default::default()
        };
        self.base
            .method(ADD_TRUSTED_ROOT_CERTIFICATE, None, Some(input))
    }

    pub fn generate_key_pair(
        &self,
        key_algorithm: i32,
        key_length: u32,
    ) -> Result<ManagementResponse, ClientError> {
        let input = GenerateKeyPairInput {
            key_algorithm,
            key_length,
            ..Default::default()
        };
        self.base.method(GENERATE_KEY_PAIR, None, Some(input))
    }

    /// Imports a base64 DER private key.
    pub fn add_key(&self, key_blob: &str) -> Result<ManagementResponse, ClientError> {
        let input = KeyBlobInput {
            key_blob: key_blob.to_owned(),
            ..Default::default()
        };
        self.base.method(ADD_KEY, None, Some(input))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicPrivateKeyPair {
    #[serde(rename = "DERKey")]
    pub der_key: String,
    #[serde(rename = "ElementName")]
    pub element_name: String,
    #[serde(rename = "InstanceID")]
    pub instance_id: String,
}

pub struct PublicPrivateKeyPairMessages<'a> {
    base: Base<'a, PublicPrivateKeyPair>,
}

impl<'a> PublicPrivateKeyPairMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, KEY_PAIR_CLASS, transport),
        }
    }

    pub fn get(&self, instance_id: &str) -> Result<BodyResponse<PublicPrivateKeyPair>, ClientError> {
        let selectors = SelectorSet::new().add_selector("InstanceID", instance_id);
        self.base.get(Some(&selectors))
    }

    pub fn enumerate(&self) -> Result<BodyResponse<PublicPrivateKeyPair>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(
        &self,
        enumeration_context: &str,
    ) -> Result<BodyResponse<PublicPrivateKeyPair>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn delete(&self, instance_id: &str) -> Result<BodyResponse<PublicPrivateKeyPair>, ClientError> {
        let selectors = SelectorSet::new().add_selector("InstanceID", instance_id);
        self.base.delete(&selectors)
    }
}
