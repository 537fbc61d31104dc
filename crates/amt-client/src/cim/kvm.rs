use amt_wsman::MessageCreator;
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "CIM_KVMRedirectionSAP";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum KvmRedirectionState {
    Enabled = 2,
    Disabled = 3,
}

impl From<KvmRedirectionState> for i32 {
    fn from(state: KvmRedirectionState) -> Self {
        state as Self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KvmRedirectionSap {
    #[serde(rename = "CreationClassName")]
    pub creation_class_name: String,
    #[serde(rename = "ElementName")]
    pub element_name: String,
    #[serde(rename = "EnabledState")]
    pub enabled_state: i32,
    #[serde(rename = "KVMProtocol")]
    pub kvm_protocol: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "RequestedState")]
    pub requested_state: i32,
    #[serde(rename = "SystemCreationClassName")]
    pub system_creation_class_name: String,
    #[serde(rename = "SystemName")]
    pub system_name: String,
}

pub struct KvmRedirectionSapMessages<'a> {
    base: Base<'a, KvmRedirectionSap>,
    request_state_change_action: String,
}

impl<'a> KvmRedirectionSapMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
            request_state_change_action: creator.method_action(CLASS_NAME, "RequestStateChange"),
        }
    }

    pub fn get(&self) -> Result<BodyResponse<KvmRedirectionSap>, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<BodyResponse<KvmRedirectionSap>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BodyResponse<KvmRedirectionSap>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn request_state_change(
        &self,
        state: KvmRedirectionState,
    ) -> Result<BodyResponse<KvmRedirectionSap>, ClientError> {
        self.base
            .request_state_change(&self.request_state_change_action, state.into())
    }
}
