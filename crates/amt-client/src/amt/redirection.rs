use amt_wsman::{MessageCreator, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "AMT_RedirectionService";

/// Requested states accepted by `AMT_RedirectionService.RequestStateChange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RedirectionState {
    Disabled = 32768,
    IderEnabled = 32769,
    SolEnabled = 32770,
    IderAndSolEnabled = 32771,
}

impl From<RedirectionState> for i32 {
    fn from(state: RedirectionState) -> Self {
        state as Self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectionService {
    #[serde(
        rename = "@xmlns:h",
        skip_deserializing,
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(rename(serialize = "h:CreationClassName", deserialize = "CreationClassName"))]
    pub creation_class_name: String,
    #[serde(rename(serialize = "h:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(rename(serialize = "h:EnabledState", deserialize = "EnabledState"))]
    pub enabled_state: i32,
    #[serde(rename(serialize = "h:ListenerEnabled", deserialize = "ListenerEnabled"))]
    pub listener_enabled: bool,
    #[serde(rename(serialize = "h:Name", deserialize = "Name"))]
    pub name: String,
    #[serde(rename(serialize = "h:SystemCreationClassName", deserialize = "SystemCreationClassName"))]
    pub system_creation_class_name: String,
    #[serde(rename(serialize = "h:SystemName", deserialize = "SystemName"))]
    pub system_name: String,
}

impl_namespaceable!(RedirectionService);

pub struct RedirectionMessages<'a> {
    base: Base<'a, RedirectionService>,
    request_state_change_action: String,
}

impl<'a> RedirectionMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
            request_state_change_action: creator.method_action(CLASS_NAME, "RequestStateChange"),
        }
    }

    pub fn get(&self) -> Result<BodyResponse<RedirectionService>, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<BodyResponse<RedirectionService>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BodyResponse<RedirectionService>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn put(&self, data: RedirectionService) -> Result<BodyResponse<RedirectionService>, ClientError> {
        self.base.put(data, false, None)
    }

    pub fn request_state_change(
        &self,
        state: RedirectionState,
    ) -> Result<BodyResponse<RedirectionService>, ClientError> {
        self.base
            .request_state_change(&self.request_state_change_action, state.into())
    }
}
