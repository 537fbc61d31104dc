use amt_wsman::{MessageCreator, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, ReturnValue, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "IPS_OptInService";

pub const START_OPT_IN: &str = "StartOptIn";
pub const CANCEL_OPT_IN: &str = "CancelOptIn";
pub const SEND_OPT_IN_CODE: &str = "SendOptInCode";

/// User consent policy for redirection and KVM sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptInService {
    #[serde(
        rename = "@xmlns:h",
        skip_deserializing,
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(rename(serialize = "h:CanModifyOptInPolicy", deserialize = "CanModifyOptInPolicy"))]
    pub can_modify_opt_in_policy: i32,
    #[serde(rename(serialize = "h:CreationClassName", deserialize = "CreationClassName"))]
    pub creation_class_name: String,
    #[serde(rename(serialize = "h:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(rename(serialize = "h:Name", deserialize = "Name"))]
    pub name: String,
    #[serde(rename(serialize = "h:OptInCodeTimeout", deserialize = "OptInCodeTimeout"))]
    pub opt_in_code_timeout: i32,
    #[serde(rename(serialize = "h:OptInDisplayTimeout", deserialize = "OptInDisplayTimeout"))]
    pub opt_in_display_timeout: i32,
    #[serde(rename(serialize = "h:OptInRequired", deserialize = "OptInRequired"))]
    pub opt_in_required: u32,
    #[serde(rename(serialize = "h:OptInState", deserialize = "OptInState"))]
    pub opt_in_state: i32,
    #[serde(rename(serialize = "h:SystemCreationClassName", deserialize = "SystemCreationClassName"))]
    pub system_creation_class_name: String,
    #[serde(rename(serialize = "h:SystemName", deserialize = "SystemName"))]
    pub system_name: String,
}

impl_namespaceable!(OptInService);

#[derive(Debug, Default, Serialize)]
struct OptInCodeInput {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:OptInCode")]
    opt_in_code: i32,
}

impl_namespaceable!(OptInCodeInput);

type OptInResponse = BodyResponse<OptInService, ReturnValue>;

pub struct OptInServiceMessages<'a> {
    base: Base<'a, OptInService, ReturnValue>,
}

impl<'a> OptInServiceMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
        }
    }

    pub fn get(&self) -> Result<OptInResponse, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<OptInResponse, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<OptInResponse, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn put(&self, data: OptInService) -> Result<OptInResponse, ClientError> {
        self.base.put(data, false, None)
    }

    /// Displays a user consent code on the managed system.
    pub fn start_opt_in(&self) -> Result<OptInResponse, ClientError> {
        self.base.method::<String>(START_OPT_IN, None, None)
    }

    pub fn cancel_opt_in(&self) -> Result<OptInResponse, ClientError> {
        self.base.method::<String>(CANCEL_OPT_IN, None, None)
    }

    pub fn send_opt_in_code(&self, opt_in_code: i32) -> Result<OptInResponse, ClientError> {
        let input = OptInCodeInput {
            opt_in_code,
            ..Default::default()
        };
        self.base.method(SEND_OPT_IN_CODE, None, Some(input))
    }
}
