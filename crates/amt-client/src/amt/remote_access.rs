use amt_wsman::{MessageCreator, SelectorSet, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "AMT_RemoteAccessPolicyRule";

/// Trigger (user initiated, alert, periodic) that opens a CIRA tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteAccessPolicyRule {
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
    #[serde(rename(serialize = "h:ExtendedData", deserialize = "ExtendedData"))]
    pub extended_data: String,
    #[serde(rename(serialize = "h:PolicyRuleName", deserialize = "PolicyRuleName"))]
    pub policy_rule_name: String,
    #[serde(rename(serialize = "h:SystemCreationClassName", deserialize = "SystemCreationClassName"))]
    pub system_creation_class_name: String,
    #[serde(rename(serialize = "h:SystemName", deserialize = "SystemName"))]
    pub system_name: String,
    #[serde(rename(serialize = "h:Trigger", deserialize = "Trigger"))]
    pub trigger: i32,
    #[serde(rename(serialize = "h:TunnelLifeTime", deserialize = "TunnelLifeTime"))]
    pub tunnel_life_time: i32,
}

impl_namespaceable!(RemoteAccessPolicyRule);

fn policy_rule_selector(policy_rule_name: &str) -> SelectorSet {
    SelectorSet::new().add_selector("PolicyRuleName", policy_rule_name)
}

pub struct RemoteAccessPolicyRuleMessages<'a> {
    base: Base<'a, RemoteAccessPolicyRule>,
}

impl<'a> RemoteAccessPolicyRuleMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
        }
    }

    pub fn get(&self) -> Result<BodyResponse<RemoteAccessPolicyRule>, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<BodyResponse<RemoteAccessPolicyRule>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(
        &self,
        enumeration_context: &str,
    ) -> Result<BodyResponse<RemoteAccessPolicyRule>, ClientError> {
        self.base.pull(enumeration_context)
    }

    /// Updates the rule named by `data.policy_rule_name`.
    pub fn put(
        &self,
        data: RemoteAccessPolicyRule,
    ) -> Result<BodyResponse<RemoteAccessPolicyRule>, ClientError> {
        let selectors = policy_rule_selector(&data.policy_rule_name);
        self.base.put(data, true, Some(&selectors))
    }

    pub fn delete(
        &self,
        policy_rule_name: &str,
    ) -> Result<BodyResponse<RemoteAccessPolicyRule>, ClientError> {
        self.base.delete(&policy_rule_selector(policy_rule_name))
    }
}
