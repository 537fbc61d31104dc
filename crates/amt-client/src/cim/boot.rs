use amt_wsman::{EndpointReference, MessageCreator, SelectorSet, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, ReturnValue, base::Base, transport::Transport};

pub const CONFIG_SETTING_CLASS: &str = "CIM_BootConfigSetting";
pub const SERVICE_CLASS: &str = "CIM_BootService";
pub const SOURCE_SETTING_CLASS: &str = "CIM_BootSourceSetting";

pub const CHANGE_BOOT_ORDER: &str = "ChangeBootOrder";
pub const SET_BOOT_CONFIG_ROLE: &str = "SetBootConfigRole";

pub const BOOT_CONFIGURATION_INSTANCE: &str = "Intel(r) AMT: Boot Configuration 0";
pub const BOOT_SERVICE_NAME: &str = "Intel(r) AMT Boot Service";

pub const SOURCE_HARD_DRIVE: &str = "Intel(r) AMT: Force Hard-drive Boot";
pub const SOURCE_CD_DVD: &str = "Intel(r) AMT: Force CD/DVD Boot";
pub const SOURCE_PXE: &str = "Intel(r) AMT: Force PXE Boot";

/// Role value making a boot configuration the one used on next boot.
pub const ROLE_IS_NEXT_SINGLE_USE: i32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfigSetting {
    #[serde(rename = "ElementName")]
    pub element_name: String,
    #[serde(rename = "InstanceID")]
    pub instance_id: String,
}

#[derive(Debug, Default, Serialize)]
struct ChangeBootOrderInput {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:Source")]
    source: EndpointReference,
}

impl_namespaceable!(ChangeBootOrderInput);

type BootConfigResponse = BodyResponse<BootConfigSetting, ReturnValue>;

pub struct BootConfigSettingMessages<'a> {
    base: Base<'a, BootConfigSetting, ReturnValue>,
    resource_uri_base: &'a str,
}

impl<'a> BootConfigSettingMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CONFIG_SETTING_CLASS, transport),
            resource_uri_base: creator.resource_uri_base(),
        }
    }

    pub fn get(&self) -> Result<BootConfigResponse, ClientError> {
        let selectors = SelectorSet::new().add_selector("InstanceID", BOOT_CONFIGURATION_INSTANCE);
        self.base.get(Some(&selectors))
    }

    pub fn enumerate(&self) -> Result<BootConfigResponse, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BootConfigResponse, ClientError> {
        self.base.pull(enumeration_context)
    }

    /// Puts `source` (a `CIM_BootSourceSetting` InstanceID) first in the boot
    /// order. `None` clears the order.
    pub fn change_boot_order(&self, source: Option<&str>) -> Result<BootConfigResponse, ClientError> {
        let input = source.map(|instance_id| ChangeBootOrderInput {
            source: EndpointReference::new(
                format!("{}{SOURCE_SETTING_CLASS}", self.resource_uri_base),
                SelectorSet::new().add_selector("InstanceID", instance_id),
            ),
            ..Default::default()
        });
        let selectors = SelectorSet::new().add_selector("InstanceID", BOOT_CONFIGURATION_INSTANCE);
        self.base
            .method(CHANGE_BOOT_ORDER, Some(&selectors), input)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootService {
    #[serde(rename = "CreationClassName")]
    pub creation_class_name: String,
    #[serde(rename = "ElementName")]
    pub element_name: String,
    #[serde(rename = "EnabledState")]
    pub enabled_state: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "OperationalStatus")]
    pub operational_status: Vec<i32>,
    #[serde(rename = "RequestedState")]
    pub requested_state: i32,
    #[serde(rename = "SystemCreationClassName")]
    pub system_creation_class_name: String,
    #[serde(rename = "SystemName")]
    pub system_name: String,
}

#[derive(Debug, Default, Serialize)]
struct SetBootConfigRoleInput {
    #[serde(rename = "@xmlns:h", skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(rename = "h:BootConfigSetting")]
    boot_config_setting: EndpointReference,
    #[serde(rename = "h:Role")]
    role: i32,
}

impl_namespaceable!(SetBootConfigRoleInput);

type BootServiceResponse = BodyResponse<BootService, ReturnValue>;

pub struct BootServiceMessages<'a> {
    base: Base<'a, BootService, ReturnValue>,
    resource_uri_base: &'a str,
}

impl<'a> BootServiceMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, SERVICE_CLASS, transport),
            resource_uri_base: creator.resource_uri_base(),
        }
    }

    pub fn get(&self) -> Result<BootServiceResponse, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<BootServiceResponse, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BootServiceResponse, ClientError> {
        self.base.pull(enumeration_context)
    }

    /// Assigns `role` to the boot configuration `instance_id`.
    pub fn set_boot_config_role(
        &self,
        instance_id: &str,
        role: i32,
    ) -> Result<BootServiceResponse, ClientError> {
        let input = SetBootConfigRoleInput {
            boot_config_setting: EndpointReference::new(
                format!("{}{CONFIG_SETTING_CLASS}", self.resource_uri_base),
                SelectorSet::new().add_selector("InstanceID", instance_id),
            ),
            role,
            ..Default::default()
        };
        let selectors = SelectorSet::new().add_selector("Name", BOOT_SERVICE_NAME);
        self.base
            .method(SET_BOOT_CONFIG_ROLE, Some(&selectors), Some(input))
    }
}
