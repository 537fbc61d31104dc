use amt_wsman::{MessageCreator, impl_namespaceable};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "AMT_BootSettingData";

/// Boot options applied on the next boot initiated through AMT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootSettingData {
    #[serde(
        rename = "@xmlns:h",
        skip_deserializing,
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,
    #[serde(rename(serialize = "h:BIOSPause", deserialize = "BIOSPause"))]
    pub bios_pause: bool,
    #[serde(rename(serialize = "h:BIOSSetup", deserialize = "BIOSSetup"))]
    pub bios_setup: bool,
    #[serde(rename(serialize = "h:BootMediaIndex", deserialize = "BootMediaIndex"))]
    pub boot_media_index: i32,
    #[serde(rename(serialize = "h:ConfigurationDataReset", deserialize = "ConfigurationDataReset"))]
    pub configuration_data_reset: bool,
    #[serde(rename(serialize = "h:ElementName", deserialize = "ElementName"))]
    pub element_name: String,
    #[serde(rename(serialize = "h:EnforceSecureBoot", deserialize = "EnforceSecureBoot"))]
    pub enforce_secure_boot: bool,
    #[serde(rename(serialize = "h:FirmwareVerbosity", deserialize = "FirmwareVerbosity"))]
    pub firmware_verbosity: i32,
    #[serde(rename(serialize = "h:ForcedProgressEvents", deserialize = "ForcedProgressEvents"))]
    pub forced_progress_events: bool,
    #[serde(rename(serialize = "h:IDERBootDevice", deserialize = "IDERBootDevice"))]
    pub ider_boot_device: i32,
    #[serde(rename(serialize = "h:InstanceID", deserialize = "InstanceID"))]
    pub instance_id: String,
    #[serde(rename(serialize = "h:LockKeyboard", deserialize = "LockKeyboard"))]
    pub lock_keyboard: bool,
    #[serde(rename(serialize = "h:LockPowerButton", deserialize = "LockPowerButton"))]
    pub lock_power_button: bool,
    #[serde(rename(serialize = "h:LockResetButton", deserialize = "LockResetButton"))]
    pub lock_reset_button: bool,
    #[serde(rename(serialize = "h:LockSleepButton", deserialize = "LockSleepButton"))]
    pub lock_sleep_button: bool,
    #[serde(rename(serialize = "h:OwningEntity", deserialize = "OwningEntity"))]
    pub owning_entity: String,
    #[serde(rename(serialize = "h:ReflashBIOS", deserialize = "ReflashBIOS"))]
    pub reflash_bios: bool,
    #[serde(rename(serialize = "h:SecureErase", deserialize = "SecureErase"))]
    pub secure_erase: bool,
    #[serde(rename(serialize = "h:UseIDER", deserialize = "UseIDER"))]
    pub use_ider: bool,
    #[serde(rename(serialize = "h:UseSOL", deserialize = "UseSOL"))]
    pub use_sol: bool,
    #[serde(rename(serialize = "h:UseSafeMode", deserialize = "UseSafeMode"))]
    pub use_safe_mode: bool,
    #[serde(rename(serialize = "h:UserPasswordBypass", deserialize = "UserPasswordBypass"))]
    pub user_password_bypass: bool,
}

impl_namespaceable!(BootSettingData, instance_id);

pub struct BootSettingDataMessages<'a> {
    base: Base<'a, BootSettingData>,
}

impl<'a> BootSettingDataMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
        }
    }

    pub fn get(&self) -> Result<BodyResponse<BootSettingData>, ClientError> {
        self.base.get(None)
    }

    pub fn enumerate(&self) -> Result<BodyResponse<BootSettingData>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BodyResponse<BootSettingData>, ClientError> {
        self.base.pull(enumeration_context)
    }

    /// Writes the settings back. AMT addresses the singleton without selectors.
    pub fn put(&self, data: BootSettingData) -> Result<BodyResponse<BootSettingData>, ClientError> {
        self.base.put(data, false, None)
    }
}
