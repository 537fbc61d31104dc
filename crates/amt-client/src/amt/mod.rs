//! Intel AMT schema classes (`http://intel.com/wbem/wscim/1/amt-schema/1/`).

pub mod boot_setting_data;
pub mod general_settings;
pub mod public_key;
pub mod redirection;
pub mod remote_access;
pub mod tls;

use amt_wsman::MessageCreator;

use crate::transport::Transport;

pub use boot_setting_data::{BootSettingData, BootSettingDataMessages};
pub use general_settings::{GeneralSettings, GeneralSettingsMessages};
pub use public_key::{
    PublicKeyManagementMessages, PublicKeyManagementOutput, PublicKeyManagementService,
    PublicPrivateKeyPair, PublicPrivateKeyPairMessages,
};
pub use redirection::{RedirectionMessages, RedirectionService, RedirectionState};
pub use remote_access::{RemoteAccessPolicyRule, RemoteAccessPolicyRuleMessages};
pub use tls::{
    TlsCredentialContext, TlsCredentialContextMessages, TlsSettingData, TlsSettingDataMessages,
};

pub const RESOURCE_URI_PREFIX: &str = "http://intel.com/wbem/wscim/1/amt-schema/1/";

/// Entry point for AMT classes. Owns the message counter shared by every
/// class handle it hands out.
pub struct Messages<'t> {
    creator: MessageCreator,
    transport: Option<&'t dyn Transport>,
}

impl<'t> Messages<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self::with_creator(MessageCreator::new(RESOURCE_URI_PREFIX), Some(transport))
    }

    /// Builds requests without sending them.
    pub fn offline() -> Self {
        Self::with_creator(MessageCreator::new(RESOURCE_URI_PREFIX), None)
    }

    pub fn with_creator(creator: MessageCreator, transport: Option<&'t dyn Transport>) -> Self {
        Self { creator, transport }
    }

    pub fn creator(&self) -> &MessageCreator {
        &self.creator
    }

    pub fn boot_setting_data(&self) -> BootSettingDataMessages<'_> {
        BootSettingDataMessages::new(&self.creator, self.transport)
    }

    pub fn general_settings(&self) -> GeneralSettingsMessages<'_> {
        GeneralSettingsMessages::new(&self.creator, self.transport)
    }

    pub fn tls_setting_data(&self) -> TlsSettingDataMessages<'_> {
        TlsSettingDataMessages::new(&self.creator, self.transport)
    }

    pub fn tls_credential_context(&self) -> TlsCredentialContextMessages<'_> {
        TlsCredentialContextMessages::new(&self.creator, self.transport)
    }

    pub fn public_key_management_service(&self) -> PublicKeyManagementMessages<'_> {
        PublicKeyManagementMessages::new(&self.creator, self.transport)
    }

    pub fn public_private_key_pair(&self) -> PublicPrivateKeyPairMessages<'_> {
        PublicPrivateKeyPairMessages::new(&self.creator, self.transport)
    }

    pub fn redirection_service(&self) -> RedirectionMessages<'_> {
        RedirectionMessages::new(&self.creator, self.transport)
    }

    pub fn remote_access_policy_rule(&self) -> RemoteAccessPolicyRuleMessages<'_> {
        RemoteAccessPolicyRuleMessages::new(&self.creator, self.transport)
    }
}
