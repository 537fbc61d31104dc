//! DMTF CIM classes (`http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/`).

pub mod boot;
pub mod kvm;
pub mod service_available;

use amt_wsman::MessageCreator;

use crate::transport::Transport;

pub use boot::{BootConfigSetting, BootConfigSettingMessages, BootService, BootServiceMessages};
pub use kvm::{KvmRedirectionSap, KvmRedirectionSapMessages, KvmRedirectionState};
pub use service_available::{ServiceAvailableToElement, ServiceAvailableToElementMessages};

pub const RESOURCE_URI_PREFIX: &str = "http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/";

/// Entry point for CIM classes, with its own message counter.
pub struct Messages<'t> {
    creator: MessageCreator,
    transport: Option<&'t dyn Transport>,
}

impl<'t> Messages<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self::with_creator(MessageCreator::new(RESOURCE_URI_PREFIX), Some(transport))
    }

    pub fn offline() -> Self {
        Self::with_creator(MessageCreator::new(RESOURCE_URI_PREFIX), None)
    }

    pub fn with_creator(creator: MessageCreator, transport: Option<&'t dyn Transport>) -> Self {
        Self { creator, transport }
    }

    pub fn creator(&self) -> &MessageCreator {
        &self.creator
    }

    pub fn boot_config_setting(&self) -> BootConfigSettingMessages<'_> {
        BootConfigSettingMessages::new(&self.creator, self.transport)
    }

    pub fn boot_service(&self) -> BootServiceMessages<'_> {
        BootServiceMessages::new(&self.creator, self.transport)
    }

    pub fn kvm_redirection_sap(&self) -> KvmRedirectionSapMessages<'_> {
        KvmRedirectionSapMessages::new(&self.creator, self.transport)
    }

    pub fn service_available_to_element(&self) -> ServiceAvailableToElementMessages<'_> {
        ServiceAvailableToElementMessages::new(&self.creator, self.transport)
    }
}
