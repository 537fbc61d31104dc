use amt_wsman::{EndpointReference, MessageCreator};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "CIM_ServiceAvailableToElement";

/// Association between a service and the element using it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAvailableToElement {
    #[serde(rename = "ServiceProvided")]
    pub service_provided: EndpointReference,
    #[serde(rename = "UserOfService")]
    pub user_of_service: EndpointReference,
}

pub struct ServiceAvailableToElementMessages<'a> {
    base: Base<'a, ServiceAvailableToElement>,
}

impl<'a> ServiceAvailableToElementMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
        }
    }

    pub fn enumerate(&self) -> Result<BodyResponse<ServiceAvailableToElement>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(
        &self,
        enumeration_context: &str,
    ) -> Result<BodyResponse<ServiceAvailableToElement>, ClientError> {
        self.base.pull(enumeration_context)
    }
}
