pub mod actions;
pub mod addressing;
pub mod base;
pub mod body;
pub mod creator;
pub mod macros;
pub mod response;
pub mod selector;

pub use addressing::{EndpointReference, ReferenceParameters};
pub use base::Base;
pub use body::Namespaceable;
pub use creator::MessageCreator;
pub use response::{Fault, Header, ResponseEnvelope};
pub use selector::{Selector, SelectorSet};

#[derive(Debug, thiserror::Error)]
pub enum WsmanError {
    #[error("Missing selector for {0}")]
    MissingSelector(String),

    #[error("Missing action URI for {0}")]
    MissingAction(String),

    #[error("Missing WS-Management class name")]
    MissingClassName,

    #[error("Missing enumeration context for {0}")]
    MissingEnumerationContext(String),

    #[error("Failed to serialize payload for {class}: {reason}")]
    Serialize { class: String, reason: String },

    #[error("XML error: {0}")]
    Xml(#[from] amt_xml::XmlError),
}
