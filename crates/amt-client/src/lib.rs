pub mod amt;
pub mod base;
pub mod cim;
pub mod ips;
pub mod response;
pub mod transport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use amt_wsman::{EndpointReference, Fault, Header, SelectorSet};
pub use base::{Base, BodyResponse};
pub use response::{
    EnumerateResponse, MethodOutput, Operation, OutputError, ParseError, PullResponse, ResourceBody,
    Response, ReturnValue,
};
pub use transport::{Message, Transport, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid request: {0}")]
    Wsman(#[from] amt_wsman::WsmanError),

    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: TransportError,
        message: Box<Message>,
    },

    #[error("Failed to parse response: {source}")]
    Deserialize {
        #[source]
        source: ParseError,
        header: Option<Box<Header>>,
        message: Box<Message>,
    },

    #[error("WS-Management fault: {fault}")]
    Fault { fault: Fault, message: Box<Message> },
}

impl ClientError {
    /// The response header, when the envelope parsed but its body did not.
    pub fn header(&self) -> Option<&Header> {
        match self {
            Self::Deserialize { header, .. } => header.as_deref(),
            _ => None,
        }
    }

    /// The exchange that failed, when a request was built.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Wsman(_) => None,
            Self::Transport { message, .. }
            | Self::Deserialize { message, .. }
            | Self::Fault { message, .. } => Some(message),
        }
    }
}
