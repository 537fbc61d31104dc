use serde::Serialize;

/// Posts one request envelope and returns the response envelope.
///
/// Implementations own connection handling and authentication. The client
/// never retries; whatever the transport reports is surfaced to the caller.
pub trait Transport {
    fn post(&self, xml: &str) -> Result<String, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to reach endpoint: {0}")]
    Connection(String),

    #[error("Endpoint answered with HTTP status {status}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Response body sent along with a failing HTTP status, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

/// One request/response exchange as raw XML.
///
/// `xml_output` stays empty until a transport has answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub xml_input: String,
    pub xml_output: String,
}

impl Message {
    pub fn new(xml_input: impl Into<String>) -> Self {
        Self {
            xml_input: xml_input.into(),
            xml_output: String::new(),
        }
    }

    pub fn is_sent(&self) -> bool {
        !self.xml_output.is_empty()
    }
}
