use std::fmt;

use amt_wsman::{EndpointReference, Fault, Header, ResponseEnvelope, WsmanError, response::node_source};
use amt_xml::{
    XmlError,
    parser::{self, Node, XmlDeserialize},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::transport::Message;

/// The verb that produced a response. Selects the body variant to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Enumerate,
    Pull,
    Get,
    Put,
    Create,
    Delete,
    RequestStateChange,
    Method(String),
}

impl Operation {
    /// Local name of the element expected as the first `<Body>` child.
    ///
    /// `None` means the response body carries no payload.
    pub fn expected_payload(&self, class_name: &str) -> Option<String> {
        match self {
            Self::Enumerate => Some("EnumerateResponse".to_owned()),
            Self::Pull => Some("PullResponse".to_owned()),
            Self::Get | Self::Put => Some(class_name.to_owned()),
            Self::Create => Some("ResourceCreated".to_owned()),
            Self::Delete => None,
            Self::RequestStateChange => Some("RequestStateChange_OUTPUT".to_owned()),
            Self::Method(method) => Some(format!("{method}_OUTPUT")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enumerate => f.write_str("Enumerate"),
            Self::Pull => f.write_str("Pull"),
            Self::Get => f.write_str("Get"),
            Self::Put => f.write_str("Put"),
            Self::Create => f.write_str("Create"),
            Self::Delete => f.write_str("Delete"),
            Self::RequestStateChange => f.write_str("RequestStateChange"),
            Self::Method(method) => f.write_str(method),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid response XML: {0}")]
    Xml(#[from] XmlError),

    #[error("Invalid response envelope: {0}")]
    Envelope(#[from] WsmanError),

    #[error("Missing {expected} payload in {operation} response")]
    MissingPayload { operation: String, expected: String },

    #[error("Expected {expected} payload, found {found}")]
    UnexpectedPayload { expected: String, found: String },

    #[error("Failed to deserialize {element}: {source}")]
    Payload {
        element: String,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Method {0} is not bound for this class")]
    UnsupportedMethod(String),

    #[error("SOAP fault: {0}")]
    Fault(Fault),
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Deserializes a payload element from its source text with quick-xml.
///
/// Elements are matched by local name, so response prefixes do not matter.
pub fn deserialize_node<T: DeserializeOwned>(node: Node<'_, '_>) -> Result<T, ParseError> {
    quick_xml::de::from_str(node_source(node)).map_err(|source| ParseError::Payload {
        element: node.tag_name().name().to_owned(),
        source,
    })
}

/// Output of a class' extrinsic methods, chosen by method name.
pub trait MethodOutput: Sized {
    fn from_method_payload(method: &str, node: Node<'_, '_>) -> Result<Self, ParseError>;
}

/// Classes without bound methods.
impl MethodOutput for () {
    fn from_method_payload(method: &str, _node: Node<'_, '_>) -> Result<Self, ParseError> {
        Err(ParseError::UnsupportedMethod(method.to_owned()))
    }
}

/// Untyped rendering, used where no binding exists for the class.
impl MethodOutput for serde_json::Value {
    fn from_method_payload(_method: &str, node: Node<'_, '_>) -> Result<Self, ParseError> {
        deserialize_node(node)
    }
}

/// `<{Method}_OUTPUT><ReturnValue>N</ReturnValue></{Method}_OUTPUT>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnValue {
    #[serde(rename = "ReturnValue")]
    pub return_value: i32,
}

impl ReturnValue {
    pub fn is_success(&self) -> bool {
        self.return_value == 0
    }
}

impl MethodOutput for ReturnValue {
    fn from_method_payload(_method: &str, node: Node<'_, '_>) -> Result<Self, ParseError> {
        deserialize_node(node)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerateResponse {
    #[serde(rename = "EnumerationContext")]
    pub enumeration_context: String,
}

/// One Pull batch. `enumeration_context` is empty once the sequence ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullResponse<T> {
    pub items: Vec<T>,
    pub enumeration_context: String,
    pub end_of_sequence: bool,
}

impl<T: DeserializeOwned> PullResponse<T> {
    pub fn from_node(node: Node<'_, '_>) -> Result<Self, ParseError> {
        let items = match parser::find_child(node, "Items") {
            Some(items) => items
                .children()
                .filter(Node::is_element)
                .map(deserialize_node)
                .collect::<Result<Vec<T>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            items,
            enumeration_context: parser::child_text(node, "EnumerationContext"),
            end_of_sequence: parser::find_child(node, "EndOfSequence").is_some(),
        })
    }
}

/// The parsed body of a response. Exactly one variant, matching the invoked
/// operation, is produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResourceBody<T, M = ()> {
    Get(T),
    Put(T),
    Create(EndpointReference),
    Delete,
    Enumerate(EnumerateResponse),
    Pull(PullResponse<T>),
    RequestStateChange(ReturnValue),
    Method(M),
}

impl<T, M> ResourceBody<T, M>
where
    T: DeserializeOwned,
    M: MethodOutput,
{
    pub fn from_envelope(
        operation: &Operation,
        class_name: &str,
        envelope: &ResponseEnvelope<'_>,
    ) -> Result<Self, ParseError> {
        let Some(expected) = operation.expected_payload(class_name) else {
            return Ok(Self::Delete);
        };

        let node = envelope.payload().ok_or_else(|| ParseError::MissingPayload {
            operation: operation.to_string(),
            expected: expected.clone(),
        })?;

        let found = node.tag_name().name();
        if found != expected {
            return Err(ParseError::UnexpectedPayload {
                expected,
                found: found.to_owned(),
            });
        }

        debug!(%operation, class = class_name, payload = found, "parsing response payload");

        Ok(match operation {
            Operation::Enumerate => Self::Enumerate(deserialize_node(node)?),
            Operation::Pull => Self::Pull(PullResponse::from_node(node)?),
            Operation::Get => Self::Get(deserialize_node(node)?),
            Operation::Put => Self::Put(deserialize_node(node)?),
            Operation::Create => Self::Create(deserialize_node(node)?),
            Operation::Delete => Self::Delete,
            Operation::RequestStateChange => Self::RequestStateChange(deserialize_node(node)?),
            Operation::Method(method) => Self::Method(M::from_method_payload(method, node)?),
        })
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Get(instance) | Self::Put(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn enumerate(&self) -> Option<&EnumerateResponse> {
        match self {
            Self::Enumerate(response) => Some(response),
            _ => None,
        }
    }

    pub fn pull(&self) -> Option<&PullResponse<T>> {
        match self {
            Self::Pull(response) => Some(response),
            _ => None,
        }
    }

    pub fn created(&self) -> Option<&EndpointReference> {
        match self {
            Self::Create(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn method_output(&self) -> Option<&M> {
        match self {
            Self::Method(output) => Some(output),
            _ => None,
        }
    }

    pub fn return_value(&self) -> Option<i32> {
        match self {
            Self::RequestStateChange(output) => Some(output.return_value),
            _ => None,
        }
    }
}

/// Outcome of one verb call.
///
/// Without a transport the request is built but not sent: `header` and
/// `body` are `None` and only `message.xml_input` is set.
#[derive(Debug, Clone, Serialize)]
pub struct Response<B> {
    #[serde(skip)]
    pub message: Message,
    pub header: Option<Header>,
    pub body: Option<B>,
}

impl<B> Response<B> {
    pub fn unsent(message: Message) -> Self {
        Self {
            message,
            header: None,
            body: None,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.message.is_sent()
    }

    pub fn xml_input(&self) -> &str {
        &self.message.xml_input
    }

    pub fn xml_output(&self) -> &str {
        &self.message.xml_output
    }
}

impl<B: Serialize> Response<B> {
    pub fn json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn yaml(&self) -> Result<String, OutputError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// The fault in `xml`, if it is a well-formed envelope carrying one.
pub fn fault_from_xml(xml: &str) -> Option<Fault> {
    let document = parser::parse(xml).ok()?;
    let envelope = ResponseEnvelope::from_document(&document).ok()?;
    envelope.fault().ok().flatten()
}

/// The response header of `xml`, even when its body cannot be parsed.
pub fn header_from_xml(xml: &str) -> Option<Header> {
    let document = parser::parse(xml).ok()?;
    ResponseEnvelope::from_document(&document)
        .ok()
        .map(|envelope| envelope.header)
}

fn request_message_id(xml_input: &str) -> Option<String> {
    let document = parser::parse(xml_input).ok()?;
    let header = parser::find_child(document.root_element(), "Header")?;
    Header::from_node(header).ok().map(|header| header.message_id)
}

/// Parses `message.xml_output` into its header and the body variant for
/// `operation`. A SOAP fault is reported as [`ParseError::Fault`].
pub fn parse_response<T, M>(
    operation: &Operation,
    class_name: &str,
    message: &Message,
) -> Result<(Header, ResourceBody<T, M>), ParseError>
where
    T: DeserializeOwned,
    M: MethodOutput,
{
    let document = parser::parse(&message.xml_output)?;
    let envelope = ResponseEnvelope::from_document(&document)?;

    if let Some(fault) = envelope.fault()? {
        return Err(ParseError::Fault(fault));
    }

    let relates_to = &envelope.header.relates_to;
    if let Some(message_id) = request_message_id(&message.xml_input) {
        if !relates_to.is_empty() && *relates_to != message_id {
            warn!(
                request = %message_id,
                %relates_to,
                "response does not relate to the request"
            );
        }
    }

    let body = ResourceBody::from_envelope(operation, class_name, &envelope)?;
    Ok((envelope.header, body))
}
