use std::fmt;

use amt_xml::{
    XmlError,
    parser::{self, Document, Node, XmlDeserialize, XmlVisitor},
};
use serde::Serialize;
use tracing::{trace, warn};

use crate::WsmanError;

/// Addressing fields echoed back in a response header.
///
/// Fields missing from the document are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    pub to: String,
    pub relates_to: String,
    pub action: String,
    #[serde(rename = "MessageID")]
    pub message_id: String,
    #[serde(rename = "ResourceURI")]
    pub resource_uri: String,
}

#[derive(Default)]
pub struct HeaderVisitor {
    header: Header,
}

impl<'a> XmlVisitor<'a> for HeaderVisitor {
    type Value = Header;

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children.filter(Node::is_element) {
            let text = child.text().unwrap_or_default().trim().to_owned();
            match child.tag_name().name() {
                "To" => self.header.to = text,
                "RelatesTo" => self.header.relates_to = text,
                "Action" => self.header.action = text,
                "MessageID" => self.header.message_id = text,
                "ResourceURI" => self.header.resource_uri = text,
                other => trace!(tag = other, "ignoring header element"),
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(self.header)
    }
}

impl XmlDeserialize<'_> for Header {
    type Visitor = HeaderVisitor;

    fn visitor() -> Self::Visitor {
        HeaderVisitor::default()
    }
}

/// SOAP 1.2 fault reported in place of a body payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fault {
    pub code: String,
    pub subcode: String,
    pub reason: String,
    pub detail: String,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        if !self.subcode.is_empty() {
            write!(f, " ({})", self.subcode)?;
        }
        if !self.reason.is_empty() {
            write!(f, ": {}", self.reason)?;
        }
        if !self.detail.is_empty() {
            write!(f, " [{}]", self.detail)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FaultVisitor {
    fault: Fault,
}

fn descendant_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl<'a> XmlVisitor<'a> for FaultVisitor {
    type Value = Fault;

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children.filter(Node::is_element) {
            match child.tag_name().name() {
                "Code" => {
                    self.fault.code = parser::child_text(child, "Value");
                    if let Some(subcode) = parser::find_child(child, "Subcode") {
                        self.fault.subcode = parser::child_text(subcode, "Value");
                    }
                }
                "Reason" => self.fault.reason = parser::child_text(child, "Text"),
                "Detail" => self.fault.detail = descendant_text(child),
                other => warn!(tag = other, "unexpected element in SOAP fault"),
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(self.fault)
    }
}

impl XmlDeserialize<'_> for Fault {
    type Visitor = FaultVisitor;

    fn visitor() -> Self::Visitor {
        FaultVisitor::default()
    }
}

/// A parsed response envelope: the header and a handle on `<Body>`.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope<'a> {
    pub header: Header,
    pub body: Node<'a, 'a>,
}

impl<'a> ResponseEnvelope<'a> {
    pub fn from_document(document: &'a Document<'a>) -> Result<Self, WsmanError> {
        let root = document.root_element();
        if root.tag_name().name() != "Envelope" {
            return Err(XmlError::XmlInvalidTag {
                expected: "Envelope".to_owned(),
                found: root.tag_name().name().to_owned(),
            }
            .into());
        }

        let header = parser::find_child(root, "Header")
            .map(Header::from_node)
            .transpose()?
            .unwrap_or_default();

        let body = parser::find_child(root, "Body")
            .ok_or_else(|| XmlError::MissingElement("Body".to_owned()))?;

        Ok(Self { header, body })
    }

    /// First element inside `<Body>`, if any.
    pub fn payload(&self) -> Option<Node<'a, 'a>> {
        parser::first_element_child(self.body)
    }

    /// Source text of the body payload element.
    pub fn payload_xml(&self) -> Option<&'a str> {
        self.payload().map(node_source)
    }

    /// The fault carried in the body, if the payload is `<Fault>`.
    pub fn fault(&self) -> Result<Option<Fault>, WsmanError> {
        match self.payload() {
            Some(node) if node.tag_name().name() == "Fault" => Ok(Some(Fault::from_node(node)?)),
            _ => Ok(None),
        }
    }
}

/// Source text of a node, markup included.
pub fn node_source<'a>(node: Node<'a, 'a>) -> &'a str {
    &node.document().input_text()[node.range()]
}
