use std::{cell::RefCell, collections::HashMap};

use tracing::trace;

use crate::transport::{Transport, TransportError};

#[derive(Debug, Clone)]
enum Canned {
    Xml(String),
    Status { status: u16, body: String },
}

#[derive(Debug, Default)]
struct MockState {
    current_message: String,
    responses: HashMap<String, Canned>,
    requests: Vec<String>,
}

/// Replays canned responses keyed by the "current message" tag and records
/// every request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    state: RefCell<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, tag: impl Into<String>, xml: impl Into<String>) -> Self {
        self.add_response(tag, xml);
        self
    }

    pub fn add_response(&self, tag: impl Into<String>, xml: impl Into<String>) {
        self.state
            .borrow_mut()
            .responses
            .insert(tag.into(), Canned::Xml(xml.into()));
    }

    /// Answer `tag` with a failing HTTP status and body.
    pub fn add_status(&self, tag: impl Into<String>, status: u16, body: impl Into<String>) {
        self.state.borrow_mut().responses.insert(
            tag.into(),
            Canned::Status {
                status,
                body: body.into(),
            },
        );
    }

    pub fn set_current_message(&self, tag: impl Into<String>) {
        self.state.borrow_mut().current_message = tag.into();
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<String> {
        self.state.borrow().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    fn post(&self, xml: &str) -> Result<String, TransportError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(xml.to_owned());

        let tag = state.current_message.clone();
        trace!(tag = %tag, "mock transport answering");

        match state.responses.get(&tag) {
            Some(Canned::Xml(xml)) => Ok(xml.clone()),
            Some(Canned::Status { status, body }) => Err(TransportError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Err(TransportError::Other(format!(
                "no canned response for `{tag}`"
            ))),
        }
    }
}
