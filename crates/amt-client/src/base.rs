use std::marker::PhantomData;

use amt_wsman::{MessageCreator, Namespaceable, SelectorSet};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    ClientError,
    response::{MethodOutput, Operation, ParseError, ResourceBody, Response, fault_from_xml, header_from_xml, parse_response},
    transport::{Message, Transport},
};

/// Verb layer shared by every binding: builds the request with
/// [`amt_wsman::Base`], posts it when a transport is configured and parses
/// the reply into `ResourceBody<T, M>`.
pub struct Base<'a, T, M = ()> {
    wsman: amt_wsman::Base<'a>,
    transport: Option<&'a dyn Transport>,
    _body: PhantomData<fn() -> (T, M)>,
}

pub type BodyResponse<T, M = ()> = Response<ResourceBody<T, M>>;

impl<'a, T, M> Base<'a, T, M>
where
    T: DeserializeOwned,
    M: MethodOutput,
{
    pub fn new(
        creator: &'a MessageCreator,
        class_name: &'a str,
        transport: Option<&'a dyn Transport>,
    ) -> Self {
        Self {
            wsman: amt_wsman::Base::new(creator, class_name),
            transport,
            _body: PhantomData,
        }
    }

    pub fn class_name(&self) -> &'a str {
        self.wsman.class_name()
    }

    pub fn enumerate(&self) -> Result<BodyResponse<T, M>, ClientError> {
        let xml_input = self.wsman.enumerate()?;
        self.execute(Operation::Enumerate, xml_input)
    }

    pub fn pull(&self, enumeration_context: &str) -> Result<BodyResponse<T, M>, ClientError> {
        let xml_input = self.wsman.pull(enumeration_context)?;
        self.execute(Operation::Pull, xml_input)
    }

    pub fn get(&self, selectors: Option<&SelectorSet>) -> Result<BodyResponse<T, M>, ClientError> {
        let xml_input = self.wsman.get(selectors)?;
        self.execute(Operation::Get, xml_input)
    }

    pub fn put<D>(
        &self,
        data: D,
        use_header_selector: bool,
        selectors: Option<&SelectorSet>,
    ) -> Result<BodyResponse<T, M>, ClientError>
    where
        D: Serialize + Namespaceable,
    {
        let xml_input = self.wsman.put(data, use_header_selector, selectors)?;
        self.execute(Operation::Put, xml_input)
    }

    pub fn create<D>(
        &self,
        data: D,
        selectors: Option<&SelectorSet>,
    ) -> Result<BodyResponse<T, M>, ClientError>
    where
        D: Serialize + Namespaceable,
    {
        let xml_input = self.wsman.create(data, selectors)?;
        self.execute(Operation::Create, xml_input)
    }

    pub fn delete(&self, selectors: &SelectorSet) -> Result<BodyResponse<T, M>, ClientError> {
        let xml_input = self.wsman.delete(selectors)?;
        self.execute(Operation::Delete, xml_input)
    }

    pub fn request_state_change(
        &self,
        action: &str,
        requested_state: i32,
    ) -> Result<BodyResponse<T, M>, ClientError> {
        let xml_input = self.wsman.request_state_change(action, requested_state)?;
        self.execute(Operation::RequestStateChange, xml_input)
    }

    pub fn method<D>(
        &self,
        method: &str,
        selectors: Option<&SelectorSet>,
        input: Option<D>,
    ) -> Result<BodyResponse<T, M>, ClientError>
    where
        D: Serialize + Namespaceable,
    {
        let xml_input = self.wsman.method_with(method, selectors, input)?;
        self.execute(Operation::Method(method.to_owned()), xml_input)
    }

    #[instrument(skip_all, fields(class = self.class_name(), %operation))]
    fn execute(
        &self,
        operation: Operation,
        xml_input: String,
    ) -> Result<BodyResponse<T, M>, ClientError> {
        let mut message = Message::new(xml_input);

        let Some(transport) = self.transport else {
            debug!("no transport configured, request built but not sent");
            return Ok(Response::unsent(message));
        };

        match transport.post(&message.xml_input) {
            Ok(xml_output) => message.xml_output = xml_output,
            Err(source) => {
                if let Some(body) = source.response_body() {
                    message.xml_output = body.to_owned();
                }
                if let Some(fault) = fault_from_xml(&message.xml_output) {
                    return Err(ClientError::Fault {
                        fault,
                        message: Box::new(message),
                    });
                }
                return Err(ClientError::Transport {
                    source,
                    message: Box::new(message),
                });
            }
        }

        debug!(response_length = message.xml_output.len(), "received response");

        match parse_response::<T, M>(&operation, self.class_name(), &message) {
            Ok((header, body)) => Ok(Response {
                message,
                header: Some(header),
                body: Some(body),
            }),
            Err(ParseError::Fault(fault)) => Err(ClientError::Fault {
                fault,
                message: Box::new(message),
            }),
            Err(source) => Err(ClientError::Deserialize {
                source,
                header: header_from_xml(&message.xml_output).map(Box::new),
                message: Box::new(message),
            }),
        }
    }
}
