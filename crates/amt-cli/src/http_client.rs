use std::{sync::Arc, time::Duration};

use amt_client::{Transport, TransportError};
use tracing::{debug, error, info, info_span};

const SOAP_CONTENT_TYPE: &str = "application/soap+xml;charset=UTF-8";

/// Posts envelopes to one WS-Management endpoint. No authentication.
pub struct UreqTransport {
    agent: ureq::Agent,
    endpoint: String,
}

impl UreqTransport {
    pub fn new(endpoint: impl Into<String>, accept_invalid_certs: bool) -> anyhow::Result<Self> {
        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .danger_accept_invalid_hostnames(accept_invalid_certs)
            .build()?;

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(30))
            .timeout_read(Duration::from_secs(60))
            .tls_connector(Arc::new(tls))
            .build();

        Ok(Self {
            agent,
            endpoint: endpoint.into(),
        })
    }
}

impl Transport for UreqTransport {
    fn post(&self, xml: &str) -> Result<String, TransportError> {
        let span = info_span!("http.request", url = %self.endpoint);
        let _enter = span.enter();

        debug!(body_length = xml.len(), "sending request");

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", SOAP_CONTENT_TYPE)
            .send_string(xml);

        match response {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| TransportError::Connection(e.to_string()))?;
                info!(status, response_body_length = body.len(), "response received");
                Ok(body)
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                debug!(status, response_body_length = body.len(), "received status response");
                Err(TransportError::Status { status, body })
            }
            Err(e) => {
                error!(error = %e, "request failed");
                Err(TransportError::Connection(e.to_string()))
            }
        }
    }
}
