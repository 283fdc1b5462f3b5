//! HTTP implementation of the `ManagementClient` port.

use castellan_common::{ManagementRequest, ManagementResponse};

use crate::application::ports::ManagementClient;
use crate::domain::TransportError;

/// Blocking JSON-over-HTTP management client.
///
/// One `execute` call is one POST to the management endpoint. Timeout policy
/// is left to the transport defaults; callers never retry.
pub struct HttpManagementClient {
    endpoint: String,
}

impl HttpManagementClient {
    /// Create a client for the given management endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(response: ureq::Response) -> Result<ManagementResponse, TransportError> {
        response
            .into_json()
            .map_err(|e| TransportError::Protocol(e.to_string()))
    }
}

impl ManagementClient for HttpManagementClient {
    fn execute(&self, request: &ManagementRequest) -> Result<ManagementResponse, TransportError> {
        match ureq::post(&self.endpoint).send_json(request) {
            Ok(response) => Self::parse(response),
            // Controllers report operation failures with an error status but
            // still ship a management envelope in the body.
            Err(ureq::Error::Status(_, response)) => Self::parse(response),
            Err(ureq::Error::Transport(transport)) => {
                Err(TransportError::Io(transport.to_string()))
            }
        }
    }
}
