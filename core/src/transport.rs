//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! The adapter never talks to a socket itself. `Transport` is the seam
//! between request building and I/O: `UreqTransport` is the production
//! implementation, tests plug in scripted transports. A transport returns
//! every response it receives, whatever the status; only a missing response
//! is an error.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Message for any failure where no response was received. The
/// underlying cause is logged at debug level.
pub const NETWORK_ERROR: &str = "Network Error";

/// Performs one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a ureq agent.
///
/// The agent is configured once with a global timeout and with
/// status-code-as-error disabled, so 4xx/5xx responses come back as data.
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    fn map_error(&self, err: ureq::Error) -> ApiError {
        match err {
            ureq::Error::Timeout(_) => self.timeout_error(),
            ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                self.timeout_error()
            }
            other => {
                tracing::debug!(error = %other, "transport failure");
                ApiError::Network(NETWORK_ERROR.to_string())
            }
        }
    }

    fn timeout_error(&self) -> ApiError {
        ApiError::Timeout {
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), &request.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(url), &request.headers).send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), &request.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                with_headers(self.agent.put(url), &request.headers).send_empty()
            }
        };
        let mut response = result.map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| self.map_error(e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
