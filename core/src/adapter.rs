//! HTTP client adapter: base URL, timeout, default headers, logging.
//!
//! # Design
//! `HttpClient` keeps the split between building a request
//! (`build_request`, pure) and interpreting a response (`parse_response`,
//! pure). `send` glues them together around a [`Transport`] and reports to
//! a [`RequestObserver`]. Nothing here retries.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, HttpRequest, HttpResponse};
use crate::observer::{RequestObserver, TracingObserver};
use crate::transport::{Transport, UreqTransport};

/// Headers attached to every request.
fn default_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Configured entry point for all outbound calls.
///
/// Cloning is cheap; clones share the transport and observer.
#[derive(Clone)]
pub struct HttpClient {
    config: ClientConfig,
    headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
    observer: Arc<dyn RequestObserver>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(config.timeout));
        Self {
            config,
            headers: default_headers(),
            transport,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Client configured from `PORTFOLIO_BACKEND_URL`.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join `path` onto the base URL and attach the default headers.
    pub fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url),
            headers: self.headers.clone(),
            body,
        }
    }

    /// Execute `request` and decode a 2xx body as `T`.
    pub fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<ApiResponse<T>, ApiError> {
        self.observer.on_request(&request);
        let result = self
            .transport
            .execute(&request)
            .and_then(parse_response::<T>);
        if let Err(err) = &result {
            self.observer.on_error(&request, err);
        }
        result
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.send(self.build_request(HttpMethod::Get, path, None))
    }

    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(self.build_request(HttpMethod::Post, path, Some(body)))
    }

    pub fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.send(self.build_request(HttpMethod::Put, path, Some(body)))
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Map a raw response to `ApiResponse<T>` or the matching `ApiError`.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<T>, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    let data = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(ApiResponse {
        status: response.status,
        data,
    })
}
