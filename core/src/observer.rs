//! Request/response logging hooks for the HTTP adapter.
//!
//! The adapter reports every outbound request and every failure to a
//! `RequestObserver`. Swapping the observer redirects or silences logging
//! without touching the adapter's control flow.

use crate::error::ApiError;
use crate::http::HttpRequest;

pub trait RequestObserver: Send + Sync {
    /// Called before the request is handed to the transport.
    fn on_request(&self, request: &HttpRequest);

    /// Called once per failed request (transport failure or non-2xx status).
    fn on_error(&self, request: &HttpRequest, error: &ApiError);
}

/// Logs through `tracing`. This is the adapter's default observer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, request: &HttpRequest) {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            "Making {} request to: {}",
            request.method,
            request.url
        );
    }

    fn on_error(&self, request: &HttpRequest, error: &ApiError) {
        let payload = match error {
            ApiError::Http { body, .. } if !body.is_empty() => body.clone(),
            other => other
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        };
        tracing::error!(
            method = %request.method,
            url = %request.url,
            status = ?error.status(),
            "API Error: {payload}"
        );
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _request: &HttpRequest) {}

    fn on_error(&self, _request: &HttpRequest, _error: &ApiError) {}
}
