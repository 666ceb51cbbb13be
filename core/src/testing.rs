//! Scripted transport shared by unit tests.

use std::sync::{Arc, Mutex};

use crate::adapter::HttpClient;
use crate::api::PortfolioApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::observer::NoopObserver;
use crate::transport::Transport;

type Responder = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, ApiError> + Send + Sync>;

pub(crate) struct StubTransport {
    requests: Mutex<Vec<HttpRequest>>,
    respond: Responder,
}

impl StubTransport {
    pub(crate) fn new(
        respond: impl Fn(&HttpRequest) -> Result<HttpResponse, ApiError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    /// Answer every request with `status` and `body`.
    pub(crate) fn json(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(response(status, &body)))
    }

    pub(crate) fn failing(err: ApiError) -> Arc<Self> {
        Self::new(move |_| Err(err.clone()))
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.respond)(request)
    }
}

pub(crate) fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    }
}

pub(crate) fn api(transport: Arc<StubTransport>) -> PortfolioApi {
    let http = HttpClient::new(ClientConfig::default())
        .with_transport(transport)
        .with_observer(Arc::new(NoopObserver));
    PortfolioApi::new(http)
}
