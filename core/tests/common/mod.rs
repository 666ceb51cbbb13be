//! Live mock-server harness shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use mock_server::{AppState, SharedState, Store};
use portfolio_core::{ClientConfig, HttpClient, NoopObserver, PortfolioApi};

/// Start the mock server on a random port in a background thread and
/// return its base URL.
pub fn start_server(state: SharedState) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_state(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

pub fn fresh_state() -> SharedState {
    AppState::new(Store::default())
}

pub fn api_for(base_url: &str) -> PortfolioApi {
    let http = HttpClient::new(ClientConfig::default().with_base_url(base_url))
        .with_observer(Arc::new(NoopObserver));
    PortfolioApi::new(http)
}

/// Run an async state change from a synchronous test.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}
