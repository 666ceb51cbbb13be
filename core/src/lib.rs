//! Client core for the portfolio site's REST backend.
//!
//! # Overview
//! Layers, leaf to root:
//! - [`transport`] executes plain-data requests (ureq in production).
//! - [`adapter::HttpClient`] adds base URL, timeout, JSON headers, status
//!   interpretation and request logging through a [`observer::RequestObserver`].
//! - [`api::PortfolioApi`] names every backend operation.
//! - [`fetch::UseApi`] tracks `{data, loading, error}` for one call site;
//!   [`hooks`] binds it to each resource, [`contact`] handles form
//!   submission.
//! - [`fallback`] and [`sections`] turn settled fetches into what a page
//!   section shows, substituting [`samples`] when the backend has nothing.
//!
//! # Design
//! - Request building and response parsing stay pure; I/O sits behind the
//!   `Transport` trait so tests run against scripted responses.
//! - Hook state is owned by the caller. There is no global cache.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod adapter;
pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod hooks;
pub mod http;
pub mod observer;
pub mod samples;
pub mod sections;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use adapter::HttpClient;
pub use api::PortfolioApi;
pub use config::ClientConfig;
pub use contact::{ContactForm, UseContactForm};
pub use error::{resolve_message, ApiError};
pub use fallback::Resolved;
pub use fetch::{FetchState, Ticket, UseApi};
pub use http::{ApiResponse, HttpMethod, HttpRequest, HttpResponse};
pub use observer::{NoopObserver, RequestObserver, TracingObserver};
pub use transport::{Transport, UreqTransport};
pub use types::{
    AboutInfo, Artwork, Certification, ContactMessage, HealthStatus, NewArtwork,
    NewCertification, NewProject, Project,
};
