//! Port definitions (interfaces)
//!
//! Ports define the boundary between the client logic and the secure HTTP
//! transport. The infrastructure crate provides the reqwest-backed
//! adapters.

mod http_client;

pub use http_client::{HttpClient, HttpClientError, HttpResponse};
