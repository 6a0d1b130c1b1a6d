//! Domain types for the Raiffeisen Bank CZ Premium API client.
//!
//! This crate defines the pure data model: the TLS client identity, the
//! client configuration, the endpoint catalogue, request and outcome types,
//! and the per-endpoint query/response models. No I/O happens here.

pub mod api;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod id;
pub mod identity;
pub mod outcome;
pub mod request;

pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::CertificateError;
pub use id::generate_request_id;
pub use identity::ClientIdentity;
pub use outcome::{ApiErrorResponse, ApiOutcome};
pub use request::{ApiRequest, HttpMethod, RequestBody};
