//! Infrastructure adapters for the Raiffeisen Bank CZ Premium API client.
//!
//! Provides the PKCS#12 certificate loader and the reqwest-backed
//! implementations of the transport port.

pub mod adapters;
pub mod certificate;

pub use adapters::ReqwestHttpClient;
pub use certificate::{load_certificate, load_certificate_file};
