//! Application layer for the Raiffeisen Bank CZ Premium API client.
//!
//! Defines the transport port ([`ports::HttpClient`]) and the
//! [`PremiumApi`] client that shapes, dispatches, and normalizes every
//! remote operation against that port. Adapters live in the
//! infrastructure crate.

pub mod client;
pub mod error;
pub mod ports;

pub use client::PremiumApi;
pub use error::{ClientError, ClientResult};
