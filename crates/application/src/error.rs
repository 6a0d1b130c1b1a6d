//! Client error types

use thiserror::Error;

use rbcz_domain::CertificateError;

use crate::ports::HttpClientError;

/// Hard faults raised by the client.
///
/// Remote API errors answered by the bank are *not* here; those are
/// returned as [`rbcz_domain::ApiOutcome::Error`] values. This type covers
/// construction failures and call-time failures where no usable response
/// was obtained.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The PKCS#12 bundle could not be turned into a TLS identity.
    #[error("certificate error: {0}")]
    Certificate(#[from] CertificateError),

    /// The certificate bundle file could not be read.
    #[error("failed to read certificate bundle: {0}")]
    Io(#[from] std::io::Error),

    /// The transport produced no HTTP response at all.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// A 2xx response body did not match the declared payload shape.
    #[error("failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
