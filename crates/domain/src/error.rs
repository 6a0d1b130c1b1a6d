//! Certificate error types

use thiserror::Error;

/// Errors raised while decoding a PKCS#12 bundle into a TLS client identity.
///
/// All of these are construction-time failures: the client cannot be built
/// until the caller supplies a corrected bundle or password. None of them
/// is ever retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CertificateError {
    /// The bundle could not be decrypted with the supplied password.
    #[error("invalid certificate password")]
    InvalidPassword,

    /// The byte stream is not a well-formed ASN.1/PKCS#12 structure.
    #[error("invalid certificate format: not a PKCS#12 (.p12) bundle")]
    InvalidFormat,

    /// The bundle decrypted, but no private key or no certificate entry
    /// could be located inside it.
    #[error("missing private key or certificate in bundle")]
    MissingKeyOrCertificate,

    /// Any other failure while decoding the bundle.
    #[error("certificate loading error: {0}")]
    Load(String),
}

/// Result type alias for certificate operations.
pub type CertificateResult<T> = Result<T, CertificateError>;
