//! Typed client for the Raiffeisen Bank CZ Premium API.
//!
//! Authenticates with mutual TLS using the PKCS#12 certificate bundle
//! issued by the bank's developer portal. Construction decodes the bundle
//! once; every account, transaction, statement, and batch call then rides
//! the mTLS transport, while FX rate calls use a plain one.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rbcz_client::{ApiOutcome, GetAccountsQuery, connect};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), rbcz_client::ClientError> {
//! let api = connect(
//!     "my-client-id",
//!     "/path/to/bundle.p12",
//!     "bundle-password",
//!     "api.rb.cz",
//!     true, // sandbox mode
//! )?;
//!
//! let query = GetAccountsQuery {
//!     page: Some(1),
//!     size: Some(15),
//! };
//! match api.get_accounts(&query).await? {
//!     ApiOutcome::Success(list) => {
//!         for account in list.accounts {
//!             println!("{} ({})", account.iban, account.main_currency);
//!         }
//!     }
//!     ApiOutcome::Error(error) => {
//!         eprintln!("{}: {:?}", error.status_code, error.error_description);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A bad bundle or password fails `connect` immediately; the client can
//! never exist in an unusable state. Remote API errors come back as
//! [`ApiOutcome::Error`] values, transport faults as [`ClientError`].

use std::path::Path;
use std::sync::Arc;

pub use rbcz_application::{ClientError, ClientResult, PremiumApi, ports};
pub use rbcz_domain::api::*;
pub use rbcz_domain::{
    ApiErrorResponse, ApiOutcome, ApiRequest, CertificateError, ClientConfig, ClientIdentity,
    HttpMethod, RequestBody, endpoint,
};
pub use rbcz_infrastructure::{ReqwestHttpClient, load_certificate, load_certificate_file};

/// Builds a [`PremiumApi`] from the certificate bundle on disk.
///
/// Reads the PKCS#12 bundle, derives the TLS identity, and wires the
/// mTLS-bound and plain transports. With `sandbox` set, every endpoint
/// targets the bank's mock path set.
///
/// # Errors
///
/// Fails with the certificate loader's error when the bundle or password
/// is bad, with [`ClientError::Io`] when the file cannot be read, and
/// with [`ClientError::Transport`] when a transport cannot be built.
pub fn connect(
    client_id: impl Into<String>,
    certificate_path: impl AsRef<Path>,
    password: &str,
    hostname: impl Into<String>,
    sandbox: bool,
) -> ClientResult<PremiumApi> {
    let identity = load_certificate_file(certificate_path, password)?;
    let secure = ReqwestHttpClient::with_identity(&identity)?;
    let public = ReqwestHttpClient::new()?;

    Ok(PremiumApi::new(
        ClientConfig::new(client_id, hostname, sandbox),
        Arc::new(secure),
        Arc::new(public),
    ))
}
