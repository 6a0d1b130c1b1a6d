//! PKCS#12 certificate loading.
//!
//! Converts a password-protected PKCS#12 (.p12) bundle into the PEM
//! certificate/key pair required for mutual TLS. Pure transformation:
//! one deterministic attempt, no retries, no side effects beyond reading
//! the input.

use std::path::Path;

use p12::PFX;

use rbcz_application::{ClientError, ClientResult};
use rbcz_domain::{CertificateError, ClientIdentity};

const CERTIFICATE_TAG: &str = "CERTIFICATE";
const PRIVATE_KEY_TAG: &str = "PRIVATE KEY";

/// Decodes a PKCS#12 bundle into a [`ClientIdentity`].
///
/// The first private-key entry and the first certificate entry win;
/// bundles with multiple entries of a type are not disambiguated.
///
/// # Errors
///
/// - [`CertificateError::InvalidFormat`] when the bytes are not a
///   well-formed ASN.1/PKCS#12 structure.
/// - [`CertificateError::InvalidPassword`] when the bundle MAC does not
///   verify against the supplied password.
/// - [`CertificateError::MissingKeyOrCertificate`] when either entry
///   cannot be located after decryption.
/// - [`CertificateError::Load`] for any other decode failure.
pub fn load_certificate(bundle: &[u8], password: &str) -> Result<ClientIdentity, CertificateError> {
    let pfx = PFX::parse(bundle).map_err(|_| CertificateError::InvalidFormat)?;

    if !pfx.verify_mac(password) {
        return Err(CertificateError::InvalidPassword);
    }

    let cert_bags = pfx
        .cert_bags(password)
        .map_err(|e| CertificateError::Load(e.to_string()))?;
    let key_bags = pfx
        .key_bags(password)
        .map_err(|e| CertificateError::Load(e.to_string()))?;

    let cert_der = cert_bags
        .into_iter()
        .next()
        .ok_or(CertificateError::MissingKeyOrCertificate)?;
    let key_der = key_bags
        .into_iter()
        .next()
        .ok_or(CertificateError::MissingKeyOrCertificate)?;

    let certificate_pem = pem::encode(&pem::Pem::new(CERTIFICATE_TAG, cert_der));
    let private_key_pem = pem::encode(&pem::Pem::new(PRIVATE_KEY_TAG, key_der));

    tracing::debug!("decoded PKCS#12 bundle into PEM identity");

    ClientIdentity::new(certificate_pem, private_key_pem)
}

/// Reads a PKCS#12 bundle from disk and decodes it.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the file cannot be read, otherwise
/// the same errors as [`load_certificate`].
pub fn load_certificate_file(
    path: impl AsRef<Path>,
    password: &str,
) -> ClientResult<ClientIdentity> {
    let bundle = std::fs::read(path)?;
    Ok(load_certificate(&bundle, password)?)
}
