//! HTTP transport port.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use rbcz_domain::ApiRequest;

/// Transport-level failures where no usable HTTP response was obtained.
///
/// These are hard faults: the client never normalizes them into an API
/// error record and never retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// DNS resolution failed for the host.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// The host that failed to resolve.
        host: String,
        /// The underlying resolver message.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// The refusing host.
        host: String,
    },

    /// TLS configuration or handshake failure, including a rejected remote
    /// certificate.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// A raw completed HTTP exchange: status line, headers, and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase; empty when the transport knows none.
    pub status_text: String,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Looks up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A secure HTTP client capable of sending one [`ApiRequest`] and
/// returning the raw exchange result.
///
/// Two implementations exist: one bound to the mTLS client identity and
/// one plain. Both validate the remote certificate; there is no insecure
/// fallback.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError`] only when no HTTP response was obtained
    /// at all; a non-2xx answer is a regular [`HttpResponse`].
    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, HttpClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            status_text: String::new(),
            headers: HashMap::from([("Content-Type".to_string(), "text/mt940".to_string())]),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(response(200).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(404).is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = response(200);
        assert_eq!(resp.header("content-type"), Some("text/mt940"));
        assert_eq!(resp.header("x-missing"), None);
    }
}
