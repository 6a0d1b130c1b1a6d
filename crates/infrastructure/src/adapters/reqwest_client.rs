//! HTTP client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port on top of
//! `reqwest::Client`. Two constructors exist: one binding the TLS client
//! identity for the mTLS endpoints and one plain for the FX rate
//! endpoints. Remote certificate validation is always on; there is no
//! insecure fallback.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, Method};
use url::Url;

use rbcz_application::ports::{HttpClient, HttpClientError, HttpResponse};
use rbcz_domain::{ApiRequest, ClientIdentity, HttpMethod, RequestBody};

const USER_AGENT: &str = concat!("rbcz-premium/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a plain client without a TLS client identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .https_only(true)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a client bound to the given TLS identity for mutual
    /// authentication.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::Tls`] when the identity cannot be
    /// loaded into the TLS backend or the client cannot be created.
    pub fn with_identity(identity: &ClientIdentity) -> Result<Self, HttpClientError> {
        let tls_identity = reqwest::Identity::from_pem(identity.identity_pem().as_bytes())
            .map_err(|e| HttpClientError::Tls(e.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .https_only(true)
            .identity(tls_identity)
            .build()
            .map_err(|e| HttpClientError::Tls(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps a caller-configured reqwest client. Use this to set
    /// timeouts or proxy settings; the client itself adds none.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain method to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        let host = || {
            error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused { host: host() };
            }
            if lowered.contains("certificate") || lowered.contains("tls") {
                return HttpClientError::Tls(message);
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, HttpClientError> {
        let mut url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        match &request.body {
            Some(RequestBody::Json(value)) => builder = builder.json(value),
            Some(RequestBody::Text(text)) => builder = builder.body(text.clone()),
            None => {}
        }

        tracing::debug!(method = %request.method, url = %url, "dispatching request");

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        tracing::debug!(status = status.as_u16(), "received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
    }

    #[test]
    fn test_plain_client_creation() {
        let client = ReqwestHttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_with_client_wraps_custom_client() {
        let custom = Client::new();
        let _adapter = ReqwestHttpClient::with_client(custom);
    }
}
