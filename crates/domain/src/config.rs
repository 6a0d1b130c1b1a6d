//! Client configuration.

/// Name of the header carrying the application client identifier.
pub const HEADER_CLIENT_ID: &str = "X-IBM-Client-Id";

/// Name of the per-call tracing header.
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";

/// Immutable client configuration, fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    client_id: String,
    hostname: String,
    sandbox: bool,
}

impl ClientConfig {
    /// Creates a configuration for the given application and target host.
    ///
    /// With `sandbox` set, every endpoint targets the bank's mock path set
    /// instead of the production one.
    pub fn new(client_id: impl Into<String>, hostname: impl Into<String>, sandbox: bool) -> Self {
        Self {
            client_id: client_id.into(),
            hostname: hostname.into(),
            sandbox,
        }
    }

    /// The application client identifier issued by the developer portal.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The API hostname, e.g. `api.rb.cz`.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Whether mock endpoint paths are selected.
    #[must_use]
    pub const fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// The fixed header set attached to every outbound request.
    #[must_use]
    pub fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (HEADER_CLIENT_ID.to_string(), self.client_id.clone()),
        ]
    }
}
