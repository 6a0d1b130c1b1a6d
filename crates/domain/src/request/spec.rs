//! The per-call request specification.

use super::{HttpMethod, RequestBody};

/// One outbound request: method, absolute URL, headers, query pairs, and
/// optional body.
///
/// Built and consumed within a single call, never retained. Query
/// parameters the caller did not supply are simply absent from the list,
/// they are never sent as empty or null values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute request URL, without query string.
    pub url: String,
    /// Header set, already merged; later entries replaced earlier ones.
    pub headers: Vec<(String, String)>,
    /// Query pairs, appended in order.
    pub query: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Creates a request with no headers, query, or body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any existing value under the same
    /// (case-insensitive) name. This is the merge step: caller overrides
    /// win over the default header set.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Appends a query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attaches a body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
