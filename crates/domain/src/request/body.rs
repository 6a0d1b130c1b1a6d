//! Request body types

/// An outbound request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A JSON document.
    Json(serde_json::Value),
    /// A plain-text payload, e.g. an imported payment batch file.
    Text(String),
}

impl RequestBody {
    /// The natural content type of this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Text(_) => "text/plain",
        }
    }
}
