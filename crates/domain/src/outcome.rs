//! Call outcome types.
//!
//! A call to the bank ends in exactly one of two ways once an HTTP
//! response was obtained: a decoded success payload, or a normalized error
//! record for a non-2xx answer. The two are discriminated by variant tag,
//! never by inspecting which fields happen to be present.

use serde::{Deserialize, Serialize};

/// Normalized error record for a structured non-2xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// The HTTP status code the bank answered with.
    pub status_code: u16,
    /// The HTTP reason phrase, or `"Unknown error"` when absent.
    pub status_message: String,
    /// Machine-readable error code from the response body, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable error message from the response body, when present.
    #[serde(
        default,
        rename = "error_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_description: Option<String>,
}

/// The result of one completed HTTP exchange with the bank.
///
/// Remote API errors are values, not faults: the caller matches on the
/// variant. Transport failures where no response was obtained at all are
/// *not* represented here; those propagate as hard errors from the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    /// The bank answered 2xx with the declared payload.
    Success(T),
    /// The bank answered non-2xx with a structured error.
    Error(ApiErrorResponse),
}

impl<T> ApiOutcome<T> {
    /// Whether this is a success payload.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is a normalized remote error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The success payload, if any.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // destructuring drop is not const
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error(_) => None,
        }
    }

    /// The error record, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ApiErrorResponse> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Converts into a plain `Result`, surfacing the remote error.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiErrorResponse`] for the error variant.
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_result(self) -> Result<T, ApiErrorResponse> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error(error) => Err(error),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_record_wire_names() {
        let error = ApiErrorResponse {
            status_code: 404,
            status_message: "Not Found".to_string(),
            error: Some("not_found".to_string()),
            error_description: Some("Account not found".to_string()),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 404,
                "statusMessage": "Not Found",
                "error": "not_found",
                "error_description": "Account not found",
            })
        );
    }

    #[test]
    fn test_optional_error_fields_are_omitted() {
        let error = ApiErrorResponse {
            status_code: 429,
            status_message: "Too Many Requests".to_string(),
            error: None,
            error_description: None,
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "statusCode": 429, "statusMessage": "Too Many Requests" })
        );
    }

    #[test]
    fn test_outcome_discriminants() {
        let success: ApiOutcome<u32> = ApiOutcome::Success(7);
        assert!(success.is_success());
        assert_eq!(success.success(), Some(7));

        let error: ApiOutcome<u32> = ApiOutcome::Error(ApiErrorResponse {
            status_code: 500,
            status_message: "Unknown error".to_string(),
            error: None,
            error_description: None,
        });
        assert!(error.is_error());
        assert_eq!(error.error().map(|e| e.status_code), Some(500));
    }
}
