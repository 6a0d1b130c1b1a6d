//! Request ID generation.

use uuid::Uuid;

/// Generates a fresh `X-Request-Id` value as a UUID v7 string.
///
/// The bank treats the value as opaque and only uses it for reference and
/// auditing, so uniqueness within a session is the only requirement. UUID
/// v7 keeps ids collision-resistant even for calls issued within the same
/// clock tick.
#[must_use]
pub fn generate_request_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = generate_request_id();
        // UUID format: 8-4-4-4-12 = 36 chars
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_request_id_uniqueness() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();
        assert_ne!(id1, id2);
    }
}
