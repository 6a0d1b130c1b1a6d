//! Batch payment upload and status models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Format of an imported payment batch file.
///
/// Carried in the `Batch-Import-Format` header. For the CCT format the
/// bank expects `SEPA-XML`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchImportFormat {
    /// Gemini P11 domestic format.
    GeminiP11,
    /// Gemini P32 format.
    GeminiP32,
    /// Gemini F84 format.
    GeminiF84,
    /// ABO KPC format.
    AboKpc,
    /// SEPA XML (pain.001), also used for CCT.
    SepaXml,
    /// CFD format.
    Cfd,
    /// CFU format.
    Cfu,
    /// CFA format.
    Cfa,
}

impl BatchImportFormat {
    /// The exact header value the bank expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeminiP11 => "GEMINI-P11",
            Self::GeminiP32 => "GEMINI-P32",
            Self::GeminiF84 => "GEMINI-F84",
            Self::AboKpc => "ABO-KPC",
            Self::SepaXml => "SEPA-XML",
            Self::Cfd => "CFD",
            Self::Cfu => "CFU",
            Self::Cfa => "CFA",
        }
    }
}

impl fmt::Display for BatchImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A batch payment upload.
///
/// The file content travels as a plain-text body; everything else is
/// header-carried metadata. Optional headers left as `None` are not sent,
/// the bank then applies its documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPaymentsRequest {
    /// Format of the imported file.
    pub format: BatchImportFormat,
    /// Batch name; generated by the bank when absent, truncated beyond 50
    /// characters.
    pub name: Option<String>,
    /// Marks the payments in the file as combined.
    pub combined_payments: Option<bool>,
    /// Whether the bank may move `valueDate` to the next working day.
    pub autocorrect: Option<bool>,
    /// The batch file content.
    pub body: String,
}

impl UploadPaymentsRequest {
    /// Creates an upload with the required parts only.
    pub fn new(format: BatchImportFormat, body: impl Into<String>) -> Self {
        Self {
            format,
            name: None,
            combined_payments: None,
            autocorrect: None,
            body: body.into(),
        }
    }
}

/// Receipt for an accepted batch upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedBatch {
    /// Identifier for later status lookup.
    pub batch_file_id: u64,
}

/// Processing state of one batch inside an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Loaded, not yet signed.
    Draft,
    /// Import failed.
    Error,
    /// Waiting for signature.
    ForSign,
    /// Signed and verified.
    Verified,
    /// Being handed to the bank.
    PassingToBank,
    /// Accepted by the bank.
    Passed,
    /// Accepted with errors.
    PassedToBankWithError,
    /// Not disclosed.
    Undisclosed,
}

/// Account summary inside a batch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAccountInfo {
    /// Internal account identifier.
    pub account_id: u64,
    /// Account number prefix.
    pub account_number_prefix: String,
    /// Account number.
    pub account_number: u64,
    /// Main currency of the account.
    pub main_currency_id: String,
}

/// One batch created from an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    /// The debited account.
    pub account_info: BatchAccountInfo,
    /// Number of payments in the batch.
    pub number_of_payments: u32,
    /// Sum of all payment amounts.
    pub sum_amount: f64,
    /// Currency of the sum.
    pub sum_amount_currency_id: String,
    /// Batch type.
    pub batch_type: String,
    /// Processing status.
    pub status: BatchStatus,
    /// User the batch is assigned to.
    pub assigned_user_name: Option<String>,
    /// Last change timestamp, as reported on the wire.
    pub last_change_date_time: String,
}

/// Processing detail of an uploaded batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetail {
    /// Batch file name.
    pub batch_name: String,
    /// Overall file status.
    pub batch_file_status: String,
    /// Upload timestamp, as reported on the wire.
    pub create_date: String,
    /// Batches created from the file.
    pub batch_items: Vec<BatchItem>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_format_header_values() {
        let expected = [
            (BatchImportFormat::GeminiP11, "GEMINI-P11"),
            (BatchImportFormat::GeminiP32, "GEMINI-P32"),
            (BatchImportFormat::GeminiF84, "GEMINI-F84"),
            (BatchImportFormat::AboKpc, "ABO-KPC"),
            (BatchImportFormat::SepaXml, "SEPA-XML"),
            (BatchImportFormat::Cfd, "CFD"),
            (BatchImportFormat::Cfu, "CFU"),
            (BatchImportFormat::Cfa, "CFA"),
        ];
        for (format, value) in expected {
            assert_eq!(format.as_str(), value);
        }
    }

    #[test]
    fn test_batch_status_wire_names() {
        let status: BatchStatus =
            serde_json::from_value(serde_json::json!("PASSED_TO_BANK_WITH_ERROR")).unwrap();
        assert_eq!(status, BatchStatus::PassedToBankWithError);
    }

    #[test]
    fn test_upload_request_defaults_leave_optionals_unset() {
        let request = UploadPaymentsRequest::new(BatchImportFormat::SepaXml, "<xml/>");
        assert!(request.name.is_none());
        assert!(request.combined_payments.is_none());
        assert!(request.autocorrect.is_none());
    }
}
