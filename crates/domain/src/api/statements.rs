//! Statement listing and download models.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// JSON filter body of the statement listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementFilter {
    /// The account number without prefix and bank code.
    pub account_number: String,
    /// Account currency code in ISO 4217.
    pub currency: String,
    /// Statement line.
    pub statement_line: String,
    /// Start of the requested period.
    pub date_from: NaiveDate,
    /// End of the requested period.
    pub date_to: NaiveDate,
}

/// Query for the statement listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStatementListQuery {
    /// Number of the requested page. The first page is 1.
    pub page: Option<u32>,
    /// Number of items on the page.
    pub size: Option<u32>,
    /// The statement filter sent as the request body.
    pub filter: StatementFilter,
}

/// One available statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    /// Statement identifier used for download.
    pub statement_id: String,
    /// Internal account identifier.
    pub account_id: u64,
    /// Statement number.
    pub statement_number: String,
    /// Period start, as reported on the wire.
    pub date_from: String,
    /// Period end, as reported on the wire.
    pub date_to: String,
    /// Statement currency.
    pub currency: String,
    /// Formats the statement can be downloaded in.
    pub statement_formats: Vec<String>,
}

/// One page of the statement listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementList {
    /// Statements on this page.
    pub statements: Vec<Statement>,
    /// Page number, starting at 1.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of statements.
    pub total_size: u32,
}

/// Document language for a statement download, carried in
/// `Accept-Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementLanguage {
    /// Czech.
    #[default]
    Cs,
    /// English.
    En,
}

impl StatementLanguage {
    /// The header value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::En => "en",
        }
    }
}

impl fmt::Display for StatementLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JSON body selecting the statement to download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSelector {
    /// The account number without prefix and bank code.
    pub account_number: String,
    /// Account currency code in ISO 4217.
    pub currency: String,
    /// Statement identifier from the listing.
    pub statement_id: String,
    /// Requested format, one of the listing's `statementFormats`.
    pub statement_format: String,
}

/// A statement download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadStatementRequest {
    /// Document language.
    pub language: StatementLanguage,
    /// The statement to download.
    pub statement: StatementSelector,
}

/// A downloaded statement, passed through untouched.
///
/// The bank answers with `application/pdf`, `application/xml`,
/// `text/mt940`, or `application/json` on error; the body is opaque to
/// the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementDocument {
    /// The `Content-Type` the bank answered with, when present.
    pub content_type: Option<String>,
    /// The raw document bytes.
    pub bytes: Vec<u8>,
}

impl StatementDocument {
    /// The document interpreted as text, for the text-based formats.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}
