//! Account listing models.

use serde::{Deserialize, Serialize};

/// Query for the account listing. Both parameters are optional; the bank
/// defaults to page 1 with 15 items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAccountsQuery {
    /// Number of the requested page. The first page is 1.
    pub page: Option<u32>,
    /// Number of items on the page.
    pub size: Option<u32>,
}

/// One account accessible through the client certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Internal account identifier.
    pub account_id: String,
    /// Official account name.
    pub account_name: String,
    /// User-assigned account name.
    pub friendly_name: String,
    /// The account number without prefix and bank code.
    pub account_number: u64,
    /// Account number prefix.
    pub account_number_prefix: String,
    /// IBAN.
    pub iban: String,
    /// Numeric bank code.
    pub bank_code: u32,
    /// BIC of the holding bank.
    pub bank_bic_code: String,
    /// Main currency of the account.
    pub main_currency: String,
    /// Account product type identifier.
    pub account_type_id: String,
}

/// One page of the account listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountList {
    /// Accounts on this page.
    pub accounts: Vec<Account>,
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
    /// Total number of accounts.
    pub total_size: u32,
}
