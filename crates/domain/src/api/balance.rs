//! Account balance models.

use serde::{Deserialize, Serialize};

/// One balance figure inside a currency folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Balance type, e.g. `CLAB` or `CLAV`.
    pub balance_type: String,
    /// Currency of the figure.
    pub currency: String,
    /// The amount.
    pub value: f64,
}

/// Balances of one currency folder of a multi-currency account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFolder {
    /// Folder currency.
    pub currency: String,
    /// Folder status.
    pub status: String,
    /// Balance figures for this folder.
    pub balances: Vec<Balance>,
}

/// Balance lookup response for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// Account number prefix.
    pub number_part1: String,
    /// Account number.
    pub number_part2: String,
    /// Bank code.
    pub bank_code: String,
    /// Per-currency folders with their balances.
    pub currency_folders: Vec<CurrencyFolder>,
}
