//! Foreign exchange rate models.

use serde::{Deserialize, Serialize};

/// One quoted exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Path to the bank's country flag asset.
    pub country_flag_path: String,
    /// Source currency.
    pub currency_from: String,
    /// Target currency.
    pub currency_to: String,
    /// Cashless buy rate.
    pub exchange_rate_buy: f64,
    /// Cash buy rate.
    pub exchange_rate_buy_cash: f64,
    /// Center rate.
    pub exchange_rate_center: f64,
    /// Change of the center rate against the previous quotation.
    pub exchange_rate_center_change: f64,
    /// Cashless sell rate.
    pub exchange_rate_sell: f64,
    /// Cash sell rate.
    pub exchange_rate_sell_cash: f64,
    /// Sell center rate.
    pub exchange_rate_sell_center: f64,
    /// Previous sell center rate.
    pub exchange_rate_sell_center_previous: f64,
    /// ECB reference rate.
    pub exchange_rate_ecb_rate: f64,
    /// Variation against the ECB reference.
    pub exchange_rate_ecb_variation: f64,
    /// Fixed-side country code.
    pub fixed_country_code: String,
    /// Fixed-side country name.
    pub fixed_country_name: String,
    /// Quotation type.
    pub quotation_type: String,
    /// Units of the source currency the quote refers to.
    pub units_from: f64,
    /// Variable-side country code.
    pub variable_country_code: String,
    /// Variable-side country name.
    pub variable_country_name: String,
}

/// One published rate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateList {
    /// Start of validity, as reported on the wire.
    pub effective_date_from: String,
    /// End of validity, as reported on the wire.
    pub effective_date_to: String,
    /// Trading date, as reported on the wire.
    pub trading_date: String,
    /// Ordinal number of the list within the day.
    pub ordinal_number: u32,
    /// Whether this is the day's final list.
    pub last_rates: bool,
    /// The quoted rates.
    pub exchange_rates: Vec<ExchangeRate>,
}

/// FX rate response, shared by the list and single-currency lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxRates {
    /// Published rate lists for the requested date.
    pub exchange_rate_lists: Vec<ExchangeRateList>,
}
