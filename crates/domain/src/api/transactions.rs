//! Transaction listing models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query for the posted transaction listing.
///
/// The bank serves transactions no older than 90 days; `from`/`to` bound
/// the requested window. The list is paged, the response flag `lastPage`
/// tells whether more pages follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactionListQuery {
    /// The account number without prefix and bank code.
    pub account_number: String,
    /// Account currency code in ISO 4217, e.g. `CZK`.
    pub currency_code: String,
    /// Start of the requested window.
    pub from: DateTime<Utc>,
    /// End of the requested window.
    pub to: DateTime<Utc>,
    /// Page number to request. The first page is 1.
    pub page: Option<u32>,
}

/// A monetary amount with its currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// The amount.
    pub value: f64,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// Bank transaction code of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransactionCode {
    /// The code value.
    pub code: String,
}

/// End-to-end references of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    /// End-to-end identification supplied by the originator.
    pub end_to_end_identification: Option<String>,
}

/// The originally instructed amount, before conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructedAmount {
    /// The amount.
    pub value: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Exchange rate applied, when a conversion took place.
    pub exchange_rate: Option<f64>,
}

/// A postal address as reported by the bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    /// Street line.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Condensed single-line address.
    pub short_address: Option<String>,
    /// Country code.
    pub country: Option<String>,
}

/// An identified financial institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    /// Institution name.
    pub name: Option<String>,
    /// BIC or BEI.
    pub bic_or_bei: Option<String>,
    /// Local bank code.
    pub bank_code: Option<String>,
    /// Institution address.
    pub postal_address: Option<PostalAddress>,
}

/// The counterparty account of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPartyAccount {
    /// IBAN.
    pub iban: Option<String>,
    /// Account number prefix.
    pub account_number_prefix: Option<String>,
    /// Account number.
    pub account_number: Option<String>,
}

/// The direct counterparty of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterParty {
    /// Counterparty name.
    pub name: Option<String>,
    /// Counterparty address.
    pub postal_address: Option<PostalAddress>,
    /// Organisation identification, when the counterparty is a legal
    /// entity.
    pub organisation_identification: Option<Institution>,
    /// Counterparty account.
    pub account: Option<CounterPartyAccount>,
}

/// The ultimate counterparty, when it differs from the direct one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UltimateCounterParty {
    /// Name.
    pub name: Option<String>,
    /// Address.
    pub postal_address: Option<PostalAddress>,
}

/// All parties related to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedParties {
    /// The direct counterparty.
    pub counter_party: Option<CounterParty>,
    /// Intermediary institution, when routing involved one.
    pub intermediary_institution: Option<Institution>,
    /// The ultimate counterparty.
    pub ultimate_counter_party: Option<UltimateCounterParty>,
}

/// Czech domestic payment symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditorReference {
    /// Variable symbol.
    pub variable: Option<String>,
    /// Constant symbol.
    pub constant: Option<String>,
    /// Specific symbol.
    pub specific: Option<String>,
}

/// Remittance information attached to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemittanceInformation {
    /// Free-form message.
    pub unstructured: Option<String>,
    /// Structured creditor reference (payment symbols).
    pub creditor_reference_information: Option<CreditorReference>,
    /// Message from the originator.
    pub originator_message: Option<String>,
}

/// Detail block of one transaction entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    /// End-to-end references.
    pub references: Option<References>,
    /// The originally instructed amount.
    pub instructed_amount: Option<InstructedAmount>,
    /// Charge bearer code.
    pub charge_bearer: Option<String>,
    /// Masked payment card number for card transactions.
    pub payment_card_number: Option<String>,
    /// Related parties.
    pub related_parties: Option<RelatedParties>,
    /// Remittance information.
    pub remittance_information: Option<RemittanceInformation>,
}

/// Wrapper for the entry detail block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetails {
    /// Transaction details.
    pub transaction_details: Option<TransactionDetails>,
}

/// One posted (or intraday) transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sequential entry reference.
    pub entry_reference: i64,
    /// Booked amount.
    pub amount: Amount,
    /// `CRDT` or `DBIT`.
    pub credit_debit_indication: String,
    /// Booking date, as reported on the wire.
    pub booking_date: String,
    /// Value date, as reported on the wire.
    pub value_date: String,
    /// Bank transaction code.
    pub bank_transaction_code: BankTransactionCode,
    /// Entry detail block, when the bank reports one.
    pub entry_details: Option<EntryDetails>,
}

/// One page of the transaction listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionList {
    /// Whether this page is the last one.
    pub last_page: bool,
    /// Transactions on this page.
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_decodes_without_details() {
        let body = serde_json::json!({
            "lastPage": true,
            "transactions": [{
                "entryReference": 42,
                "amount": { "value": 1250.5, "currency": "CZK" },
                "creditDebitIndication": "CRDT",
                "bookingDate": "2021-08-01T10:00:00.0Z",
                "valueDate": "2021-08-01",
                "bankTransactionCode": { "code": "10000101000" },
            }],
        });
        let list: TransactionList = serde_json::from_value(body).unwrap();
        assert!(list.last_page);
        assert!(list.transactions[0].entry_details.is_none());
    }

    #[test]
    fn test_transaction_decodes_nested_counterparty() {
        let body = serde_json::json!({
            "entryReference": 7,
            "amount": { "value": -300.0, "currency": "EUR" },
            "creditDebitIndication": "DBIT",
            "bookingDate": "2021-08-02",
            "valueDate": "2021-08-02",
            "bankTransactionCode": { "code": "10000101000" },
            "entryDetails": {
                "transactionDetails": {
                    "references": { "endToEndIdentification": "E2E-1" },
                    "relatedParties": {
                        "counterParty": {
                            "name": "ACME GmbH",
                            "account": { "iban": "DE02120300000000202051" },
                        },
                    },
                },
            },
        });
        let transaction: Transaction = serde_json::from_value(body).unwrap();
        let details = transaction
            .entry_details
            .and_then(|d| d.transaction_details)
            .unwrap();
        assert_eq!(
            details.references.unwrap().end_to_end_identification,
            Some("E2E-1".to_string())
        );
        let party = details.related_parties.unwrap().counter_party.unwrap();
        assert_eq!(party.name.as_deref(), Some("ACME GmbH"));
    }
}
