//! Per-endpoint query and response models.
//!
//! These mirror the bank's documented JSON shapes field for field. Dates
//! and timestamps in responses stay as the wire strings; the client does
//! no transformation. Caller-supplied dates in queries are `chrono` types
//! and are formatted by the client when the request is shaped.

mod accounts;
mod balance;
mod batch;
mod fx_rates;
mod statements;
mod transactions;

pub use accounts::{Account, AccountList, GetAccountsQuery};
pub use balance::{AccountBalance, Balance, CurrencyFolder};
pub use batch::{
    BatchAccountInfo, BatchDetail, BatchImportFormat, BatchItem, BatchStatus, UploadPaymentsRequest,
    UploadedBatch,
};
pub use fx_rates::{ExchangeRate, ExchangeRateList, FxRates};
pub use statements::{
    DownloadStatementRequest, GetStatementListQuery, Statement, StatementDocument, StatementFilter,
    StatementLanguage, StatementList, StatementSelector,
};
pub use transactions::{
    Amount, BankTransactionCode, CounterParty, CounterPartyAccount, CreditorReference,
    EntryDetails, GetTransactionListQuery, InstructedAmount, Institution, PostalAddress,
    RelatedParties, References, RemittanceInformation, Transaction, TransactionDetails,
    TransactionList, UltimateCounterParty,
};
