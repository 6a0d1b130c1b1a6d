//! Catalogue of Premium API endpoints.
//!
//! Every remote operation is described by an [`Endpoint`]: an HTTP method
//! plus a pair of path templates, one for the bank's sandbox (mock) path
//! set and one for production. Templates carry `{placeholder}` tokens for
//! path parameters.

use crate::request::HttpMethod;

/// A remote operation: method plus sandbox and production path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    method: HttpMethod,
    mock: &'static str,
    live: &'static str,
}

impl Endpoint {
    const fn get(mock: &'static str, live: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            mock,
            live,
        }
    }

    const fn post(mock: &'static str, live: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            mock,
            live,
        }
    }

    /// The HTTP method this operation is documented with.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path template for the given environment.
    #[must_use]
    pub const fn path(&self, sandbox: bool) -> &'static str {
        if sandbox { self.mock } else { self.live }
    }

    /// Renders the template for the given environment, substituting each
    /// `{name}` token with its value from `params`.
    #[must_use]
    pub fn render(&self, sandbox: bool, params: &[(&str, &str)]) -> String {
        let mut path = self.path(sandbox).to_string();
        for (name, value) in params {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        path
    }
}

/// Account listing (paginated).
pub const GET_ACCOUNTS: Endpoint =
    Endpoint::get("rbcz/premium/mock/accounts", "rbcz/premium/api/accounts");

/// Balance lookup for one account.
pub const GET_ACCOUNT_BALANCE: Endpoint = Endpoint::get(
    "rbcz/premium/mock/accounts/{accountNumber}/balance",
    "rbcz/premium/api/accounts/{accountNumber}/balance",
);

/// Posted transaction listing (paginated, date-bounded).
pub const GET_TRANSACTION_LIST: Endpoint = Endpoint::get(
    "rbcz/premium/mock/accounts/{accountNumber}/{currencyCode}/transactions",
    "rbcz/premium/api/accounts/{accountNumber}/{currencyCode}/transactions",
);

/// Batch payment upload.
pub const UPLOAD_PAYMENTS: Endpoint = Endpoint::post(
    "rbcz/premium/mock/payments/batches",
    "rbcz/premium/api/payments/batches",
);

/// Processing state of an uploaded batch file.
pub const GET_BATCH_DETAIL: Endpoint = Endpoint::get(
    "rbcz/premium/mock/payments/batches/{batchFileId}",
    "rbcz/premium/api/payments/batches/{batchFileId}",
);

/// Statement listing across all accessible accounts.
pub const GET_STATEMENT_LIST: Endpoint = Endpoint::post(
    "rbcz/premium/mock/accounts/statements",
    "rbcz/premium/api/accounts/statements",
);

/// Statement download (PDF/XML/MT940 passthrough).
pub const DOWNLOAD_STATEMENT: Endpoint = Endpoint::post(
    "rbcz/premium/mock/accounts/statements/download",
    "rbcz/premium/api/accounts/statements/download",
);

/// FX rates for all available currencies. Served without mTLS.
pub const GET_FX_RATES_LIST: Endpoint =
    Endpoint::get("rbcz/premium/mock/fxrates", "rbcz/premium/api/fxrates");

/// FX rates for one currency. Served without mTLS.
pub const GET_FX_RATES: Endpoint = Endpoint::get(
    "rbcz/premium/mock/fxrates/{currencyCode}",
    "rbcz/premium/api/fxrates/{currencyCode}",
);

/// Every endpoint in the catalogue.
pub const ALL: &[&Endpoint] = &[
    &GET_ACCOUNTS,
    &GET_ACCOUNT_BALANCE,
    &GET_TRANSACTION_LIST,
    &UPLOAD_PAYMENTS,
    &GET_BATCH_DETAIL,
    &GET_STATEMENT_LIST,
    &DOWNLOAD_STATEMENT,
    &GET_FX_RATES_LIST,
    &GET_FX_RATES,
];
