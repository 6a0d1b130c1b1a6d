//! The Premium API client.
//!
//! One method per remote operation. Every method shapes an
//! [`ApiRequest`], dispatches it through the mTLS-bound or the plain
//! transport, and normalizes the exchange into an [`ApiOutcome`]. Only
//! parameters the caller actually supplied are sent; omitted optionals
//! never appear in the outbound request.

use std::sync::Arc;

use chrono::SecondsFormat;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use rbcz_domain::api::{
    AccountBalance, AccountList, BatchDetail, DownloadStatementRequest, FxRates, GetAccountsQuery,
    GetStatementListQuery, GetTransactionListQuery, StatementDocument, StatementList,
    TransactionList, UploadPaymentsRequest, UploadedBatch,
};
use rbcz_domain::config::HEADER_REQUEST_ID;
use rbcz_domain::{
    ApiErrorResponse, ApiOutcome, ApiRequest, ClientConfig, Endpoint, RequestBody, endpoint,
    generate_request_id,
};

use crate::error::ClientResult;
use crate::ports::{HttpClient, HttpResponse};

/// Typed client for the Raiffeisen Bank CZ Premium API.
///
/// Holds the immutable configuration and the two transport handles: the
/// mTLS-bound one used by account, transaction, statement, and batch
/// endpoints, and the plain one used by the FX rate endpoints. The client
/// keeps no per-call state, so a single instance can serve concurrent
/// calls.
pub struct PremiumApi {
    config: ClientConfig,
    secure: Arc<dyn HttpClient>,
    public: Arc<dyn HttpClient>,
}

impl PremiumApi {
    /// Wires a client from its configuration and transports.
    ///
    /// `secure` must carry the TLS client identity; `public` must not.
    pub fn new(config: ClientConfig, secure: Arc<dyn HttpClient>, public: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            secure,
            public,
        }
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the base request for an endpoint: absolute URL with path
    /// parameters substituted, default headers, and a fresh request id.
    fn base_request(&self, endpoint: &Endpoint, params: &[(&str, &str)]) -> ApiRequest {
        let path = endpoint.render(self.config.sandbox(), params);
        let url = format!(
            "https://{}/{}",
            self.config.hostname(),
            path.trim_start_matches('/')
        );

        let mut request = ApiRequest::new(endpoint.method(), url);
        for (name, value) in self.config.default_headers() {
            request = request.with_header(name, value);
        }
        request.with_header(HEADER_REQUEST_ID, generate_request_id())
    }

    /// Get the list of accounts for the client certificate. The first
    /// page is 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn get_accounts(
        &self,
        query: &GetAccountsQuery,
    ) -> ClientResult<ApiOutcome<AccountList>> {
        let mut request = self.base_request(&endpoint::GET_ACCOUNTS, &[]);
        if let Some(page) = query.page {
            request = request.with_query("page", page);
        }
        if let Some(size) = query.size {
            request = request.with_query("size", size);
        }
        send(self.secure.as_ref(), request).await
    }

    /// Get the balance folders of one account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn get_account_balance(
        &self,
        account_number: &str,
    ) -> ClientResult<ApiOutcome<AccountBalance>> {
        let request = self.base_request(
            &endpoint::GET_ACCOUNT_BALANCE,
            &[("accountNumber", account_number)],
        );
        send(self.secure.as_ref(), request).await
    }

    /// Get posted transactions (including intraday) for one account and
    /// currency.
    ///
    /// Transactions must not be older than 90 days. The list is paged;
    /// the response flag `lastPage` indicates whether more pages follow.
    /// When iterating pages, respect the bank's request rate limit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn get_transaction_list(
        &self,
        query: &GetTransactionListQuery,
    ) -> ClientResult<ApiOutcome<TransactionList>> {
        let mut request = self.base_request(
            &endpoint::GET_TRANSACTION_LIST,
            &[
                ("accountNumber", query.account_number.as_str()),
                ("currencyCode", query.currency_code.as_str()),
            ],
        );
        request = request
            .with_query(
                "from",
                query.from.to_rfc3339_opts(SecondsFormat::Millis, true),
            )
            .with_query("to", query.to.to_rfc3339_opts(SecondsFormat::Millis, true));
        if let Some(page) = query.page {
            request = request.with_query("page", page);
        }
        send(self.secure.as_ref(), request).await
    }

    /// Upload a payment batch file.
    ///
    /// Imported payments are only loaded into Internet Banking; they must
    /// still be authorized there before processing. The file format
    /// travels in the `Batch-Import-Format` header, the content as a
    /// plain-text body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn upload_payments(
        &self,
        upload: &UploadPaymentsRequest,
    ) -> ClientResult<ApiOutcome<UploadedBatch>> {
        let mut request = self
            .base_request(&endpoint::UPLOAD_PAYMENTS, &[])
            .with_header("Batch-Import-Format", upload.format.as_str());
        if let Some(name) = &upload.name {
            request = request.with_header("Batch-Name", name);
        }
        if let Some(combined) = upload.combined_payments {
            request = request.with_header("Batch-Combined-Payments", combined.to_string());
        }
        if let Some(autocorrect) = upload.autocorrect {
            request = request.with_header("Batch-Autocorrect", autocorrect.to_string());
        }
        request = request.with_body(RequestBody::Text(upload.body.clone()));
        send(self.secure.as_ref(), request).await
    }

    /// Get the processing state of an uploaded batch file and the batches
    /// created from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn get_batch_detail(
        &self,
        batch_file_id: u64,
    ) -> ClientResult<ApiOutcome<BatchDetail>> {
        let request = self.base_request(
            &endpoint::GET_BATCH_DETAIL,
            &[("batchFileId", batch_file_id.to_string().as_str())],
        );
        send(self.secure.as_ref(), request).await
    }

    /// List statements for all accounts the client certificate can
    /// access.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault, an
    /// undecodable 2xx body, or an unserializable filter.
    pub async fn get_statement_list(
        &self,
        query: &GetStatementListQuery,
    ) -> ClientResult<ApiOutcome<StatementList>> {
        let mut request = self.base_request(&endpoint::GET_STATEMENT_LIST, &[]);
        if let Some(page) = query.page {
            request = request.with_query("page", page);
        }
        if let Some(size) = query.size {
            request = request.with_query("size", size);
        }
        request = request.with_body(RequestBody::Json(serde_json::to_value(&query.filter)?));
        send(self.secure.as_ref(), request).await
    }

    /// Download one statement.
    ///
    /// The bank answers with `application/pdf`, `application/xml`,
    /// `text/mt940`, or `application/json` on error; the body is passed
    /// through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// unserializable selector.
    pub async fn download_statement(
        &self,
        download: &DownloadStatementRequest,
    ) -> ClientResult<ApiOutcome<StatementDocument>> {
        let request = self
            .base_request(&endpoint::DOWNLOAD_STATEMENT, &[])
            .with_header("Accept-Language", download.language.as_str())
            .with_body(RequestBody::Json(serde_json::to_value(
                &download.statement,
            )?));
        send_document(self.secure.as_ref(), request).await
    }

    /// Get FX rates for all available currencies. Served without the
    /// client certificate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn get_fx_rates_list(
        &self,
        date: Option<chrono::NaiveDate>,
    ) -> ClientResult<ApiOutcome<FxRates>> {
        let mut request = self.base_request(&endpoint::GET_FX_RATES_LIST, &[]);
        if let Some(date) = date {
            request = request.with_query("date", date);
        }
        send(self.public.as_ref(), request).await
    }

    /// Get FX rates for one currency. Served without the client
    /// certificate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] on a transport fault or an
    /// undecodable 2xx body.
    pub async fn get_fx_rates(
        &self,
        currency_code: &str,
        date: Option<chrono::NaiveDate>,
    ) -> ClientResult<ApiOutcome<FxRates>> {
        let mut request = self.base_request(
            &endpoint::GET_FX_RATES,
            &[("currencyCode", currency_code)],
        );
        if let Some(date) = date {
            request = request.with_query("date", date);
        }
        send(self.public.as_ref(), request).await
    }
}

/// Dispatches a request and decodes a 2xx body as `T`.
async fn send<T: DeserializeOwned>(
    client: &dyn HttpClient,
    request: ApiRequest,
) -> ClientResult<ApiOutcome<T>> {
    let response = client.execute(&request).await?;
    if response.is_success() {
        let payload = serde_json::from_slice(&response.body)?;
        return Ok(ApiOutcome::Success(payload));
    }
    Ok(ApiOutcome::Error(normalize_error(&response)))
}

/// Dispatches a request and passes a 2xx body through untouched.
async fn send_document(
    client: &dyn HttpClient,
    request: ApiRequest,
) -> ClientResult<ApiOutcome<StatementDocument>> {
    let response = client.execute(&request).await?;
    if response.is_success() {
        let content_type = response.header("Content-Type").map(ToString::to_string);
        return Ok(ApiOutcome::Success(StatementDocument {
            content_type,
            bytes: response.body,
        }));
    }
    Ok(ApiOutcome::Error(normalize_error(&response)))
}

/// Optional machine/human error fields of a structured error body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    error_description: Option<String>,
}

/// Normalizes a non-2xx response into the documented error record.
fn normalize_error(response: &HttpResponse) -> ApiErrorResponse {
    let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
    let status_message = if response.status_text.is_empty() {
        "Unknown error".to_string()
    } else {
        response.status_text.clone()
    };
    ApiErrorResponse {
        status_code: response.status,
        status_message,
        error: body.error,
        error_description: body.error_description,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use rbcz_domain::api::{
        BatchImportFormat, StatementFilter, StatementLanguage, StatementSelector,
    };
    use rbcz_domain::{CertificateError, HttpMethod};

    use crate::ClientError;
    use crate::ports::HttpClientError;

    use super::*;

    #[derive(Default)]
    struct MockHttpClient {
        requests: Mutex<Vec<ApiRequest>>,
        responses: Mutex<VecDeque<Result<HttpResponse, HttpClientError>>>,
    }

    impl MockHttpClient {
        fn queue(&self, response: Result<HttpResponse, HttpClientError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        fn queue_json(&self, status: u16, status_text: &str, body: serde_json::Value) {
            self.queue(Ok(HttpResponse {
                status,
                status_text: status_text.to_string(),
                headers: HashMap::new(),
                body: serde_json::to_vec(&body).unwrap(),
            }));
        }

        fn recorded(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl HttpClient for MockHttpClient {
        async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, HttpClientError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(HttpClientError::Other("no response queued".to_string())))
        }
    }

    fn api(sandbox: bool) -> (PremiumApi, Arc<MockHttpClient>, Arc<MockHttpClient>) {
        let secure = Arc::new(MockHttpClient::default());
        let public = Arc::new(MockHttpClient::default());
        let api = PremiumApi::new(
            ClientConfig::new("test-client-id", "api.rb.cz", sandbox),
            secure.clone(),
            public.clone(),
        );
        (api, secure, public)
    }

    fn empty_account_list() -> serde_json::Value {
        serde_json::json!({
            "accounts": [], "page": 1, "size": 15, "first": true, "last": true,
            "totalPages": 0, "totalSize": 0,
        })
    }

    #[tokio::test]
    async fn test_accounts_request_targets_mock_path_with_supplied_query() {
        let (api, secure, _) = api(true);
        secure.queue_json(200, "OK", empty_account_list());

        let query = GetAccountsQuery {
            page: Some(2),
            size: Some(10),
        };
        let outcome = api.get_accounts(&query).await.unwrap();
        assert!(outcome.is_success());

        let requests = secure.recorded();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://api.rb.cz/rbcz/premium/mock/accounts");
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(
            requests[0].query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("size".to_string(), "10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_accounts_request_targets_live_path_without_sandbox() {
        let (api, secure, _) = api(false);
        secure.queue_json(200, "OK", empty_account_list());

        api.get_accounts(&GetAccountsQuery::default()).await.unwrap();

        let requests = secure.recorded();
        assert_eq!(requests[0].url, "https://api.rb.cz/rbcz/premium/api/accounts");
    }

    #[tokio::test]
    async fn test_omitted_optional_query_parameters_are_absent() {
        let (api, secure, _) = api(true);
        secure.queue_json(200, "OK", empty_account_list());

        api.get_accounts(&GetAccountsQuery::default()).await.unwrap();

        assert!(secure.recorded()[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_every_request_carries_default_headers_and_request_id() {
        let (api, secure, _) = api(true);
        secure.queue_json(200, "OK", empty_account_list());
        secure.queue_json(200, "OK", empty_account_list());

        api.get_accounts(&GetAccountsQuery::default()).await.unwrap();
        api.get_accounts(&GetAccountsQuery::default()).await.unwrap();

        let requests = secure.recorded();
        for request in &requests {
            assert_eq!(request.header("X-IBM-Client-Id"), Some("test-client-id"));
            assert_eq!(request.header("Content-Type"), Some("application/json"));
            assert!(request.header("X-Request-Id").is_some());
        }
        // Fresh id per call.
        assert_ne!(
            requests[0].header("X-Request-Id"),
            requests[1].header("X-Request-Id")
        );
    }

    #[tokio::test]
    async fn test_balance_substitutes_account_number() {
        let (api, secure, _) = api(false);
        secure.queue_json(
            200,
            "OK",
            serde_json::json!({
                "numberPart1": "0", "numberPart2": "2800000000",
                "bankCode": "5500", "currencyFolders": [],
            }),
        );

        api.get_account_balance("2800000000").await.unwrap();

        assert_eq!(
            secure.recorded()[0].url,
            "https://api.rb.cz/rbcz/premium/api/accounts/2800000000/balance"
        );
    }

    #[tokio::test]
    async fn test_transaction_list_sends_window_and_omits_page() {
        let (api, secure, _) = api(true);
        secure.queue_json(
            200,
            "OK",
            serde_json::json!({ "lastPage": true, "transactions": [] }),
        );

        let query = GetTransactionListQuery {
            account_number: "2800000000".to_string(),
            currency_code: "CZK".to_string(),
            from: Utc.with_ymd_and_hms(2021, 8, 1, 0, 0, 0).unwrap(),
            to: Utc.with_ymd_and_hms(2021, 8, 2, 14, 0, 0).unwrap(),
            page: None,
        };
        api.get_transaction_list(&query).await.unwrap();

        let request = &secure.recorded()[0];
        assert_eq!(
            request.url,
            "https://api.rb.cz/rbcz/premium/mock/accounts/2800000000/CZK/transactions"
        );
        assert_eq!(
            request.query,
            vec![
                ("from".to_string(), "2021-08-01T00:00:00.000Z".to_string()),
                ("to".to_string(), "2021-08-02T14:00:00.000Z".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_upload_payments_carries_metadata_in_headers() {
        let (api, secure, _) = api(true);
        secure.queue_json(200, "OK", serde_json::json!({ "batchFileId": 123 }));

        let upload = UploadPaymentsRequest {
            format: BatchImportFormat::SepaXml,
            name: Some("payroll".to_string()),
            combined_payments: None,
            autocorrect: Some(false),
            body: "<pain.001/>".to_string(),
        };
        let outcome = api.upload_payments(&upload).await.unwrap();
        assert_eq!(outcome.success().unwrap().batch_file_id, 123);

        let request = &secure.recorded()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header("Batch-Import-Format"), Some("SEPA-XML"));
        assert_eq!(request.header("Batch-Name"), Some("payroll"));
        assert_eq!(request.header("Batch-Autocorrect"), Some("false"));
        // Omitted optional header is not sent at all.
        assert_eq!(request.header("Batch-Combined-Payments"), None);
        assert_eq!(
            request.body,
            Some(RequestBody::Text("<pain.001/>".to_string()))
        );
    }

    #[tokio::test]
    async fn test_batch_detail_substitutes_file_id() {
        let (api, secure, _) = api(false);
        secure.queue_json(
            200,
            "OK",
            serde_json::json!({
                "batchName": "payroll", "batchFileStatus": "PASSED",
                "createDate": "2021-08-01T10:00:00.0Z", "batchItems": [],
            }),
        );

        api.get_batch_detail(123).await.unwrap();

        assert_eq!(
            secure.recorded()[0].url,
            "https://api.rb.cz/rbcz/premium/api/payments/batches/123"
        );
    }

    #[tokio::test]
    async fn test_statement_list_posts_filter_body_with_query() {
        let (api, secure, _) = api(true);
        secure.queue_json(
            200,
            "OK",
            serde_json::json!({
                "statements": [], "page": 1, "size": 15, "first": true, "last": true,
                "totalPages": 0, "totalSize": 0,
            }),
        );

        let query = GetStatementListQuery {
            page: Some(1),
            size: None,
            filter: StatementFilter {
                account_number: "2800000000".to_string(),
                currency: "CZK".to_string(),
                statement_line: "MAIN".to_string(),
                date_from: NaiveDate::from_ymd_opt(2021, 8, 1).unwrap(),
                date_to: NaiveDate::from_ymd_opt(2021, 8, 31).unwrap(),
            },
        };
        api.get_statement_list(&query).await.unwrap();

        let request = &secure.recorded()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.query, vec![("page".to_string(), "1".to_string())]);
        let Some(RequestBody::Json(body)) = &request.body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body["accountNumber"], "2800000000");
        assert_eq!(body["dateFrom"], "2021-08-01");
    }

    #[tokio::test]
    async fn test_download_statement_passes_document_through() {
        let (api, secure, _) = api(true);
        secure.queue(Ok(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: HashMap::from([("Content-Type".to_string(), "text/mt940".to_string())]),
            body: b":20:REF123".to_vec(),
        }));

        let download = DownloadStatementRequest {
            language: StatementLanguage::En,
            statement: StatementSelector {
                account_number: "2800000000".to_string(),
                currency: "CZK".to_string(),
                statement_id: "st-1".to_string(),
                statement_format: "MT940".to_string(),
            },
        };
        let outcome = api.download_statement(&download).await.unwrap();
        let document = outcome.success().unwrap();
        assert_eq!(document.content_type.as_deref(), Some("text/mt940"));
        assert_eq!(document.as_text(), ":20:REF123");

        let request = &secure.recorded()[0];
        assert_eq!(request.header("Accept-Language"), Some("en"));
    }

    #[tokio::test]
    async fn test_fx_rates_use_the_plain_transport() {
        let (api, secure, public) = api(true);
        public.queue_json(200, "OK", serde_json::json!({ "exchangeRateLists": [] }));
        public.queue_json(200, "OK", serde_json::json!({ "exchangeRateLists": [] }));

        api.get_fx_rates_list(None).await.unwrap();
        api.get_fx_rates("EUR", NaiveDate::from_ymd_opt(2021, 8, 1))
            .await
            .unwrap();

        assert!(secure.recorded().is_empty());
        let requests = public.recorded();
        assert_eq!(requests[0].url, "https://api.rb.cz/rbcz/premium/mock/fxrates");
        assert!(requests[0].query.is_empty());
        assert_eq!(
            requests[1].url,
            "https://api.rb.cz/rbcz/premium/mock/fxrates/EUR"
        );
        assert_eq!(
            requests[1].query,
            vec![("date".to_string(), "2021-08-01".to_string())]
        );
    }

    #[tokio::test]
    async fn test_structured_error_is_returned_not_raised() {
        let (api, secure, _) = api(true);
        secure.queue_json(
            404,
            "Not Found",
            serde_json::json!({
                "error": "not_found",
                "error_description": "Account not found",
            }),
        );

        let outcome = api.get_accounts(&GetAccountsQuery::default()).await.unwrap();
        let error = outcome.error().unwrap();
        assert_eq!(
            *error,
            ApiErrorResponse {
                status_code: 404,
                status_message: "Not Found".to_string(),
                error: Some("not_found".to_string()),
                error_description: Some("Account not found".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_reason_phrase_becomes_unknown_error() {
        let (api, secure, _) = api(true);
        secure.queue(Ok(HttpResponse {
            status: 599,
            status_text: String::new(),
            headers: HashMap::new(),
            body: b"not json".to_vec(),
        }));

        let outcome = api.get_accounts(&GetAccountsQuery::default()).await.unwrap();
        let error = outcome.error().unwrap();
        assert_eq!(error.status_code, 599);
        assert_eq!(error.status_message, "Unknown error");
        assert_eq!(error.error, None);
        assert_eq!(error.error_description, None);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_as_fault() {
        let (api, secure, _) = api(true);
        secure.queue(Err(HttpClientError::ConnectionRefused {
            host: "api.rb.cz".to_string(),
        }));

        let result = api.get_accounts(&GetAccountsQuery::default()).await;
        assert!(matches!(
            result,
            Err(ClientError::Transport(HttpClientError::ConnectionRefused { .. }))
        ));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_a_decode_fault() {
        let (api, secure, _) = api(true);
        secure.queue_json(200, "OK", serde_json::json!({ "unexpected": true }));

        let result = api.get_accounts(&GetAccountsQuery::default()).await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_identical_calls_yield_identical_results() {
        let (api, secure, _) = api(true);
        let body = serde_json::json!({
            "accounts": [{
                "accountId": "1", "accountName": "A", "friendlyName": "A",
                "accountNumber": 2800000000u64, "accountNumberPrefix": "0",
                "iban": "CZ5555000000002800000000", "bankCode": 5500,
                "bankBicCode": "RZBCCZPP", "mainCurrency": "CZK",
                "accountTypeId": "CURRENT",
            }],
            "page": 1, "size": 15, "first": true, "last": true,
            "totalPages": 1, "totalSize": 1,
        });
        secure.queue_json(200, "OK", body.clone());
        secure.queue_json(200, "OK", body);

        let query = GetAccountsQuery {
            page: Some(1),
            size: None,
        };
        let first = api.get_accounts(&query).await.unwrap();
        let second = api.get_accounts(&query).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_certificate_error_converts_into_client_error() {
        let error = ClientError::from(CertificateError::InvalidPassword);
        assert!(matches!(
            error,
            ClientError::Certificate(CertificateError::InvalidPassword)
        ));
    }
}
