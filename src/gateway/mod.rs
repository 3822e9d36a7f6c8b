use std::{fmt::Display, time::Duration};

use reqwest::header::HeaderMap;
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;
use url::Url;

use crate::{
    config::ChapaConfig,
    gateway::{
        auth::authenticated_headers,
        banks::BanksResponse,
        payment::{PaymentRequest, PaymentResponse, VerifyResponse},
        transactions::TransactionsResponse,
        transfer::{BankTransfer, BankTransferResponse, BulkTransferRequest, BulkTransferResponse},
        validate::Validate,
    },
};

mod auth;
/// Bank reference data
pub mod banks;
pub mod error;
/// Log redaction of account numbers and contact details
pub mod mask;
/// Hosted checkout initialization and verification
pub mod payment;
/// Transaction history lookup
pub mod transactions;
/// Single and bulk payouts
pub mod transfer;
pub mod validate;

pub use error::ChapaError;

pub type Result<T> = std::result::Result<T, ChapaError>;

/// Envelope shared by every gateway response
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChapaResponse<T> {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `null` when the call failed
    pub data: Option<T>,
}

impl<T> ChapaResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Decoding goes through [`From<String>`], so wire values and hand-built codes normalize the same way
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String")]
pub enum Currency {
    #[serde(rename = "ETB")]
    Etb,
    #[serde(rename = "USD")]
    Usd,
    /// Any other ISO code, surrounding whitespace trimmed
    #[serde(untagged)]
    Other(String),
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Self::Etb => "ETB",
            Self::Usd => "USD",
            Self::Other(code) => code,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.code().trim().is_empty()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        let code = value.trim();
        match code.to_uppercase().as_str() {
            "ETB" => Self::Etb,
            "USD" => Self::Usd,
            _ => Self::Other(code.to_string()),
        }
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Initialize,
    Verify,
    Transfers,
    BulkTransfers,
    Transactions,
    Banks,
}

impl Endpoint {
    fn segments(self) -> &'static [&'static str] {
        match self {
            Self::Initialize => &["transaction", "initialize"],
            Self::Verify => &["transaction", "verify"],
            Self::Transfers => &["transfers"],
            Self::BulkTransfers => &["bulk-transfers"],
            Self::Transactions => &["transactions"],
            Self::Banks => &["banks"],
        }
    }
}

/// Chapa REST API client
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ChapaGateway {
    client: reqwest::Client,
    headers: HeaderMap,
    base_url: Url,
}

impl ChapaGateway {
    /// Production client with the given per-request timeout
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self> {
        Self::from_config(&ChapaConfig::new(api_key).with_timeout(timeout))
    }

    pub fn from_config(config: &ChapaConfig) -> Result<Self> {
        let headers = authenticated_headers(&config.api_key)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            headers,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint, extra: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(endpoint.segments());
            if let Some(extra) = extra {
                path.push(extra);
            }
        }
        url
    }

    /// Rejects invalid input before anything touches the network
    fn check(request: &(impl Validate + Serialize), kind: &str) -> Result<()> {
        if let Err(e) = request.validate() {
            tracing::warn!(
                input = %mask::secure_serializable(request),
                "Rejected {kind} request: {e}"
            );
            return Err(e.into());
        }
        Ok(())
    }

    async fn post<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint, None);
        tracing::debug!(%url, data = %mask::secure_serializable(body), "Gateway API request");
        let request = self.client.post(url).headers(self.headers.clone()).json(body);
        self.execute(request).await
    }

    async fn get<T>(&self, endpoint: Endpoint, extra: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint, extra);
        tracing::debug!(%url, "Gateway API request");
        let request = self.client.get(url).headers(self.headers.clone());
        self.execute(request).await
    }

    async fn execute<T>(&self, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let res = request.send().await.inspect_err(|e| {
            tracing::error!("Gateway API request failed: {e}");
        })?;
        let status = res.status();
        let body = res.bytes().await.inspect_err(|e| {
            tracing::error!(%status, "Failed to read gateway response body: {e}");
        })?;

        let response = serde_json::from_slice::<serde_json::Value>(&body).inspect_err(|e| {
            tracing::error!(%status, "Gateway response is not json: {e}");
        })?;
        tracing::debug!(%status, data = %mask::secure_value(&response), "Gateway API response");
        let response = serde_json::from_value(response).inspect_err(|e| {
            tracing::error!(%status, "Failed to deserialize gateway response: {e}");
        })?;
        Ok(response)
    }

    /// Initializes a hosted checkout and returns its checkout url.
    #[instrument(skip_all, fields(tx_ref = %request.tx_ref))]
    pub async fn payment_request(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        Self::check(request, "payment")?;
        self.post(Endpoint::Initialize, request).await
    }

    /// Looks up a payment by the merchant's transaction reference.
    #[instrument(skip(self))]
    pub async fn verify(&self, tx_ref: &str) -> Result<VerifyResponse> {
        self.get(Endpoint::Verify, Some(tx_ref)).await
    }

    #[instrument(skip_all, fields(reference = %request.reference))]
    pub async fn transfer_to_bank(&self, request: &BankTransfer) -> Result<BankTransferResponse> {
        Self::check(request, "bank transfer")?;
        self.post(Endpoint::Transfers, request).await
    }

    #[instrument(skip_all)]
    pub async fn transactions(&self) -> Result<TransactionsResponse> {
        self.get(Endpoint::Transactions, None).await
    }

    #[instrument(skip_all)]
    pub async fn banks(&self) -> Result<BanksResponse> {
        self.get(Endpoint::Banks, None).await
    }

    #[instrument(skip_all, fields(title = %request.title, entries = request.bulk_data.len()))]
    pub async fn bulk_transfer(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<BulkTransferResponse> {
        Self::check(request, "bulk transfer")?;
        self.post(Endpoint::BulkTransfers, request).await
    }
}
