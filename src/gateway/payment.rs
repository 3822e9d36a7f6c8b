use rust_decimal::Decimal;

use crate::gateway::{
    ChapaResponse, Currency,
    validate::{Checker, Validate, ValidationErrors},
};

/// Body of `POST /transaction/initialize`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaymentRequest {
    /// Serialized as a JSON string, `"100.50"`
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    pub tx_ref: String,
    /// Hosted checkout page customization (`title`, `description`, `logo`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<serde_json::Map<String, serde_json::Value>>,
}

impl PaymentRequest {
    pub fn new(tx_ref: impl Into<String>, amount: Decimal, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            tx_ref: tx_ref.into(),
            ..Default::default()
        }
    }
}

impl Validate for PaymentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::default();
        checker.required_str("tx_ref", &self.tx_ref, "transaction reference is required");
        checker.required_currency("currency", &self.currency, "currency is required");
        checker.required_amount("amount", self.amount, "amount is required");
        checker.finish()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckoutData {
    pub checkout_url: String,
}

pub type PaymentResponse = ChapaResponse<CheckoutData>;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VerifyData {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub charge: Option<Decimal>,
}

pub type VerifyResponse = ChapaResponse<VerifyData>;

/// Unique merchant reference, `<prefix>-<uuid>`
pub fn new_tx_ref(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
