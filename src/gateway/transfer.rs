use rust_decimal::Decimal;

use crate::{
    gateway::{
        ChapaResponse, Currency,
        validate::{Checker, Validate, ValidationErrors},
    },
    serde_utils::null_as_default,
};

/// Payout to a single bank account, body of `POST /transfers`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BankTransfer {
    /// Recipient account name as registered with their bank
    pub account_name: String,
    pub account_number: String,
    /// Sent as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    /// Merchant's unique reference, used to query the transfer later
    pub reference: String,
    /// Recipient bank code, see [`crate::ChapaGateway::banks`]
    pub bank_code: String,
}

impl Validate for BankTransfer {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::default();
        checker.required_str("account_name", &self.account_name, "account name is required");
        checker.required_str(
            "account_number",
            &self.account_number,
            "account number is required",
        );
        checker.required_amount("amount", self.amount, "amount is required");
        checker.required_currency("currency", &self.currency, "currency is required");
        checker.required_str("reference", &self.reference, "reference is required");
        checker.required_str("bank_code", &self.bank_code, "bank code is required");
        checker.finish()
    }
}

/// `data` is a free-form confirmation string
pub type BankTransferResponse = ChapaResponse<String>;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulkData {
    pub account_name: String,
    pub account_number: String,
    pub amount: i64,
    pub reference: String,
    pub bank_code: String,
}

/// Body of `POST /bulk-transfers`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulkTransferRequest {
    pub title: String,
    pub currency: Currency,
    pub bulk_data: Vec<BulkData>,
}

impl Validate for BulkTransferRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::default();
        checker.required_str("title", &self.title, "title of the bulk transfer is required");
        checker.required_currency("currency", &self.currency, "currency is required");
        checker.non_empty("bulk_data", &self.bulk_data, "at least one account is required");
        for (i, entry) in self.bulk_data.iter().enumerate() {
            let field = |name: &str| format!("bulk_data[{i}].{name}");
            checker.required_str(
                field("account_name"),
                &entry.account_name,
                "account name is required",
            );
            checker.required_str(
                field("account_number"),
                &entry.account_number,
                "account number is required",
            );
            checker.required_units(field("amount"), entry.amount, "amount is required");
            checker.required_str(field("reference"), &entry.reference, "reference is required");
            checker.required_str(field("bank_code"), &entry.bank_code, "bank code is required");
        }
        checker.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BulkTransferData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

pub type BulkTransferResponse = ChapaResponse<BulkTransferData>;
