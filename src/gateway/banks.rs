use crate::{
    gateway::{ChapaResponse, Currency},
    serde_utils::null_as_default,
};

/// Bank supported for payouts, as listed by `GET /banks`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Bank {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub swift: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub acct_length: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub country_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub is_rtgs: Option<i64>,
    #[serde(rename = "is_mobilemoney")]
    pub is_mobile_money: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: Currency,
}

impl Bank {
    pub fn supports_rtgs(&self) -> bool {
        self.is_rtgs.is_some_and(|v| v != 0)
    }

    pub fn supports_mobile_money(&self) -> bool {
        self.is_mobile_money.is_some_and(|v| v != 0)
    }

    /// Whether `account_number` has the length this bank expects
    pub fn accepts_account_number(&self, account_number: &str) -> bool {
        usize::try_from(self.acct_length).is_ok_and(|len| account_number.chars().count() == len)
    }
}

/// The bank list carries no `status` field
pub type BanksResponse = ChapaResponse<Vec<Bank>>;
