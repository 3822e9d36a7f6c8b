use rust_decimal::Decimal;

use crate::{
    gateway::{ChapaResponse, Currency},
    serde_utils::null_as_default,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

/// Only `status` is mandatory, every other field falls back to its default when missing or null
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub status: TransactionStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ref_id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: Currency,
    /// The gateway sends either a string or a number
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub charge: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trans_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: Customer,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub current_page: u32,
    pub first_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
    pub pagination: Pagination,
}

pub type TransactionsResponse = ChapaResponse<TransactionList>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body() -> serde_json::Value {
        json!({
            "message": "Transactions retrieved",
            "status": "success",
            "data": {
                "transactions": [
                    {
                        "status": "success",
                        "ref_id": "APfxJcTxn2",
                        "type": "API",
                        "created_at": "2024-05-01T10:00:00.000000Z",
                        "currency": "ETB",
                        "amount": "100.00",
                        "charge": "3.50",
                        "trans_id": "tx-001",
                        "payment_method": "telebirr",
                        "customer": {
                            "id": 7,
                            "email": "abebe@example.com",
                            "first_name": "Abebe",
                            "last_name": "Kebede",
                            "mobile": "0911223344"
                        }
                    },
                    {
                        "status": "pending",
                        "ref_id": "APfxJcTxn3",
                        "type": "API",
                        "created_at": "2024-05-02T10:00:00.000000Z",
                        "currency": "USD",
                        "amount": 12.5,
                        "charge": "0.44",
                        "trans_id": "tx-002",
                        "payment_method": "card",
                        "customer": {
                            "id": 8,
                            "email": "kebede@example.com",
                            "first_name": "Kebede",
                            "last_name": "Abebe",
                            "mobile": "0911556677"
                        }
                    }
                ],
                "pagination": {
                    "per_page": 10,
                    "current_page": 1,
                    "first_page_url": "https://api.chapa.co/v1/transactions?page=1",
                    "next_page_url": null,
                    "prev_page_url": null
                }
            }
        })
    }

    #[test]
    fn transaction_list() {
        let response: TransactionsResponse = serde_json::from_value(body()).unwrap();
        let list = response.data.unwrap();
        assert_eq!(list.transactions.len(), 2);

        let first = &list.transactions[0];
        assert_eq!(first.status, TransactionStatus::Success);
        assert_eq!(first.kind, "API");
        assert_eq!(first.amount, Decimal::new(100, 0));
        assert_eq!(first.customer.id, 7);

        let second = &list.transactions[1];
        assert_eq!(second.status, TransactionStatus::Pending);
        assert_eq!(second.currency, Currency::Usd);
        assert_eq!(second.amount, Decimal::new(125, 1));

        assert_eq!(list.pagination.per_page, 10);
        assert!(list.pagination.next_page_url.is_none());
    }

    #[test]
    fn null_and_missing_fields_take_defaults() {
        let mut body = body();
        let first = &mut body["data"]["transactions"][0];
        first["customer"]["email"] = json!(null);
        first["customer"]["mobile"] = json!(null);
        first["payment_method"] = json!(null);
        first["amount"] = json!(null);
        first.as_object_mut().unwrap().remove("charge");
        body["data"]["pagination"]
            .as_object_mut()
            .unwrap()
            .remove("per_page");

        let response: TransactionsResponse = serde_json::from_value(body).unwrap();
        let list = response.data.unwrap();
        let first = &list.transactions[0];
        assert_eq!(first.customer.email, "");
        assert_eq!(first.customer.mobile, "");
        assert_eq!(first.customer.first_name, "Abebe");
        assert_eq!(first.payment_method, "");
        assert_eq!(first.amount, Decimal::ZERO);
        assert_eq!(first.charge, "");
        assert_eq!(list.pagination.per_page, 0);
        assert_eq!(list.transactions[1].charge, "0.44");
    }

    #[test]
    fn transaction_without_customer() {
        let transaction: Transaction = serde_json::from_value(json!({
            "status": "pending",
            "ref_id": "APfxJcTxn4",
            "customer": null
        }))
        .unwrap();
        assert_eq!(transaction.customer, Customer::default());
        assert_eq!(transaction.currency, Currency::default());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut body = body();
        body["data"]["transactions"][0]["status"] = json!("refunded");
        assert!(serde_json::from_value::<TransactionsResponse>(body).is_err());
    }

    #[test]
    fn status_names() {
        for (status, name) in [
            (TransactionStatus::Pending, "pending"),
            (TransactionStatus::Success, "success"),
            (TransactionStatus::Failed, "failed"),
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(name));
        }
    }
}
