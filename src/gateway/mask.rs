use serde::Serialize;

pub trait MaskPolicy {
    fn mask(value: &str) -> String;
}

/// Keeps the last four characters, used for account and phone numbers
#[derive(Debug)]
pub struct LastFour;

impl MaskPolicy for LastFour {
    fn mask(value: &str) -> String {
        let len = value.chars().count();
        if len > 4 {
            let tail: String = value.chars().skip(len - 4).collect();
            "*".repeat(len - 4) + &tail
        } else {
            value.to_string()
        }
    }
}

/// Keeps the first character of the local part and the whole domain
#[derive(Debug)]
pub struct EmailAddress;

impl MaskPolicy for EmailAddress {
    fn mask(value: &str) -> String {
        match value.split_once('@') {
            Some((local, domain)) => {
                let first: String = local.chars().take(1).collect();
                format!("{first}***@{domain}")
            }
            None => LastFour::mask(value),
        }
    }
}

/// Return true if a key name likely holds a bank account number.
fn is_account_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("account_number") || k.contains("acct_no")
}

/// Return true if a key name likely holds a phone number.
fn is_phone_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("phone") || k == "mobile"
}

fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    match serde_json::to_value(v) {
        Ok(value) => secure_value(&value),
        Err(e) => serde_json::Value::String(format!("<unserializable: {e}>")),
    }
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_account_key(k) || is_phone_key(k) => {
                        Value::String(LastFour::mask(s))
                    }
                    Value::Number(n) if is_account_key(k) || is_phone_key(k) => {
                        Value::String(LastFour::mask(&n.to_string()))
                    }
                    Value::String(s) if is_email_key(k) => Value::String(EmailAddress::mask(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn last_four() {
        assert_eq!(LastFour::mask("1000123456789"), "*********6789");
        assert_eq!(LastFour::mask("1234"), "1234");
    }

    #[test]
    fn email() {
        assert_eq!(EmailAddress::mask("abebe@example.com"), "a***@example.com");
        assert_eq!(EmailAddress::mask("@example.com"), "***@example.com");
    }

    #[test]
    fn masks_nested_bulk_entries() {
        let value = json!({
            "title": "payroll",
            "bulk_data": [
                { "account_name": "Abebe", "account_number": "0912345678", "amount": 10 },
                { "account_name": "Kebede", "account_number": 1000123456789u64, "amount": 20 }
            ]
        });
        let masked = secure_value(&value);
        assert_eq!(masked["title"], "payroll");
        assert_eq!(masked["bulk_data"][0]["account_number"], "******5678");
        assert_eq!(masked["bulk_data"][1]["account_number"], "*********6789");
        assert_eq!(masked["bulk_data"][1]["account_name"], "Kebede");
        assert_eq!(masked["bulk_data"][1]["amount"], 20);
    }

    #[test]
    fn masks_customer_contacts() {
        let value = json!({
            "customer": { "email": "abebe@example.com", "mobile": "0911223344" },
            "phone": "0911223344"
        });
        let masked = secure_value(&value);
        assert_eq!(masked["customer"]["email"], "a***@example.com");
        assert_eq!(masked["customer"]["mobile"], "******3344");
        assert_eq!(masked["phone"], "******3344");
    }
}
