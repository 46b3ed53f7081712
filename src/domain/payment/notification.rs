//! Zenkipay payment notification payload.
//!
//! Only the fields needed for order reconciliation are captured; everything
//! else in the notification is ignored.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Payment notification sent by Zenkipay after a checkout changes state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    /// Processor-side transaction status. Absent or null counts as not completed.
    #[serde(default, deserialize_with = "deserialize_status")]
    pub transaction_status: TransactionStatus,

    /// Store order this payment belongs to.
    #[serde(default, deserialize_with = "deserialize_reference")]
    pub merchant_order_id: Option<String>,

    /// Zenkipay order id, recorded as the payment's transaction id.
    #[serde(default, deserialize_with = "deserialize_reference")]
    pub order_id: Option<String>,
}

impl PaymentNotification {
    /// Deserializes a notification from an already-verified JSON body.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Returns true once the processor has settled the payment.
    pub fn is_completed(&self) -> bool {
        self.transaction_status == TransactionStatus::Completed
    }
}

/// Transaction status reported by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TransactionStatus {
    Completed,
    /// Any other status (pending, expired, ...); acknowledged without action.
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Other(status) => status,
        }
    }
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Other(String::new())
    }
}

impl From<String> for TransactionStatus {
    fn from(status: String) -> Self {
        if status == "COMPLETED" {
            TransactionStatus::Completed
        } else {
            TransactionStatus::Other(status)
        }
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<TransactionStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => TransactionStatus::default(),
        Some(Value::String(s)) => TransactionStatus::from(s),
        Some(other) => TransactionStatus::Other(other.to_string()),
    })
}

/// Accepts ids sent either as JSON strings or numbers.
///
/// Blank strings, `"0"` and numeric zero mean "no reference", the same way
/// the store plugin treats them.
fn deserialize_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty() && trimmed != "0").then(|| trimmed.to_string()))
        }
        Some(Value::Number(n)) => Ok((n.as_f64() != Some(0.0)).then(|| n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number reference, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_completed_notification() {
        let notification = PaymentNotification::from_value(json!({
            "transactionStatus": "COMPLETED",
            "merchantOrderId": "1042",
            "orderId": "zk_ord_77",
            "amount": 25.5
        }))
        .unwrap();

        assert!(notification.is_completed());
        assert_eq!(notification.merchant_order_id.as_deref(), Some("1042"));
        assert_eq!(notification.order_id.as_deref(), Some("zk_ord_77"));
    }

    #[test]
    fn numeric_merchant_order_id_is_normalized() {
        let notification = PaymentNotification::from_value(json!({
            "transactionStatus": "COMPLETED",
            "merchantOrderId": 1042
        }))
        .unwrap();

        assert_eq!(notification.merchant_order_id.as_deref(), Some("1042"));
        assert!(notification.order_id.is_none());
    }

    #[test]
    fn empty_merchant_order_id_is_none() {
        for reference in [json!(""), json!("   "), json!("0"), json!(0), json!(0.0), Value::Null] {
            let notification = PaymentNotification::from_value(json!({
                "transactionStatus": "COMPLETED",
                "merchantOrderId": reference
            }))
            .unwrap();

            assert!(
                notification.merchant_order_id.is_none(),
                "{:?}",
                notification.merchant_order_id
            );
        }
    }

    #[test]
    fn zero_prefixed_reference_is_kept() {
        let notification = PaymentNotification::from_value(json!({
            "transactionStatus": "COMPLETED",
            "merchantOrderId": "0042"
        }))
        .unwrap();

        assert_eq!(notification.merchant_order_id.as_deref(), Some("0042"));
    }

    #[test]
    fn other_status_is_preserved() {
        let notification = PaymentNotification::from_value(json!({
            "transactionStatus": "PENDING"
        }))
        .unwrap();

        assert!(!notification.is_completed());
        assert_eq!(notification.transaction_status.as_str(), "PENDING");
    }

    #[test]
    fn status_match_is_case_sensitive() {
        let status = TransactionStatus::from("completed".to_string());
        assert_eq!(status, TransactionStatus::Other("completed".to_string()));
    }

    #[test]
    fn missing_or_null_status_is_not_completed() {
        for body in [
            json!({ "merchantOrderId": "1" }),
            json!({ "transactionStatus": null, "merchantOrderId": "1" }),
            json!({ "transactionStatus": 3, "merchantOrderId": "1" }),
        ] {
            let notification = PaymentNotification::from_value(body).unwrap();
            assert!(!notification.is_completed());
        }
    }

    #[test]
    fn object_reference_is_rejected() {
        let result = PaymentNotification::from_value(json!({
            "transactionStatus": "COMPLETED",
            "merchantOrderId": { "id": 1 }
        }));
        assert!(result.is_err());
    }
}
