//! Response DTOs for the notification endpoint.

use serde::Serialize;

use crate::application::HandlePaymentNotificationResult;

/// Body returned when a delivery is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAckResponse {
    /// Outcome label (`reconciled`, `ignored`, ...).
    pub status: &'static str,
    /// Store order the notification referred to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_order_id: Option<String>,
}

impl From<&HandlePaymentNotificationResult> for NotificationAckResponse {
    fn from(result: &HandlePaymentNotificationResult) -> Self {
        let merchant_order_id = match result {
            HandlePaymentNotificationResult::Reconciled {
                merchant_order_id, ..
            }
            | HandlePaymentNotificationResult::AlreadyPaid { merchant_order_id }
            | HandlePaymentNotificationResult::OrderNotFound { merchant_order_id } => {
                Some(merchant_order_id.clone())
            }
            HandlePaymentNotificationResult::Ignored { .. }
            | HandlePaymentNotificationResult::NoOrder => None,
        };

        Self {
            status: result.as_str(),
            merchant_order_id,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
