//! HandlePaymentNotificationHandler - Command handler for Zenkipay payment webhooks.

use std::sync::Arc;

use http::HeaderMap;

use crate::domain::payment::{NotificationError, PaymentNotification};
use crate::domain::webhook::{DeliveryHeaders, WebhookError, WebhookVerifier};
use crate::ports::{OrderReconciler, ReconcileOutcome};

/// Command to handle one webhook delivery.
#[derive(Debug, Clone)]
pub struct HandlePaymentNotificationCommand {
    /// Raw request body, exactly as received.
    pub payload: Vec<u8>,
    /// Request headers.
    pub headers: HeaderMap,
}

/// Result of notification processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlePaymentNotificationResult {
    /// Order marked paid.
    Reconciled {
        merchant_order_id: String,
        transaction_id: Option<String>,
    },
    /// Order had already been marked paid by an earlier delivery.
    AlreadyPaid { merchant_order_id: String },
    /// The store does not know the referenced order.
    OrderNotFound { merchant_order_id: String },
    /// Status is not COMPLETED; acknowledged without action.
    Ignored { status: String },
    /// Completed payment without a merchant order reference.
    NoOrder,
}

impl HandlePaymentNotificationResult {
    /// Short label for responses and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reconciled { .. } => "reconciled",
            Self::AlreadyPaid { .. } => "already_paid",
            Self::OrderNotFound { .. } => "order_not_found",
            Self::Ignored { .. } => "ignored",
            Self::NoOrder => "no_order",
        }
    }
}

/// Handler for Zenkipay payment notifications.
///
/// Verifies the delivery, then marks the referenced store order as paid
/// through the [`OrderReconciler`] port. Rejected deliveries never reach the
/// reconciler.
pub struct HandlePaymentNotificationHandler {
    verifier: Arc<WebhookVerifier>,
    reconciler: Arc<dyn OrderReconciler>,
}

impl HandlePaymentNotificationHandler {
    pub fn new(verifier: Arc<WebhookVerifier>, reconciler: Arc<dyn OrderReconciler>) -> Self {
        Self {
            verifier,
            reconciler,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandlePaymentNotificationCommand,
    ) -> Result<HandlePaymentNotificationResult, NotificationError> {
        let reject = |err: WebhookError, msg_id: &str| {
            tracing::warn!(
                msg_id = %msg_id,
                error_code = err.error_code(),
                "Rejected webhook delivery: {}",
                err
            );
            NotificationError::from(err)
        };

        // 1. Verify signature and freshness
        let delivery = DeliveryHeaders::resolve(&cmd.headers).map_err(|err| reject(err, "-"))?;
        let msg_id = delivery.id;

        let body = self
            .verifier
            .verify_delivery(&cmd.payload, &delivery)
            .map_err(|err| reject(err, msg_id))?;

        // 2. Interpret the notification
        let notification = PaymentNotification::from_value(body)
            .map_err(|e| NotificationError::InvalidNotification(e.to_string()))?;

        tracing::info!(
            msg_id = %msg_id,
            status = notification.transaction_status.as_str(),
            merchant_order_id = notification.merchant_order_id.as_deref().unwrap_or("-"),
            "Verified payment notification"
        );

        if !notification.is_completed() {
            return Ok(HandlePaymentNotificationResult::Ignored {
                status: notification.transaction_status.as_str().to_string(),
            });
        }

        let merchant_order_id = match notification.merchant_order_id {
            Some(id) => id,
            None => {
                tracing::warn!(msg_id = %msg_id, "Completed payment has no merchant order id");
                return Ok(HandlePaymentNotificationResult::NoOrder);
            }
        };

        // 3. Reconcile with the store
        let outcome = self
            .reconciler
            .mark_paid(&merchant_order_id, notification.order_id.as_deref())
            .await
            .map_err(|err| {
                tracing::error!(
                    msg_id = %msg_id,
                    merchant_order_id = %merchant_order_id,
                    "Order reconciliation failed: {}",
                    err
                );
                NotificationError::from(err)
            })?;

        let result = match outcome {
            ReconcileOutcome::MarkedPaid => HandlePaymentNotificationResult::Reconciled {
                merchant_order_id,
                transaction_id: notification.order_id,
            },
            ReconcileOutcome::AlreadyPaid => {
                HandlePaymentNotificationResult::AlreadyPaid { merchant_order_id }
            }
            ReconcileOutcome::OrderNotFound => {
                tracing::warn!(
                    msg_id = %msg_id,
                    merchant_order_id = %merchant_order_id,
                    "Payment notification references unknown order"
                );
                HandlePaymentNotificationResult::OrderNotFound { merchant_order_id }
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::orders::InMemoryOrderReconciler;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use http::HeaderValue;

    const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";

    // ════════════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn verifier() -> Arc<WebhookVerifier> {
        Arc::new(WebhookVerifier::new(SECRET).unwrap())
    }

    fn signed_command(
        verifier: &WebhookVerifier,
        body: serde_json::Value,
    ) -> HandlePaymentNotificationCommand {
        let payload = serde_json::to_vec(&body).unwrap();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = verifier.sign("msg_test", &timestamp, &payload).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("webhook-id", HeaderValue::from_static("msg_test"));
        headers.insert("webhook-timestamp", HeaderValue::from_str(&timestamp).unwrap());
        headers.insert("webhook-signature", HeaderValue::from_str(&signature).unwrap());

        HandlePaymentNotificationCommand { payload, headers }
    }

    fn handler(orders: &InMemoryOrderReconciler) -> HandlePaymentNotificationHandler {
        HandlePaymentNotificationHandler::new(verifier(), Arc::new(orders.clone()))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn completed_notification_marks_order_paid() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
        let cmd = signed_command(
            &verifier(),
            serde_json::json!({
                "transactionStatus": "COMPLETED",
                "merchantOrderId": "1042",
                "orderId": "zk_ord_77"
            }),
        );

        let result = handler(&orders).handle(cmd).await.unwrap();

        assert_eq!(
            result,
            HandlePaymentNotificationResult::Reconciled {
                merchant_order_id: "1042".to_string(),
                transaction_id: Some("zk_ord_77".to_string()),
            }
        );
        let order = orders.order("1042").unwrap();
        assert!(order.paid);
        assert_eq!(order.transaction_id.as_deref(), Some("zk_ord_77"));
    }

    #[tokio::test]
    async fn duplicate_delivery_is_already_paid() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
        let cmd = signed_command(
            &verifier(),
            serde_json::json!({ "transactionStatus": "COMPLETED", "merchantOrderId": 1042 }),
        );
        let handler = handler(&orders);

        handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(
            second,
            HandlePaymentNotificationResult::AlreadyPaid {
                merchant_order_id: "1042".to_string()
            }
        );
    }

    #[tokio::test]
    async fn pending_notification_is_ignored() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
        let cmd = signed_command(
            &verifier(),
            serde_json::json!({ "transactionStatus": "PENDING", "merchantOrderId": "1042" }),
        );

        let result = handler(&orders).handle(cmd).await.unwrap();

        assert_eq!(
            result,
            HandlePaymentNotificationResult::Ignored {
                status: "PENDING".to_string()
            }
        );
        assert!(!orders.order("1042").unwrap().paid);
    }

    #[tokio::test]
    async fn completed_without_order_reference_is_acknowledged() {
        let orders = InMemoryOrderReconciler::new();
        let cmd = signed_command(
            &verifier(),
            serde_json::json!({ "transactionStatus": "COMPLETED" }),
        );

        let result = handler(&orders).handle(cmd).await.unwrap();

        assert_eq!(result, HandlePaymentNotificationResult::NoOrder);
    }

    #[tokio::test]
    async fn unknown_order_is_acknowledged() {
        let orders = InMemoryOrderReconciler::new();
        let cmd = signed_command(
            &verifier(),
            serde_json::json!({ "transactionStatus": "COMPLETED", "merchantOrderId": "9" }),
        );

        let result = handler(&orders).handle(cmd).await.unwrap();

        assert_eq!(result.as_str(), "order_not_found");
    }

    #[tokio::test]
    async fn tampered_body_is_rejected_without_side_effects() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
        let mut cmd = signed_command(
            &verifier(),
            serde_json::json!({ "transactionStatus": "PENDING", "merchantOrderId": "1042" }),
        );
        cmd.payload = serde_json::to_vec(&serde_json::json!({
            "transactionStatus": "COMPLETED",
            "merchantOrderId": "1042"
        }))
        .unwrap();

        let result = handler(&orders).handle(cmd).await;

        assert!(matches!(
            result,
            Err(NotificationError::Verification(WebhookError::NoMatchingSignature))
        ));
        assert!(!orders.order("1042").unwrap().paid);
    }

    #[tokio::test]
    async fn missing_headers_are_rejected() {
        let orders = InMemoryOrderReconciler::new();
        let cmd = HandlePaymentNotificationCommand {
            payload: b"{}".to_vec(),
            headers: HeaderMap::new(),
        };

        let result = handler(&orders).handle(cmd).await;

        assert!(matches!(
            result,
            Err(NotificationError::Verification(WebhookError::MissingHeaders))
        ));
    }

    #[tokio::test]
    async fn verified_non_notification_body_is_invalid() {
        let orders = InMemoryOrderReconciler::new();
        let cmd = signed_command(&verifier(), serde_json::json!("COMPLETED"));

        let result = handler(&orders).handle(cmd).await;

        assert!(matches!(result, Err(NotificationError::InvalidNotification(_))));
    }

    #[tokio::test]
    async fn notification_without_status_is_ignored() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
        let cmd = signed_command(&verifier(), serde_json::json!({ "merchantOrderId": "1042" }));

        let result = handler(&orders).handle(cmd).await.unwrap();

        assert_eq!(result.as_str(), "ignored");
        assert!(!orders.order("1042").unwrap().paid);
    }

    #[tokio::test]
    async fn zero_order_reference_means_no_order() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["0"]);

        for reference in [serde_json::json!("0"), serde_json::json!(0)] {
            let cmd = signed_command(
                &verifier(),
                serde_json::json!({
                    "transactionStatus": "COMPLETED",
                    "merchantOrderId": reference
                }),
            );

            let result = handler(&orders).handle(cmd).await.unwrap();

            assert_eq!(result, HandlePaymentNotificationResult::NoOrder);
        }
        assert!(!orders.order("0").unwrap().paid);
    }

    #[tokio::test]
    async fn store_failure_is_retryable() {
        let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
        orders.fail_next(DomainError::new(ErrorCode::StoreUnavailable, "offline"));
        let cmd = signed_command(
            &verifier(),
            serde_json::json!({ "transactionStatus": "COMPLETED", "merchantOrderId": "1042" }),
        );

        let err = handler(&orders).handle(cmd).await.unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(err, NotificationError::Reconciliation(_)));
    }
}
