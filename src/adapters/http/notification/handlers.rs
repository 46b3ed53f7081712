//! HTTP handlers for Zenkipay payment notifications.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{HandlePaymentNotificationCommand, HandlePaymentNotificationHandler};
use crate::domain::payment::NotificationError;
use crate::domain::webhook::WebhookVerifier;
use crate::ports::OrderReconciler;

use super::dto::{ErrorResponse, NotificationAckResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the notification endpoint.
#[derive(Clone)]
pub struct NotificationAppState {
    pub verifier: Arc<WebhookVerifier>,
    pub order_reconciler: Arc<dyn OrderReconciler>,
}

impl NotificationAppState {
    pub fn new(verifier: Arc<WebhookVerifier>, order_reconciler: Arc<dyn OrderReconciler>) -> Self {
        Self {
            verifier,
            order_reconciler,
        }
    }

    /// Create the command handler from the shared state.
    pub fn notification_handler(&self) -> HandlePaymentNotificationHandler {
        HandlePaymentNotificationHandler::new(
            self.verifier.clone(),
            self.order_reconciler.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /webhooks/zenkipay - Handle a Zenkipay payment notification
///
/// The body is taken as raw bytes: the signature covers the exact bytes sent.
pub async fn handle_zenkipay_notification(
    State(state): State<NotificationAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, NotificationApiError> {
    let cmd = HandlePaymentNotificationCommand {
        payload: body.to_vec(),
        headers,
    };

    let result = state.notification_handler().handle(cmd).await?;

    Ok((StatusCode::OK, Json(NotificationAckResponse::from(&result))))
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts notification errors to HTTP responses.
#[derive(Debug)]
pub struct NotificationApiError(NotificationError);

impl From<NotificationError> for NotificationApiError {
    fn from(err: NotificationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for NotificationApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();

        // Store and configuration failures are not described to the sender
        let message = if status.is_server_error() {
            "Internal error".to_string()
        } else {
            self.0.to_string()
        };

        let error = ErrorResponse::new(self.0.error_code(), message);
        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::webhook::WebhookError;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn verification_error_maps_to_bad_request() {
        let err = NotificationApiError::from(NotificationError::from(
            WebhookError::TimestampTooOld,
        ));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error_code"], "TIMESTAMP_TOO_OLD");
        assert_eq!(json["message"], "Message timestamp too old");
    }

    #[tokio::test]
    async fn reconciliation_error_hides_details() {
        let err = NotificationApiError::from(NotificationError::from(DomainError::new(
            ErrorCode::StoreUnavailable,
            "connection refused to db-primary:5432",
        )));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error_code"], "RECONCILIATION_FAILED");
        assert_eq!(json["message"], "Internal error");
    }
}
