//! Errors from payment notification processing.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::webhook::WebhookError;

/// Errors that occur while handling a payment notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Delivery failed authentication or freshness checks.
    #[error(transparent)]
    Verification(#[from] WebhookError),

    /// Verified body is not a payment notification.
    #[error("Invalid notification: {0}")]
    InvalidNotification(String),

    /// The store could not record the payment.
    #[error("Reconciliation failed: {0}")]
    Reconciliation(#[from] DomainError),
}

impl NotificationError {
    /// Returns true if the sender should redeliver this notification.
    ///
    /// Only store-side failures are retryable; a rejected delivery will be
    /// rejected again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, NotificationError::Reconciliation(_))
    }

    /// Maps the error to an HTTP status code.
    ///
    /// - 4xx: the delivery is rejected and must cause no side effects
    /// - 5xx: the sender's redelivery policy retries later
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::Verification(err) => err.status_code(),
            NotificationError::InvalidNotification(_) => StatusCode::BAD_REQUEST,
            NotificationError::Reconciliation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code.
    pub fn error_code(&self) -> &'static str {
        match self {
            NotificationError::Verification(err) => err.error_code(),
            NotificationError::InvalidNotification(_) => "INVALID_NOTIFICATION",
            NotificationError::Reconciliation(_) => "RECONCILIATION_FAILED",
        }
    }
}
