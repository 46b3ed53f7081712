//! Webhook verification error types.
//!
//! Every failure of [`WebhookVerifier`](super::WebhookVerifier) is a distinct
//! variant so callers can log and map them without string matching.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised while signing or verifying a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// Neither the `svix-*` nor the `webhook-*` header trio is fully present.
    #[error("Missing required headers")]
    MissingHeaders,

    /// Delivery timestamp is older than the tolerance window.
    #[error("Message timestamp too old")]
    TimestampTooOld,

    /// Delivery timestamp is further in the future than the tolerance window.
    #[error("Message timestamp too new")]
    TimestampTooNew,

    /// Timestamp is not a non-negative base-10 integer string.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// None of the `v1` candidate signatures matched.
    #[error("No matching signature found")]
    NoMatchingSignature,

    /// Signature matched but the body is not valid JSON.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Signing secret could not be decoded.
    #[error("Invalid signing secret: {0}")]
    InvalidSecret(String),
}

impl WebhookError {
    /// Stable machine-readable code for API responses and log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            WebhookError::MissingHeaders => "MISSING_HEADERS",
            WebhookError::TimestampTooOld => "TIMESTAMP_TOO_OLD",
            WebhookError::TimestampTooNew => "TIMESTAMP_TOO_NEW",
            WebhookError::InvalidTimestamp => "INVALID_TIMESTAMP",
            WebhookError::NoMatchingSignature => "NO_MATCHING_SIGNATURE",
            WebhookError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            WebhookError::InvalidSecret(_) => "INVALID_SECRET",
        }
    }

    /// Maps the error to the HTTP status returned to the sender.
    ///
    /// Rejected deliveries get `400 Bad Request`. A bad secret is our own
    /// misconfiguration, so it surfaces as `500`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidSecret(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
