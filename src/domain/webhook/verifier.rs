//! Webhook delivery verification.
//!
//! Authenticates inbound payment notifications using HMAC-SHA256 over the
//! message id, timestamp and raw body, and rejects deliveries outside the
//! replay window.

use serde_json::Value;

use super::errors::WebhookError;
use super::headers::{DeliveryHeaders, HeaderSource};
use super::secret::WebhookSecret;
use super::signature::{self, candidates, compute_signature};

/// Allowed clock skew between sender and receiver, in either direction.
pub const TOLERANCE_SECS: i64 = 5 * 60;

/// Verifier for signed webhook deliveries.
///
/// Immutable after construction; share it across requests behind an `Arc`.
#[derive(Debug)]
pub struct WebhookVerifier {
    secret: WebhookSecret,
}

impl WebhookVerifier {
    /// Creates a verifier from the textual secret (`whsec_` prefix optional).
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidSecret` if the secret is not base64.
    pub fn new(secret: &str) -> Result<Self, WebhookError> {
        Ok(Self {
            secret: WebhookSecret::parse(secret)?,
        })
    }

    /// Creates a verifier from an already-decoded key.
    pub fn from_raw(key: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: WebhookSecret::from_raw(key),
        }
    }

    /// Verifies a delivery against the current time and parses its body.
    ///
    /// # Verification Steps
    ///
    /// 1. Resolve the `svix-*` or `webhook-*` header trio
    /// 2. Validate the timestamp is within [`TOLERANCE_SECS`]
    /// 3. Compute the expected `v1` signature
    /// 4. Compare against every `v1` candidate in constant time
    /// 5. Parse the body as JSON
    ///
    /// # Errors
    ///
    /// - `MissingHeaders` - Neither header family is complete
    /// - `InvalidTimestamp` - Timestamp is not a digit-only string
    /// - `TimestampTooOld` / `TimestampTooNew` - Outside the replay window
    /// - `NoMatchingSignature` - No `v1` candidate matched
    /// - `MalformedPayload` - Body is not valid JSON
    pub fn verify<H: HeaderSource + ?Sized>(
        &self,
        payload: &[u8],
        headers: &H,
    ) -> Result<Value, WebhookError> {
        self.verify_at(payload, headers, chrono::Utc::now().timestamp())
    }

    /// Same as [`verify`](Self::verify) with an explicit "now" in Unix seconds.
    pub fn verify_at<H: HeaderSource + ?Sized>(
        &self,
        payload: &[u8],
        headers: &H,
        now: i64,
    ) -> Result<Value, WebhookError> {
        let delivery = DeliveryHeaders::resolve(headers)?;
        self.verify_delivery_at(payload, &delivery, now)
    }

    /// Verifies against headers the caller already resolved.
    pub fn verify_delivery(
        &self,
        payload: &[u8],
        delivery: &DeliveryHeaders<'_>,
    ) -> Result<Value, WebhookError> {
        self.verify_delivery_at(payload, delivery, chrono::Utc::now().timestamp())
    }

    fn verify_delivery_at(
        &self,
        payload: &[u8],
        delivery: &DeliveryHeaders<'_>,
        now: i64,
    ) -> Result<Value, WebhookError> {
        let timestamp = validate_timestamp(delivery.timestamp, now)?;

        // Signed over the normalized value, so "0017..." and "17..." agree
        let expected = compute_signature(
            self.secret.expose(),
            delivery.id,
            &timestamp.to_string(),
            payload,
        )?;

        let matched = candidates(delivery.signature)
            .filter(|candidate| candidate.is_supported())
            .any(|candidate| candidate.matches(&expected));

        if !matched {
            return Err(WebhookError::NoMatchingSignature);
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::MalformedPayload(e.to_string()))
    }

    /// Signs a message, returning the versioned signature (`v1,<base64>`).
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidTimestamp` unless `timestamp` is a
    /// non-empty digit-only string.
    pub fn sign(&self, msg_id: &str, timestamp: &str, payload: &[u8]) -> Result<String, WebhookError> {
        let signature = compute_signature(self.secret.expose(), msg_id, timestamp, payload)?;
        Ok(signature::versioned(&signature))
    }
}

/// Parses the timestamp header and checks it against the replay window.
///
/// Uses the same digit-only rule as signing. Both boundaries are inclusive.
fn validate_timestamp(header: &str, now: i64) -> Result<i64, WebhookError> {
    if !signature::is_valid_timestamp(header) {
        return Err(WebhookError::InvalidTimestamp);
    }
    let timestamp: i64 = header.parse().map_err(|_| WebhookError::InvalidTimestamp)?;

    if timestamp < now - TOLERANCE_SECS {
        return Err(WebhookError::TimestampTooOld);
    }
    if timestamp > now + TOLERANCE_SECS {
        return Err(WebhookError::TimestampTooNew);
    }

    Ok(timestamp)
}
