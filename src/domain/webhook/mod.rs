//! Webhook signature verification.
//!
//! Zenkipay delivers payment notifications as signed webhooks. This module
//! authenticates a delivery before anything acts on its contents:
//!
//! - [`WebhookVerifier`] checks headers, freshness and the `v1` signature
//! - [`WebhookError`] enumerates every rejection reason
//!
//! The verifier performs no I/O and never logs; callers own logging and the
//! mapping to HTTP responses.

mod errors;
mod headers;
mod secret;
mod signature;
mod verifier;

pub use errors::WebhookError;
pub use headers::{
    DeliveryHeaders, HeaderFamily, HeaderSource, BRANDED_HEADERS, GENERIC_HEADERS,
};
pub use secret::{WebhookSecret, SECRET_PREFIX};
pub use signature::{candidates, is_valid_timestamp, SignatureCandidate, SIGNATURE_VERSION};
pub use verifier::{WebhookVerifier, TOLERANCE_SECS};
