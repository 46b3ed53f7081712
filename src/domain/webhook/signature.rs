//! Signature computation and the `v1` signature header grammar.
//!
//! The signed content is `"{id}.{timestamp}.{payload}"`, MAC'd with
//! HMAC-SHA256 and sent as `v1,<base64 digest>`. A signature header carries
//! one or more space-separated `<version>,<signature>` candidates.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// The only signature scheme this crate produces and accepts.
pub const SIGNATURE_VERSION: &str = "v1";

/// Returns true if `timestamp` is a non-empty string of ASCII digits.
///
/// Signs, decimal points and whitespace are all rejected.
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    !timestamp.is_empty() && timestamp.bytes().all(|b| b.is_ascii_digit())
}

/// Computes the base64 signature (without version tag) for one delivery.
///
/// # Errors
///
/// Returns `WebhookError::InvalidTimestamp` if `timestamp` fails
/// [`is_valid_timestamp`].
pub fn compute_signature(
    key: &[u8],
    msg_id: &str,
    timestamp: &str,
    payload: &[u8],
) -> Result<String, WebhookError> {
    if !is_valid_timestamp(timestamp) {
        return Err(WebhookError::InvalidTimestamp);
    }

    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| WebhookError::InvalidSecret(e.to_string()))?;
    mac.update(msg_id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);

    // base64 of the raw digest; identical to packing the hex digest back to binary
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Formats a signature with its version tag, e.g. `v1,g0hM...`.
pub fn versioned(signature: &str) -> String {
    format!("{},{}", SIGNATURE_VERSION, signature)
}

/// One `<version>,<signature>` token from a signature header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureCandidate<'a> {
    pub version: &'a str,
    pub signature: &'a str,
}

impl<'a> SignatureCandidate<'a> {
    /// Splits a token on its first comma. Tokens without a comma yield `None`.
    pub fn parse(token: &'a str) -> Option<Self> {
        token
            .split_once(',')
            .map(|(version, signature)| Self { version, signature })
    }

    /// Returns true for the `v1` scheme. Other versions are skipped, not errors.
    pub fn is_supported(&self) -> bool {
        self.version == SIGNATURE_VERSION
    }

    /// Constant-time comparison against the expected signature.
    pub fn matches(&self, expected: &str) -> bool {
        constant_time_compare(self.signature.as_bytes(), expected.as_bytes())
    }
}

/// Iterates the candidates of a space-separated signature header.
pub fn candidates(header: &str) -> impl Iterator<Item = SignatureCandidate<'_>> {
    header.split(' ').filter_map(SignatureCandidate::parse)
}

/// Performs constant-time comparison of two byte slices.
///
/// Length is not secret: mismatched lengths return early.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
