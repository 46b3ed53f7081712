//! Webhook signing secret.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secrecy::{ExposeSecret, SecretVec};

use super::errors::WebhookError;

/// Marker some dashboards prepend to the base64 secret.
pub const SECRET_PREFIX: &str = "whsec_";

/// Decoded HMAC key for webhook signatures.
///
/// The raw bytes are zeroized on drop and never appear in `Debug` output.
pub struct WebhookSecret(SecretVec<u8>);

impl WebhookSecret {
    /// Parses the textual secret: strips [`SECRET_PREFIX`] if present, then
    /// base64-decodes the remainder.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::InvalidSecret` if the remainder is not valid
    /// standard base64.
    pub fn parse(secret: &str) -> Result<Self, WebhookError> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        let key = STANDARD
            .decode(encoded)
            .map_err(|e| WebhookError::InvalidSecret(e.to_string()))?;
        Ok(Self(SecretVec::new(key)))
    }

    /// Wraps an already-decoded key.
    pub fn from_raw(key: impl Into<Vec<u8>>) -> Self {
        Self(SecretVec::new(key.into()))
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookSecret([REDACTED])")
    }
}
