//! Webhook signing configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::webhook::{WebhookError, WebhookSecret, WebhookVerifier};

use super::error::ValidationError;

/// Webhook configuration (Zenkipay delivery signing)
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Signing secret shown in the Zenkipay dashboard, usually `whsec_...`
    pub signing_secret: SecretString,
}

impl WebhookConfig {
    /// Build a verifier from the configured secret.
    pub fn verifier(&self) -> Result<WebhookVerifier, WebhookError> {
        WebhookVerifier::new(self.signing_secret.expose_secret())
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.signing_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK__SIGNING_SECRET"));
        }

        WebhookSecret::parse(secret)
            .map_err(|e| ValidationError::InvalidWebhookSecret(e.to_string()))?;

        Ok(())
    }
}
