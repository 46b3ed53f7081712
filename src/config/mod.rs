//! Application configuration module
//!
//! Configuration is loaded from environment variables with the `ZENKIPAY`
//! prefix, using `config` and `dotenvy`. Nested values are separated by a
//! double underscore.
//!
//! # Example
//!
//! ```no_run
//! use zenkipay_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod gateway;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use gateway::{GatewayConfig, GatewayMode};
pub use server::{Environment, ServerConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Delivery signing configuration
    pub webhook: WebhookConfig,

    /// Zenkipay environment
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `ZENKIPAY__*` variables:
    ///
    /// - `ZENKIPAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ZENKIPAY__WEBHOOK__SIGNING_SECRET=whsec_...` -> `webhook.signing_secret`
    /// - `ZENKIPAY__GATEWAY__MODE=live` -> `gateway.mode`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ZENKIPAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.webhook.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// True when a non-production deployment is wired to live payments.
    pub fn is_live_outside_production(&self) -> bool {
        self.gateway.is_live() && !self.is_production()
    }
}
