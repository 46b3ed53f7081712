//! Gateway mode configuration

use serde::Deserialize;

/// Gateway configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Which Zenkipay environment the store is connected to
    #[serde(default)]
    pub mode: GatewayMode,
}

/// Zenkipay environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Test,
    Live,
}

impl GatewayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayMode::Test => "test",
            GatewayMode::Live => "live",
        }
    }
}

impl GatewayConfig {
    /// Check if connected to the live environment
    pub fn is_live(&self) -> bool {
        self.mode == GatewayMode::Live
    }
}
