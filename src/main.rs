use std::sync::Arc;

use tokio::net::TcpListener;

use zenkipay_gateway::adapters::http::{app_router, NotificationAppState};
use zenkipay_gateway::adapters::orders::LoggingOrderReconciler;
use zenkipay_gateway::config::AppConfig;
use zenkipay_gateway::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    if config.is_live_outside_production() {
        tracing::warn!(
            environment = ?config.server.environment,
            "live gateway mode outside production: real payments will be reconciled"
        );
    }

    let verifier = Arc::new(config.webhook.verifier()?);
    let state = NotificationAppState::new(verifier, Arc::new(LoggingOrderReconciler));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        mode = config.gateway.mode.as_str(),
        environment = ?config.server.environment,
        "zenkipay gateway listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
