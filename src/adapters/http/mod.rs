//! HTTP adapters - REST API implementations.

pub mod notification;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use notification::{notification_router, NotificationAppState};

/// Builds the full application router with request tracing and timeouts.
pub fn app_router(state: NotificationAppState, server: &ServerConfig) -> Router {
    notification_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}
