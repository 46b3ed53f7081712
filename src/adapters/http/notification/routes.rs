//! Axum router configuration for notification endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{handle_zenkipay_notification, health, NotificationAppState};

/// Create the webhook router.
///
/// Webhooks carry no user authentication; every delivery is authenticated
/// by its signature instead.
///
/// # Routes
/// - `POST /zenkipay` - Handle Zenkipay payment notifications
pub fn webhook_routes() -> Router<NotificationAppState> {
    Router::new().route("/zenkipay", post(handle_zenkipay_notification))
}

/// Create the complete notification module router.
///
/// # Routes
/// - `POST /webhooks/zenkipay`
/// - `GET /health`
pub fn notification_router() -> Router<NotificationAppState> {
    Router::new()
        .nest("/webhooks", webhook_routes())
        .route("/health", get(health))
}
