//! HTTP adapter for payment notifications.
//!
//! - `POST /webhooks/zenkipay` - Handle Zenkipay payment notifications
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, NotificationAckResponse};
pub use handlers::{NotificationApiError, NotificationAppState};
pub use routes::{notification_router, webhook_routes};
