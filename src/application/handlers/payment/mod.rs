//! Payment handlers.
//!
//! ## Commands
//! - Processing Zenkipay payment notification webhooks

mod handle_payment_notification;

pub use handle_payment_notification::{
    HandlePaymentNotificationCommand, HandlePaymentNotificationHandler,
    HandlePaymentNotificationResult,
};
