//! Payment notification domain.
//!
//! Describes what a verified Zenkipay notification says about a store order.

mod errors;
mod notification;

pub use errors::NotificationError;
pub use notification::{PaymentNotification, TransactionStatus};
