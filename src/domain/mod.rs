//! Domain layer - webhook verification and payment notifications.

pub mod foundation;
pub mod payment;
pub mod webhook;
