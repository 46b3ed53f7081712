//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum endpoint receiving Zenkipay webhooks
//! - `orders` - `OrderReconciler` implementations

pub mod http;
pub mod orders;
