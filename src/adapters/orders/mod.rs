//! Order adapters - implementations of the `OrderReconciler` port.
//!
//! - `InMemoryOrderReconciler` - Tracks orders in memory (development/testing)
//! - `LoggingOrderReconciler` - Logs confirmations for out-of-band reconciliation

mod in_memory_reconciler;
mod logging_reconciler;

pub use in_memory_reconciler::{InMemoryOrderReconciler, OrderPayment};
pub use logging_reconciler::LoggingOrderReconciler;
