//! Ports - interfaces the application needs from the host platform.

mod order_reconciler;

pub use order_reconciler::{OrderReconciler, ReconcileOutcome};
