//! OrderReconciler port - Interface to the host store's orders.
//!
//! The store platform owns orders and their payment state. After a verified
//! COMPLETED notification, the application asks the store to mark the
//! referenced order as paid through this port.
//!
//! ## Idempotency
//!
//! The processor may deliver the same notification more than once.
//! Implementations must treat an already-paid order as success
//! ([`ReconcileOutcome::AlreadyPaid`]) rather than an error.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// What the store did with a payment confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Order moved to the paid state.
    MarkedPaid,
    /// Order was already paid; nothing changed.
    AlreadyPaid,
    /// The store has no order with this id.
    OrderNotFound,
}

/// Port for marking store orders as paid.
#[async_trait]
pub trait OrderReconciler: Send + Sync {
    /// Marks `merchant_order_id` as paid, recording `transaction_id` on its
    /// payment when present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` only for store failures; unknown and already-paid
    /// orders are reported through [`ReconcileOutcome`].
    async fn mark_paid(
        &self,
        merchant_order_id: &str,
        transaction_id: Option<&str>,
    ) -> Result<ReconcileOutcome, DomainError>;
}
