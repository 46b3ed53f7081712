//! Log-only order reconciler.
//!
//! Emits one structured `info` event per confirmed payment and reports the
//! order as marked paid. Used by the standalone binary when the store applies
//! payment confirmations out-of-band from the log stream.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{OrderReconciler, ReconcileOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOrderReconciler;

#[async_trait]
impl OrderReconciler for LoggingOrderReconciler {
    async fn mark_paid(
        &self,
        merchant_order_id: &str,
        transaction_id: Option<&str>,
    ) -> Result<ReconcileOutcome, DomainError> {
        tracing::info!(
            merchant_order_id,
            transaction_id = transaction_id.unwrap_or("-"),
            "Payment confirmed for order"
        );
        Ok(ReconcileOutcome::MarkedPaid)
    }
}
