//! In-memory order reconciler for development and tests.
//!
//! Tracks a set of store orders and their paid state. Supports:
//! - Seeding pending orders
//! - Error injection
//! - Inspecting recorded transaction ids

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{OrderReconciler, ReconcileOutcome};

/// Payment state of one tracked order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPayment {
    pub paid: bool,
    pub transaction_id: Option<String>,
}

#[derive(Default)]
struct State {
    orders: HashMap<String, OrderPayment>,
    next_error: Option<DomainError>,
}

/// In-memory [`OrderReconciler`].
///
/// # Example
///
/// ```ignore
/// let orders = InMemoryOrderReconciler::with_pending_orders(["1042"]);
/// orders.mark_paid("1042", Some("zk_ord_77")).await?;
/// assert!(orders.order("1042").unwrap().paid);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryOrderReconciler {
    inner: Arc<Mutex<State>>,
}

impl InMemoryOrderReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reconciler that knows the given unpaid orders.
    pub fn with_pending_orders<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let reconciler = Self::new();
        for id in ids {
            reconciler.add_pending_order(id);
        }
        reconciler
    }

    pub fn add_pending_order(&self, id: impl Into<String>) {
        self.lock().orders.insert(
            id.into(),
            OrderPayment {
                paid: false,
                transaction_id: None,
            },
        );
    }

    /// Makes the next `mark_paid` call fail with `error`.
    pub fn fail_next(&self, error: DomainError) {
        self.lock().next_error = Some(error);
    }

    /// Current payment state of an order.
    pub fn order(&self, id: &str) -> Option<OrderPayment> {
        self.lock().orders.get(id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A poisoned lock only means a test panicked mid-update
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl OrderReconciler for InMemoryOrderReconciler {
    async fn mark_paid(
        &self,
        merchant_order_id: &str,
        transaction_id: Option<&str>,
    ) -> Result<ReconcileOutcome, DomainError> {
        let mut state = self.lock();

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        let order = match state.orders.get_mut(merchant_order_id) {
            Some(order) => order,
            None => return Ok(ReconcileOutcome::OrderNotFound),
        };

        if order.paid {
            return Ok(ReconcileOutcome::AlreadyPaid);
        }

        order.paid = true;
        if let Some(transaction_id) = transaction_id {
            order.transaction_id = Some(transaction_id.to_string());
        }

        Ok(ReconcileOutcome::MarkedPaid)
    }
}
