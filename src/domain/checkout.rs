use chrono::{DateTime, Utc};

use super::Order;

/// An order handed over by the order service and waiting for the customer
/// to fill in the checkout form.
#[derive(Debug, Clone)]
pub struct PendingCheckout {
    pub id: String,
    pub order: Order,
    pub opened_at: DateTime<Utc>,
}
