use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, PendingCheckout};

impl Entity for PendingCheckout {
    type Id = String;
    type CreatePayload = Order;

    fn from_create(id: String, order: Order) -> Result<Self, String> {
        Ok(Self {
            id,
            order,
            opened_at: Utc::now(),
        })
    }
}
