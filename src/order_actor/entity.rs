use crate::actor_framework::Entity;
use crate::domain::{PlacedOrder, PlacedOrderCreate};

impl Entity for PlacedOrder {
    type Id = String;
    type CreatePayload = PlacedOrderCreate;

    /// Creates a placed order under the number drawn by the store.
    ///
    /// # Arguments
    /// * `id` - Order number in `NNN-NNN` form
    /// * `params` - Order contents, customer data, payment method and delivery date
    fn from_create(id: String, params: PlacedOrderCreate) -> Result<Self, String> {
        Ok(PlacedOrder::new(id, params))
    }
}
