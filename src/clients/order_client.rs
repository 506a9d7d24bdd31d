use chrono::{NaiveDateTime, NaiveTime};
use tracing::{debug, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::delivery::delivery_date;
use crate::domain::{CustomerInfo, Order, PaymentMethod, PlacedOrder, PlacedOrderCreate};
use crate::error::CheckoutError;
use super::NotificationClient;

/// Client for finalizing orders.
///
/// Works out the delivery date before handing the order to the store, which
/// assigns the order number, then queues the notification emails.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<PlacedOrder>,
    notifications: NotificationClient,
    cutoff: NaiveTime,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<PlacedOrder>, notifications: NotificationClient, cutoff: NaiveTime) -> Self {
        Self { inner, notifications, cutoff }
    }

    #[instrument(skip(self, order, customer), fields(items = order.items().len(), payment = %payment_method))]
    pub async fn place_order(
        &self,
        order: Order,
        customer: CustomerInfo,
        payment_method: PaymentMethod,
        placed_at: NaiveDateTime,
    ) -> Result<String, CheckoutError> {
        info!("Processing place_order request (Client Side)");

        let delivery_date = delivery_date(placed_at, !order.has_next_day_items(), self.cutoff);
        debug!(%delivery_date, "Delivery date set");

        let payload = PlacedOrderCreate {
            order,
            customer,
            payment_method,
            delivery_date,
        };
        let number = self.inner.create(payload.clone()).await?;
        let placed = PlacedOrder::new(number.clone(), payload);

        info!(order_number = %number, city = %placed.customer.city, %delivery_date, "New order placed");
        self.send_notifications(&placed).await;
        Ok(number)
    }

    /// A stored order stays placed even if its emails cannot be queued.
    async fn send_notifications(&self, placed: &PlacedOrder) {
        if let Err(e) = self.notifications.notify_shop(placed).await {
            warn!(error = %e, "Shop notification failed");
        }
        if let Err(e) = self.notifications.confirm_to_customer(placed).await {
            warn!(error = %e, "Customer confirmation failed");
        }
    }
}

impl_client_methods!(OrderClient, PlacedOrder, order);
