use chrono::{Duration, Utc};
use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, PendingCheckout};
use crate::error::CheckoutError;

/// Client for the store of orders waiting at the checkout page.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: ResourceClient<PendingCheckout>,
}

impl_basic_client!(CheckoutClient, PendingCheckout, checkout);

impl CheckoutClient {
    /// Stores a computed order and returns the session id it is reachable under.
    #[instrument(skip(self, order), fields(items = order.items().len()))]
    pub async fn open_checkout(&self, order: Order) -> Result<String, CheckoutError> {
        debug!("Sending request");
        let id = self.inner.create(order).await?;
        info!(session = %id, "Checkout opened");
        Ok(id)
    }

    /// Removes the checkout and returns it. Of several concurrent callers only
    /// one gets `Some`.
    #[instrument(skip(self))]
    pub async fn take_checkout(&self, id: String) -> Result<Option<PendingCheckout>, CheckoutError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(checkout) => Ok(Some(checkout)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Drops the checkout if it is still open.
    pub async fn close_checkout(&self, id: String) -> Result<(), CheckoutError> {
        if self.take_checkout(id).await?.is_some() {
            info!("Checkout closed");
        }
        Ok(())
    }

    /// Drops checkouts opened more than `max_age` ago and returns how many.
    #[instrument(skip(self))]
    pub async fn expire_checkouts(&self, max_age: Duration) -> Result<usize, CheckoutError> {
        debug!("Sending request");
        let oldest = Utc::now() - max_age;
        Ok(self.inner.retain(move |checkout: &PendingCheckout| checkout.opened_at > oldest).await?)
    }
}
