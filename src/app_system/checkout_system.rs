use std::time::Duration;

use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceActor;
use crate::checkout_actor::new_session_id;
use crate::clients::{CheckoutClient, NotificationClient, OrderClient};
use crate::config::Config;
use crate::domain::{Email, PendingCheckout, PlacedOrder};
use crate::error::CheckoutError;
use crate::notification_actor::new_email_id;
use crate::order_actor::random_order_number;

const SWEEP_EVERY: Duration = Duration::from_secs(60);

/// The application system that owns the checkout, order and outbox stores.
///
/// Responsible for starting the store actors, handing out their clients,
/// expiring stale checkouts, and waiting for the actors on shutdown.
pub struct CheckoutSystem {
    pub checkout_client: CheckoutClient,
    pub order_client: OrderClient,
    pub notification_client: NotificationClient,
    sweeper: tokio::task::JoinHandle<()>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CheckoutSystem {
    #[instrument(name = "checkout_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        info!("Starting checkout system");

        // 1. Pending checkouts, keyed by session id
        let (checkout_actor, checkout_resource_client) =
            ResourceActor::<PendingCheckout>::new(32, new_session_id);
        let checkout_client = CheckoutClient::new(checkout_resource_client);
        let checkout_handle = tokio::spawn(checkout_actor.run());

        // 2. Outbox, keyed by message id
        let (notification_actor, notification_resource_client) =
            ResourceActor::<Email>::new(32, new_email_id);
        let notification_client = NotificationClient::new(notification_resource_client, config.shop_email.clone());
        let notification_handle = tokio::spawn(notification_actor.run());

        // 3. Placed orders, keyed by order number (depends on the outbox)
        let (order_actor, order_resource_client) =
            ResourceActor::<PlacedOrder>::new(32, random_order_number);
        let order_client = OrderClient::new(order_resource_client, notification_client.clone(), config.cutoff);
        let order_handle = tokio::spawn(order_actor.run());

        // 4. Checkout expiry
        let sweeper = tokio::spawn(sweep_expired_checkouts(checkout_client.clone(), config.checkout_ttl));

        info!("Checkout system started");

        Self {
            checkout_client,
            order_client,
            notification_client,
            sweeper,
            handles: vec![checkout_handle, notification_handle, order_handle],
        }
    }

    /// Drops the system's clients and waits for the store actors to finish.
    ///
    /// The actors stop once every clone of their client is gone, so the web
    /// server has to be shut down first.
    pub async fn shutdown(self) -> Result<(), CheckoutError> {
        info!("Shutting down checkout system...");

        // The sweeper holds a checkout client; it has to go first.
        self.sweeper.abort();
        let _ = self.sweeper.await;

        drop(self.checkout_client);
        drop(self.order_client);
        drop(self.notification_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(CheckoutError::Shutdown(e.to_string()));
            }
        }

        info!("Checkout system shutdown complete.");
        Ok(())
    }
}

async fn sweep_expired_checkouts(client: CheckoutClient, max_age: chrono::Duration) {
    let mut ticker = tokio::time::interval(SWEEP_EVERY);
    loop {
        ticker.tick().await;
        match client.expire_checkouts(max_age).await {
            Ok(0) => {}
            Ok(removed) => info!(removed, "Expired checkouts removed"),
            Err(e) => {
                warn!(error = %e, "Checkout store gone, stopping expiry");
                break;
            }
        }
    }
}
