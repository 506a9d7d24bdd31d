use std::sync::Arc;

use crate::app_system::CheckoutSystem;
use crate::clients::{CheckoutClient, OrderClient};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub checkout_client: CheckoutClient,
    pub order_client: OrderClient,
}

impl AppState {
    pub fn new(config: Config, system: &CheckoutSystem) -> Self {
        Self {
            config: Arc::new(config),
            checkout_client: system.checkout_client.clone(),
            order_client: system.order_client.clone(),
        }
    }
}
