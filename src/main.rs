mod actor_framework;
mod app_system;
mod checkout_actor;
mod clients;
mod config;
mod delivery;
mod domain;
mod error;
mod filter;
mod notification_actor;
mod order_actor;
mod summary;
mod web;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info};
use crate::app_system::{setup_tracing, CheckoutSystem};
use crate::config::Config;
use crate::web::AppState;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load().map_err(|e| e.to_string())?;
    info!(address = %config.address(), shop_url = %config.shop_url, cutoff = %config.cutoff, "Starting grocery checkout");

    // Start the checkout and order stores
    let system = CheckoutSystem::new(&config);
    let state = AppState::new(config, &system);

    if let Err(e) = web::serve(state).await {
        error!(error = %e, "Server failed");
        system.shutdown().await.map_err(|e| e.to_string())?;
        return Err(e.to_string());
    }

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
