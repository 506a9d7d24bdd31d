//! HTTP surface of the checkout: routes, cookies, form parsing and pages.

pub mod cookies;
pub mod form;
pub mod handlers;
pub mod page;
pub mod state;

pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const CART_PATH: &str = "/koszyk/";
pub const CHECKOUT_PATH: &str = "/zamowienie/";
const CONFIRMATION_ROUTE: &str = "/podsumowanie/:number";

pub fn confirmation_path(number: &str) -> String {
    format!("/podsumowanie/{number}")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CART_PATH, post(handlers::open_checkout))
        .route(
            CHECKOUT_PATH,
            get(handlers::checkout_page).post(handlers::submit_checkout),
        )
        .route(CONFIRMATION_ROUTE, get(handlers::order_confirmation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the checkout until Ctrl+C or SIGTERM.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
