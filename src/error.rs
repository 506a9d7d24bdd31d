use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] FrameworkError),
    #[error("Customer data could not be encoded: {0}")]
    CustomerEncoding(#[from] serde_json::Error),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = match self {
            CheckoutError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            CheckoutError::ActorCommunication(_)
            | CheckoutError::CustomerEncoding(_)
            | CheckoutError::Shutdown(_) => {
                error!(error = %self, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
