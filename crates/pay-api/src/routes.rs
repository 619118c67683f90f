//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::cors;
use crate::handlers;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - POST /create-order - Create a gateway order
/// - POST /payment-callback - Verify a payment callback
/// - GET  /health - Health check
///
/// Every route passes through the CORS middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/create-order", post(handlers::create_order))
        .route("/payment-callback", post(handlers::payment_callback))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors::cors)),
        )
        .with_state(state)
}
