//! # pay-api
//!
//! HTTP API layer for pay-bridge.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Order creation against the configured payment gateway
//! - Payment callback signature verification
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-order` | Create a gateway order |
//! | POST | `/payment-callback` | Verify a payment callback |

pub mod cors;
pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use routes::create_router;
pub use state::{AppConfig, AppState, OrderDefaults};
