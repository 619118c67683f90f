//! # pay-core
//!
//! Core types and traits for the pay-bridge payment backend.
//!
//! This crate provides:
//! - `OrderGateway` trait for implementing payment providers
//! - `OrderRequest`, `GatewayOrder` and `OrderResponse` for order creation
//! - `CallbackPayload` for payment confirmation callbacks
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CallbackPayload, OrderGateway, OrderRequest, OrderResponse};
//!
//! // Create an order
//! let order = gateway.create_order(&OrderRequest::new(5000, "INR", "receipt#1")).await?;
//! let response = OrderResponse::from_order(&order, &key_id);
//!
//! // Later, parse the gateway callback
//! let payload = CallbackPayload::from_form(&body)?;
//! ```

pub mod callback;
pub mod error;
pub mod gateway;
pub mod order;

// Re-exports for convenience
pub use callback::CallbackPayload;
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedOrderGateway, OrderGateway};
pub use order::{GatewayOrder, OrderOverrides, OrderRequest, OrderResponse};
