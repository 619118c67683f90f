//! # pay-razorpay
//!
//! Razorpay integration for pay-bridge.
//!
//! This crate provides:
//!
//! 1. **RazorpayOrderClient** - Orders API client
//!    - Implements `pay_core::OrderGateway`
//!    - HTTP basic auth with the key id/secret pair
//!    - Single attempt, bounded by a configurable timeout
//!
//! 2. **Payment signature verification**
//!    - `hex(HMAC-SHA256(key_secret, order_id|payment_id))`
//!    - Constant-time comparison
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_razorpay::{RazorpayConfig, RazorpayOrderClient, PaymentSignatureVerifier};
//! use pay_core::{OrderGateway, OrderRequest};
//!
//! let config = RazorpayConfig::from_env()?;
//! let verifier = PaymentSignatureVerifier::new(&config.key_secret);
//! let client = RazorpayOrderClient::new(config)?;
//!
//! let order = client.create_order(&OrderRequest::new(5000, "INR", "receipt#1")).await?;
//!
//! // In the callback endpoint:
//! verifier.verify(&payload)?;
//! ```

pub mod config;
pub mod orders;
pub mod signature;

// Re-exports
pub use config::RazorpayConfig;
pub use orders::RazorpayOrderClient;
pub use signature::{compute_payment_signature, verify_payment_signature, PaymentSignatureVerifier};
