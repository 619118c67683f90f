//! # Order Gateway Trait
//!
//! Seam between the HTTP layer and the payment provider. The API only ever
//! talks to `dyn OrderGateway`, so tests substitute an in-process fake and
//! no network access is needed.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │        OrderGateway (trait)          │
//! │  ├── create_order()                  │
//! │  └── provider_name()                 │
//! └──────────────────────────────────────┘
//!                   ▲
//!          ┌────────┴────────┐
//!  ┌───────┴────────┐ ┌──────┴───────┐
//!  │RazorpayOrder   │ │  test fakes  │
//!  │    Client      │ │              │
//!  └────────────────┘ └──────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{GatewayOrder, OrderRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider capable of creating orders.
///
/// Implementations hold no per-request state; one instance is shared by
/// every request handler.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Create an order at the gateway.
    ///
    /// A single attempt is made. Any failure is returned as-is.
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<GatewayOrder>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedOrderGateway = Arc<dyn OrderGateway>;
