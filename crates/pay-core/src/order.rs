//! # Order Types
//!
//! Order request, gateway order and client response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for creating an order at the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in the smallest currency unit (e.g. paise)
    pub amount: i64,

    /// ISO currency code
    pub currency: String,

    /// Merchant receipt reference
    pub receipt: String,

    /// Capture the payment as soon as it is authorized
    #[serde(default = "default_capture")]
    pub payment_capture: bool,
}

fn default_capture() -> bool {
    true
}

impl OrderRequest {
    /// Create an order request with capture-on-creation enabled
    pub fn new(amount: i64, currency: impl Into<String>, receipt: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            receipt: receipt.into(),
            payment_capture: true,
        }
    }

    /// Set the capture flag
    pub fn with_payment_capture(mut self, capture: bool) -> Self {
        self.payment_capture = capture;
        self
    }

    /// Replace only the fields the caller supplied
    pub fn apply(mut self, overrides: OrderOverrides) -> Self {
        if let Some(amount) = overrides.amount {
            self.amount = amount;
        }
        if let Some(currency) = overrides.currency {
            self.currency = currency;
        }
        if let Some(receipt) = overrides.receipt {
            self.receipt = receipt;
        }
        self
    }
}

/// Caller-supplied order parameters. Every field is optional; missing
/// fields fall back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderOverrides {
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub receipt: Option<String>,
}

impl OrderOverrides {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.currency.is_none() && self.receipt.is_none()
    }
}

/// An order as created by the payment gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway-assigned order ID
    pub id: String,

    /// Amount in the smallest currency unit
    pub amount: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,

    /// Gateway status (e.g. "created")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GatewayOrder {
    pub fn new(id: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            amount,
            currency: None,
            receipt: None,
            status: None,
            created_at: None,
        }
    }
}

/// Response returned to the web client after order creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Gateway order ID
    pub id: String,

    /// Amount in the smallest currency unit
    pub amount: i64,

    /// Publishable key for the client-side checkout
    pub key: String,
}

impl OrderResponse {
    /// Build the client response. The key always comes from configuration,
    /// never from the gateway payload.
    pub fn from_order(order: &GatewayOrder, key: impl Into<String>) -> Self {
        Self {
            id: order.id.clone(),
            amount: order.amount,
            key: key.into(),
        }
    }
}
