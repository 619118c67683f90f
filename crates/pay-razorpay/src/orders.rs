//! # Razorpay Orders
//!
//! Implementation of the Razorpay Orders API (`POST /v1/orders`).
//! An order must exist before the web client can open Razorpay Checkout.

use crate::config::RazorpayConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pay_core::{GatewayOrder, OrderGateway, OrderRequest, PaymentError, PaymentResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "razorpay";

/// Razorpay order client
///
/// Holds no per-request state; safe to share behind an `Arc`.
pub struct RazorpayOrderClient {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayOrderClient {
    /// Create a new client. Every call is bounded by `config.timeout`.
    pub fn new(config: RazorpayConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl OrderGateway for RazorpayOrderClient {
    #[instrument(skip(self, request), fields(amount = request.amount, currency = %request.currency))]
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<GatewayOrder> {
        let body = RazorpayCreateOrder {
            amount: request.amount,
            currency: &request.currency,
            receipt: &request.receipt,
            payment_capture: u8::from(request.payment_capture),
        };

        debug!("Creating Razorpay order: receipt={}", request.receipt);

        let url = format!("{}/v1/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.description,
                });
            }

            return Err(PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let order: RazorpayOrderResponse = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        info!(
            "Created Razorpay order: id={}, amount={}, status={}",
            order.id, order.amount, order.status
        );

        Ok(GatewayOrder {
            id: order.id,
            amount: order.amount,
            currency: Some(order.currency),
            receipt: order.receipt,
            status: Some(order.status),
            created_at: order
                .created_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayCreateOrder<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    payment_capture: u8,
}

#[derive(Debug, Deserialize)]
struct RazorpayOrderResponse {
    id: String,
    amount: i64,
    currency: String,
    #[serde(default)]
    receipt: Option<String>,
    status: String,
    #[serde(default)]
    created_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    description: String,
}
