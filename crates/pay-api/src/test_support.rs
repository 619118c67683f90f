//! Fakes shared by the handler and route tests.

use crate::state::{AppConfig, AppState};
use async_trait::async_trait;
use pay_core::{GatewayOrder, OrderGateway, OrderRequest, PaymentError, PaymentResult};
use pay_razorpay::PaymentSignatureVerifier;
use std::sync::{Arc, Mutex};

pub const TEST_KEY_ID: &str = "rzp_test_publishable";
pub const TEST_SECRET: &str = "s3cr3t";

/// In-process gateway that records requests and returns a canned outcome
pub struct FakeGateway {
    outcome: Result<GatewayOrder, String>,
    pub requests: Mutex<Vec<OrderRequest>>,
}

impl FakeGateway {
    pub fn succeeding(order_id: &str) -> Self {
        let mut order = GatewayOrder::new(order_id, 5000);
        order.status = Some("created".to_string());
        Self::returning(order)
    }

    pub fn returning(order: GatewayOrder) -> Self {
        Self {
            outcome: Ok(order),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl OrderGateway for FakeGateway {
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<GatewayOrder> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(order) => Ok(order.clone()),
            Err(message) => Err(PaymentError::ProviderError {
                provider: "fake".to_string(),
                message: message.clone(),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

pub fn test_state(gateway: Arc<FakeGateway>) -> AppState {
    AppState::with_gateway(
        AppConfig::default(),
        gateway,
        TEST_KEY_ID,
        PaymentSignatureVerifier::new(TEST_SECRET),
    )
}
