//! # Request Handlers
//!
//! Axum request handlers for the payment API.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use pay_core::{CallbackPayload, OrderOverrides, OrderResponse, PaymentError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Upper bound on a callback body. Real callbacks are a few hundred bytes.
pub const MAX_CALLBACK_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Verified callback, echoed back to the client
#[derive(Debug, Serialize)]
pub struct PaymentCallbackResponse {
    #[serde(rename = "paymentData")]
    pub payment_data: CallbackPayload,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(err: PaymentError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pay-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a gateway order.
///
/// Never fails on account of the body: only a JSON body (by
/// `Content-Type`) is read, and only its `amount`, `currency` and `receipt`
/// fields override the configured defaults. Anything else is ignored.
#[instrument(skip(state, headers, body))]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<OrderResponse>, ApiError> {
    let overrides = order_overrides(&headers, &body);
    if overrides.is_empty() {
        debug!("Using configured order defaults");
    }

    let request = state.order_request(overrides);

    info!(
        "Creating order: provider={}, amount={}, currency={}, receipt={}",
        state.gateway.provider_name(),
        request.amount,
        request.currency,
        request.receipt
    );

    let order = state.gateway.create_order(&request).await.map_err(|e| {
        error!("Failed to create order: {}", e);
        payment_error_to_response(e)
    })?;

    info!("Created order: {}", order.id);

    Ok(Json(OrderResponse::from_order(&order, &state.key_id)))
}

fn order_overrides(headers: &HeaderMap, body: &[u8]) -> OrderOverrides {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"));

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return OrderOverrides::default();
    }

    match serde_json::from_slice::<Option<OrderOverrides>>(body) {
        Ok(overrides) => overrides.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring unusable create-order body: {}", e);
            OrderOverrides::default()
        }
    }
}

/// Verify a payment callback posted by the checkout page.
///
/// Takes the raw request so body-read failures map to our own 500 instead of
/// an extractor rejection.
#[instrument(skip_all)]
pub async fn payment_callback(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<PaymentCallbackResponse>, ApiError> {
    let body = axum::body::to_bytes(request.into_body(), MAX_CALLBACK_BODY_BYTES)
        .await
        .map_err(|e| {
            warn!("Unable to read callback body: {}", e);
            payment_error_to_response(PaymentError::BodyUnreadable)
        })?;

    // The body carries the signature, so only its size is logged
    let payload = CallbackPayload::from_form(&body).map_err(|e| {
        warn!("Rejected payment callback ({} bytes): {}", body.len(), e);
        payment_error_to_response(e)
    })?;

    info!(
        "Received payment callback: order={}, payment={}",
        payload.razorpay_order_id, payload.razorpay_payment_id
    );

    state.verifier.verify(&payload).map_err(|e| {
        warn!(
            "Payment signature verification failed: order={}, payment={}",
            payload.razorpay_order_id, payload.razorpay_payment_id
        );
        payment_error_to_response(e)
    })?;

    info!("Verified payment: {}", payload.razorpay_payment_id);

    Ok(Json(PaymentCallbackResponse {
        payment_data: payload,
    }))
}
