//! # Application State
//!
//! Shared state for the Axum application.
//! Everything here is built once at startup and never mutated afterwards.

use anyhow::Context;
use pay_core::{BoxedOrderGateway, OrderOverrides, OrderRequest};
use pay_razorpay::{PaymentSignatureVerifier, RazorpayConfig, RazorpayOrderClient};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Order parameters used when the caller does not supply them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderDefaults {
    /// Amount in the smallest currency unit
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub payment_capture: bool,
}

impl Default for OrderDefaults {
    fn default() -> Self {
        Self {
            amount: 5000,
            currency: "INR".to_string(),
            receipt: "receipt#1".to_string(),
            payment_capture: true,
        }
    }
}

impl OrderDefaults {
    pub fn to_request(&self) -> OrderRequest {
        OrderRequest::new(self.amount, &self.currency, &self.receipt)
            .with_payment_capture(self.payment_capture)
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Order parameters for bodiless create-order calls
    pub order_defaults: OrderDefaults,
}

impl AppConfig {
    /// Load from environment variables and `config/order.toml`
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            order_defaults: load_order_defaults()?,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: "development".to_string(),
            order_defaults: OrderDefaults::default(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order-creating payment gateway
    pub gateway: BoxedOrderGateway,
    /// Callback signature verifier
    pub verifier: PaymentSignatureVerifier,
    /// Publishable key returned to the web client
    pub key_id: String,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state backed by the Razorpay order client
    pub fn new(config: AppConfig, razorpay: RazorpayConfig) -> anyhow::Result<Self> {
        tracing::info!(
            "Razorpay key {} ({} mode)",
            razorpay.key_id,
            razorpay_mode(&razorpay)
        );

        let key_id = razorpay.key_id.clone();
        let verifier = PaymentSignatureVerifier::new(razorpay.key_secret.clone());

        let client = RazorpayOrderClient::new(razorpay)
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;

        Ok(Self::with_gateway(config, Arc::new(client), key_id, verifier))
    }

    /// Load everything from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let razorpay = RazorpayConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load Razorpay config: {}", e))?;
        Self::new(config, razorpay)
    }

    /// Create state around an arbitrary gateway
    pub fn with_gateway(
        config: AppConfig,
        gateway: BoxedOrderGateway,
        key_id: impl Into<String>,
        verifier: PaymentSignatureVerifier,
    ) -> Self {
        Self {
            gateway,
            verifier,
            key_id: key_id.into(),
            config: Arc::new(config),
        }
    }

    /// Build the gateway request from configured defaults and caller input
    pub fn order_request(&self, overrides: OrderOverrides) -> OrderRequest {
        self.config.order_defaults.to_request().apply(overrides)
    }
}

/// "test" or "live", from the key id prefix
pub fn razorpay_mode(config: &RazorpayConfig) -> &'static str {
    if config.is_live_mode() {
        "live"
    } else if config.is_test_mode() {
        "test"
    } else {
        "unknown"
    }
}

/// Load order defaults from config file
fn load_order_defaults() -> anyhow::Result<OrderDefaults> {
    let config_paths = [
        "config/order.toml",
        "../config/order.toml",
        "../../config/order.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let defaults: OrderDefaults = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path))?;
            tracing::info!(
                "Loaded order defaults from {}: amount={} {}",
                path,
                defaults.amount,
                defaults.currency
            );
            return Ok(defaults);
        }
    }

    tracing::warn!("No order config found, using built-in defaults");
    Ok(OrderDefaults::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeGateway;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_socket_addr() {
        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };

        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_order_defaults_from_toml() {
        let defaults: OrderDefaults = toml::from_str(
            r#"
            amount = 9900
            currency = "INR"
            "#,
        )
        .unwrap();

        assert_eq!(defaults.amount, 9900);
        assert_eq!(defaults.receipt, "receipt#1");
        assert!(defaults.payment_capture);
    }

    #[test]
    fn test_order_request_applies_overrides() {
        let state = AppState::with_gateway(
            AppConfig::default(),
            Arc::new(FakeGateway::succeeding("order_1")),
            "rzp_test_key",
            PaymentSignatureVerifier::new("secret"),
        );

        let request = state.order_request(OrderOverrides::default());
        assert_eq!(request, OrderRequest::new(5000, "INR", "receipt#1"));

        let request = state.order_request(OrderOverrides {
            receipt: Some("receipt#7".to_string()),
            ..OrderOverrides::default()
        });
        assert_eq!(request.receipt, "receipt#7");
        assert_eq!(request.amount, 5000);
    }

    #[test]
    fn test_razorpay_mode() {
        assert_eq!(razorpay_mode(&RazorpayConfig::new("rzp_test_abc", "s")), "test");
        assert_eq!(razorpay_mode(&RazorpayConfig::new("rzp_live_abc", "s")), "live");
        assert_eq!(razorpay_mode(&RazorpayConfig::new("abc", "s")), "unknown");
    }

    #[test]
    fn test_new_uses_razorpay_key() {
        let state = AppState::new(
            AppConfig::default(),
            RazorpayConfig::new("rzp_test_abc", "secret"),
        )
        .unwrap();

        assert_eq!(state.key_id, "rzp_test_abc");
        assert_eq!(state.gateway.provider_name(), "razorpay");
    }
}
