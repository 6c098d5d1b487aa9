//! # Application State
//!
//! Shared state for the Axum application.
//! The billing provider is injected at construction, so tests run the real
//! router against a scripted double instead of Stripe.

use bill_core::BoxedBillingProvider;
use bill_stripe::{StripeConfig, StripeGateway};
use serde::Serialize;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Public configuration snapshot returned by `GET /api/config`.
/// Built once at startup; never changes while the process runs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub publishable_key: String,
    pub apple_pay_enabled: bool,
}

impl PublicConfig {
    /// Derive the public snapshot from the Stripe configuration
    pub fn from_stripe(config: &StripeConfig) -> Self {
        Self {
            publishable_key: config.publishable_key.clone(),
            apple_pay_enabled: config.apple_pay_enabled(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Billing provider (Stripe in production, a double in tests)
    pub provider: BoxedBillingProvider,
    /// Public config snapshot
    pub public: PublicConfig,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the production state wired to the Stripe gateway
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let stripe = StripeConfig::from_env();
        let public = PublicConfig::from_stripe(&stripe);
        let provider = Arc::new(StripeGateway::new(stripe)) as BoxedBillingProvider;

        Self {
            provider,
            public,
            config,
        }
    }

    /// Build a state around any provider; tests inject a scripted double here
    pub fn with_provider(provider: BoxedBillingProvider, public: PublicConfig) -> Self {
        Self {
            provider,
            public,
            config: AppConfig::from_env(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
