//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! All secrets are loaded from environment variables.

use std::env;
use tracing::warn;

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// Publishable key (pk_test_... or pk_live_...)
    pub publishable_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars:
    /// - `STRIPE_SECRET_KEY`
    /// - `STRIPE_PUBLISHABLE_KEY`
    ///
    /// Missing keys load as empty strings with a warning rather than
    /// failing, so the server still boots and serves `/api/config`;
    /// every processor-backed endpoint then fails at call time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();
        let publishable_key = env::var("STRIPE_PUBLISHABLE_KEY").unwrap_or_default();

        if secret_key.is_empty() {
            warn!("STRIPE_SECRET_KEY not set; processor-backed endpoints will fail");
        }
        if publishable_key.is_empty() {
            warn!("STRIPE_PUBLISHABLE_KEY not set; clients cannot tokenize payment methods");
        }

        Self {
            secret_key,
            publishable_key,
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(secret_key: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
        }
    }

    /// Check if a secret key is present at all
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Detailed payment methods (Apple Pay) are only offered when both
    /// keys are present
    pub fn apple_pay_enabled(&self) -> bool {
        !self.publishable_key.is_empty() && !self.secret_key.is_empty()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
