//! # bill-stripe
//!
//! Stripe implementation of the `BillingProvider` trait.
//!
//! All billing state lives in Stripe; this crate issues form-encoded calls
//! against the Stripe REST API and decodes the responses into the
//! processor-agnostic types from `bill-core`. Stripe's own error messages
//! are relayed verbatim.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bill_stripe::StripeGateway;
//! use bill_core::BillingProvider;
//!
//! // Reads STRIPE_SECRET_KEY / STRIPE_PUBLISHABLE_KEY from the environment
//! let gateway = StripeGateway::from_env();
//!
//! let customer = gateway.create_customer("jane@example.com").await?;
//! let subscription = gateway.create_subscription(&customer.id, "price_abc").await?;
//! ```

pub mod config;
pub mod gateway;

// Re-exports
pub use config::StripeConfig;
pub use gateway::StripeGateway;
