//! # bill-core
//!
//! Core types and traits for the billing-gateway payment proxy.
//!
//! This crate provides:
//! - `BillingProvider` trait abstracting the external payment processor
//! - `resolve_plan` for fault-isolated per-plan catalog lookups
//! - `subscribe` for the ordered customer/payment-method/subscription flow
//! - `BillingError` for typed error handling
//!
//! All billing state (customers, payment methods, products, prices,
//! subscriptions) lives in the external processor; this crate only shapes
//! requests and responses around it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bill_core::{resolve_plan, subscribe, BoxedBillingProvider};
//!
//! // Look up one pricing plan; failures degrade to None
//! let plan = resolve_plan(provider.as_ref(), "prod_abc123").await;
//!
//! // Run the full subscription flow against the processor
//! let outcome = subscribe(provider.as_ref(), "jane@example.com", "price_abc", "pm_card").await?;
//! println!("subscription {} is {}", outcome.subscription_id, outcome.status);
//! ```

pub mod error;
pub mod plan;
pub mod provider;
pub mod subscription;

#[cfg(test)]
pub(crate) mod scripted;

// Re-exports for convenience
pub use error::{BillingError, BillingResult};
pub use plan::{resolve_plan, PlanSummary, RecurringSchedule, DEFAULT_CURRENCY};
pub use provider::{
    BillingProvider, BoxedBillingProvider, CatalogProduct, Customer, NewSubscription,
    PaymentConfirmation, PricePoint, PriceRecurrence,
};
pub use subscription::{subscribe, SubscriptionOutcome};
