//! # Billing Provider Trait
//!
//! Abstraction over the external payment processor. The HTTP layer and the
//! domain operations only see this trait, so tests can substitute a scripted
//! double for the real Stripe-backed gateway.

use crate::error::BillingResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A sellable catalog item owned by the external processor.
#[derive(Debug, Clone)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Recurrence of a recurring price (e.g. "month" x 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecurrence {
    pub interval: String,
    pub interval_count: i64,
}

/// A price attached to a catalog item.
///
/// `unit_amount` is absent for non-fixed pricing schemes (tiered, metered).
#[derive(Debug, Clone)]
pub struct PricePoint {
    pub id: String,
    pub currency: String,
    pub unit_amount: Option<i64>,
    pub recurring: Option<PriceRecurrence>,
}

/// A customer record created in the external processor.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: String,
}

/// The processor's representation of an in-progress charge.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    pub client_secret: Option<String>,
    pub status: String,
}

/// A freshly created subscription, with the latest invoice's
/// payment-confirmation object expanded when the processor returned one.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub id: String,
    pub status: String,
    pub payment_confirmation: Option<PaymentConfirmation>,
}

/// Core trait for payment processor implementations.
///
/// One method per processor operation the gateway needs. Implementations do
/// not retry; every failure is returned to the caller as-is.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Retrieve a catalog item by identifier.
    async fn retrieve_product(&self, product_id: &str) -> BillingResult<CatalogProduct>;

    /// List active prices for a catalog item, filtered to the most recent
    /// one (limit 1). `None` means the item has no active price.
    async fn latest_active_price(&self, product_id: &str) -> BillingResult<Option<PricePoint>>;

    /// Create a new customer record scoped to `email`.
    async fn create_customer(&self, email: &str) -> BillingResult<Customer>;

    /// Attach a payment method to a customer.
    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> BillingResult<()>;

    /// Set a payment method as the customer's default for future invoices.
    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> BillingResult<()>;

    /// Create a subscription for a customer against a price. Implementations
    /// must request incomplete-payment behavior (so a subscription needing
    /// additional authentication is returned rather than an error) and expand
    /// the latest invoice's payment-confirmation object.
    async fn create_subscription(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> BillingResult<NewSubscription>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared billing provider (dynamic dispatch)
pub type BoxedBillingProvider = Arc<dyn BillingProvider>;
