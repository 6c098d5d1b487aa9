//! # Subscription Flow
//!
//! The ordered customer/payment-method/subscription sequence against the
//! external processor. Each step consumes the previous step's output, so the
//! first failure aborts the remainder and propagates to the caller.

use crate::error::BillingResult;
use crate::provider::BillingProvider;
use serde::Serialize;
use tracing::{info, instrument};

/// Outcome of a successful subscription creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOutcome {
    pub subscription_id: String,
    /// Secret the client-side payment UI needs to confirm the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Payment-confirmation status when the processor expanded one,
    /// otherwise the subscription's own status.
    pub status: String,
}

/// Run the full subscription flow:
///
/// 1. create a customer for `email`
/// 2. attach the payment method to that customer
/// 3. make it the customer's default for invoices
/// 4. create the subscription against `price_id`
///
/// No idempotency key is sent: repeated calls for the same email create
/// distinct customer records. A failure after step 1 leaves the created
/// customer behind in the processor; no compensating deletion is attempted.
#[instrument(skip(provider, email, payment_method_id))]
pub async fn subscribe(
    provider: &dyn BillingProvider,
    email: &str,
    price_id: &str,
    payment_method_id: &str,
) -> BillingResult<SubscriptionOutcome> {
    let customer = provider.create_customer(email).await?;

    provider
        .attach_payment_method(payment_method_id, &customer.id)
        .await?;

    provider
        .set_default_payment_method(&customer.id, payment_method_id)
        .await?;

    let subscription = provider.create_subscription(&customer.id, price_id).await?;

    info!(
        "created subscription {} for customer {} (status: {})",
        subscription.id, customer.id, subscription.status
    );

    let (client_secret, status) = match subscription.payment_confirmation {
        Some(confirmation) => (confirmation.client_secret, confirmation.status),
        None => (None, subscription.status),
    };

    Ok(SubscriptionOutcome {
        subscription_id: subscription.id,
        client_secret,
        status,
    })
}
