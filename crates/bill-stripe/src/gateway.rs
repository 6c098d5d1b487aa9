//! # Stripe Gateway
//!
//! `BillingProvider` implementation backed by the Stripe REST API.
//! Requests are form-encoded per Stripe convention; error responses carry
//! Stripe's `{error: {message}}` envelope, which is relayed verbatim.

use crate::config::StripeConfig;
use async_trait::async_trait;
use bill_core::{
    BillingError, BillingProvider, BillingResult, CatalogProduct, Customer, NewSubscription,
    PaymentConfirmation, PricePoint, PriceRecurrence,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, instrument};

/// Stripe-backed billing provider
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway with the given configuration
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(StripeConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    async fn send_get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> BillingResult<reqwest::Response> {
        self.client
            .get(self.url(path))
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .query(query)
            .send()
            .await
            .map_err(|e| BillingError::Network(e.to_string()))
    }

    async fn send_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> BillingResult<reqwest::Response> {
        self.client
            .post(self.url(path))
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(form)
            .send()
            .await
            .map_err(|e| BillingError::Network(e.to_string()))
    }

    /// Decode a Stripe response, mapping non-2xx statuses to a provider
    /// error carrying Stripe's own message.
    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> BillingResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BillingError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(envelope) = serde_json::from_str::<StripeErrorEnvelope>(&body) {
                return Err(BillingError::Provider {
                    message: envelope.error.message,
                });
            }

            return Err(BillingError::Provider {
                message: format!("HTTP {}: {}", status, body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            BillingError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl BillingProvider for StripeGateway {
    #[instrument(skip(self))]
    async fn retrieve_product(&self, product_id: &str) -> BillingResult<CatalogProduct> {
        let response = self
            .send_get(&format!("/v1/products/{product_id}"), &[])
            .await?;
        let product: StripeProduct = self.decode(response).await?;

        Ok(product.into())
    }

    #[instrument(skip(self))]
    async fn latest_active_price(&self, product_id: &str) -> BillingResult<Option<PricePoint>> {
        let response = self
            .send_get(
                "/v1/prices",
                &[("product", product_id), ("active", "true"), ("limit", "1")],
            )
            .await?;
        let list: StripeList<StripePrice> = self.decode(response).await?;

        Ok(list.data.into_iter().next().map(Into::into))
    }

    #[instrument(skip(self, email))]
    async fn create_customer(&self, email: &str) -> BillingResult<Customer> {
        let response = self.send_form("/v1/customers", &[("email", email)]).await?;
        let customer: StripeCustomer = self.decode(response).await?;

        debug!("created customer {}", customer.id);

        Ok(Customer { id: customer.id })
    }

    #[instrument(skip(self))]
    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> BillingResult<()> {
        let response = self
            .send_form(
                &format!("/v1/payment_methods/{payment_method_id}/attach"),
                &[("customer", customer_id)],
            )
            .await?;
        let payment_method: StripePaymentMethod = self.decode(response).await?;

        debug!("attached payment method {}", payment_method.id);

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> BillingResult<()> {
        let response = self
            .send_form(
                &format!("/v1/customers/{customer_id}"),
                &[(
                    "invoice_settings[default_payment_method]",
                    payment_method_id,
                )],
            )
            .await?;
        let customer: StripeCustomer = self.decode(response).await?;

        debug!("set default payment method for customer {}", customer.id);

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_subscription(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> BillingResult<NewSubscription> {
        // default_incomplete hands back an incomplete subscription instead of
        // erroring when the charge needs additional authentication; the
        // expand pulls the payment intent into the same response.
        let response = self
            .send_form(
                "/v1/subscriptions",
                &[
                    ("customer", customer_id),
                    ("items[0][price]", price_id),
                    ("payment_behavior", "default_incomplete"),
                    ("expand[]", "latest_invoice.payment_intent"),
                ],
            )
            .await?;
        let subscription: StripeSubscription = self.decode(response).await?;

        debug!(
            "created subscription {} (status: {})",
            subscription.id, subscription.status
        );

        Ok(subscription.into())
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeProduct {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<StripeProduct> for CatalogProduct {
    fn from(product: StripeProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeList<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct StripePrice {
    id: String,
    currency: String,
    #[serde(default)]
    unit_amount: Option<i64>,
    #[serde(default)]
    recurring: Option<StripeRecurring>,
}

#[derive(Debug, Deserialize)]
struct StripeRecurring {
    interval: String,
    interval_count: i64,
}

impl From<StripePrice> for PricePoint {
    fn from(price: StripePrice) -> Self {
        Self {
            id: price.id,
            currency: price.currency,
            unit_amount: price.unit_amount,
            recurring: price.recurring.map(|r| PriceRecurrence {
                interval: r.interval,
                interval_count: r.interval_count,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeCustomer {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripePaymentMethod {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeSubscription {
    id: String,
    status: String,
    #[serde(default)]
    latest_invoice: Option<StripeInvoice>,
}

#[derive(Debug, Deserialize)]
struct StripeInvoice {
    #[serde(default)]
    payment_intent: Option<StripePaymentIntent>,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    #[serde(default)]
    client_secret: Option<String>,
    status: String,
}

impl From<StripeSubscription> for NewSubscription {
    fn from(subscription: StripeSubscription) -> Self {
        Self {
            id: subscription.id,
            status: subscription.status,
            payment_confirmation: subscription
                .latest_invoice
                .and_then(|invoice| invoice.payment_intent)
                .map(|intent| PaymentConfirmation {
                    client_secret: intent.client_secret,
                    status: intent.status,
                }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeApiError,
}

#[derive(Debug, Deserialize)]
struct StripeApiError {
    message: String,
}
