//! Scripted provider double for unit tests. Records every operation so
//! tests can assert call counts and ordering.

use crate::error::{BillingError, BillingResult};
use crate::provider::{
    BillingProvider, CatalogProduct, Customer, NewSubscription, PaymentConfirmation, PricePoint,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub(crate) struct ScriptedProvider {
    products: HashMap<String, CatalogProduct>,
    prices: HashMap<String, PricePoint>,
    failing_price_lookups: Vec<String>,
    attach_error: Option<String>,
    subscription_error: Option<String>,
    confirmation: Option<PaymentConfirmation>,
    subscription_status: String,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            prices: HashMap::new(),
            failing_price_lookups: Vec::new(),
            attach_error: None,
            subscription_error: None,
            confirmation: None,
            subscription_status: "incomplete".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_product(mut self, product: CatalogProduct) -> Self {
        self.products.insert(product.id.clone(), product);
        self
    }

    pub fn with_price(mut self, product_id: &str, price: PricePoint) -> Self {
        self.prices.insert(product_id.to_string(), price);
        self
    }

    pub fn with_failing_price_lookup(mut self, product_id: &str) -> Self {
        self.failing_price_lookups.push(product_id.to_string());
        self
    }

    pub fn with_attach_error(mut self, message: &str) -> Self {
        self.attach_error = Some(message.to_string());
        self
    }

    pub fn with_subscription_error(mut self, message: &str) -> Self {
        self.subscription_error = Some(message.to_string());
        self
    }

    pub fn with_confirmation(mut self, confirmation: PaymentConfirmation) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    pub fn with_subscription_status(mut self, status: &str) -> Self {
        self.subscription_status = status.to_string();
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) {
        self.calls.lock().unwrap().push(op);
    }
}

#[async_trait]
impl BillingProvider for ScriptedProvider {
    async fn retrieve_product(&self, product_id: &str) -> BillingResult<CatalogProduct> {
        self.record("retrieve_product");
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| BillingError::Provider {
                message: format!("No such product: '{product_id}'"),
            })
    }

    async fn latest_active_price(&self, product_id: &str) -> BillingResult<Option<PricePoint>> {
        self.record("latest_active_price");
        if self.failing_price_lookups.iter().any(|id| id == product_id) {
            return Err(BillingError::Network("connection reset by peer".to_string()));
        }
        Ok(self.prices.get(product_id).cloned())
    }

    async fn create_customer(&self, _email: &str) -> BillingResult<Customer> {
        self.record("create_customer");
        Ok(Customer {
            id: "cus_scripted".to_string(),
        })
    }

    async fn attach_payment_method(
        &self,
        _payment_method_id: &str,
        _customer_id: &str,
    ) -> BillingResult<()> {
        self.record("attach_payment_method");
        match &self.attach_error {
            Some(message) => Err(BillingError::Provider {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn set_default_payment_method(
        &self,
        _customer_id: &str,
        _payment_method_id: &str,
    ) -> BillingResult<()> {
        self.record("set_default_payment_method");
        Ok(())
    }

    async fn create_subscription(
        &self,
        _customer_id: &str,
        _price_id: &str,
    ) -> BillingResult<NewSubscription> {
        self.record("create_subscription");
        if let Some(message) = &self.subscription_error {
            return Err(BillingError::Provider {
                message: message.clone(),
            });
        }
        Ok(NewSubscription {
            id: "sub_scripted".to_string(),
            status: self.subscription_status.clone(),
            payment_confirmation: self.confirmation.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
