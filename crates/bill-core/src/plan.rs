//! # Plan Resolution
//!
//! Per-identifier resolution of a pricing plan into the view the pricing
//! page consumes. Lookup failures degrade to `None` instead of propagating,
//! so one missing or disabled product cannot block sibling plans from
//! rendering.

use crate::provider::BillingProvider;
use serde::Serialize;
use tracing::debug;

/// Currency used when a catalog item has no active price.
pub const DEFAULT_CURRENCY: &str = "usd";

/// Recurring schedule of a plan, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSchedule {
    pub interval: String,
    pub interval_count: i64,
}

/// Derived view of a catalog item and its most recent active price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub currency: String,
    pub unit_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<RecurringSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<String>,
}

/// Resolve a single catalog identifier to a plan summary.
///
/// Returns `None` without any network call when the identifier is empty.
/// Any error from the product retrieval or the price listing (not-found,
/// network failure, rate limit) is swallowed and also yields `None`; the
/// caller is statically forced to handle the absent slot.
pub async fn resolve_plan(provider: &dyn BillingProvider, product_id: &str) -> Option<PlanSummary> {
    if product_id.is_empty() {
        return None;
    }

    let product = match provider.retrieve_product(product_id).await {
        Ok(product) => product,
        Err(err) => {
            debug!("product lookup failed for {product_id}: {err}");
            return None;
        }
    };

    let price = match provider.latest_active_price(product_id).await {
        Ok(price) => price,
        Err(err) => {
            debug!("price lookup failed for {product_id}: {err}");
            return None;
        }
    };

    let summary = match price {
        Some(price) => PlanSummary {
            id: product.id,
            name: product.name,
            description: product.description,
            currency: price.currency,
            unit_amount: price.unit_amount.unwrap_or(0),
            recurring: price.recurring.map(|r| RecurringSchedule {
                interval: r.interval,
                interval_count: r.interval_count,
            }),
            price_id: Some(price.id),
        },
        None => PlanSummary {
            id: product.id,
            name: product.name,
            description: product.description,
            currency: DEFAULT_CURRENCY.to_string(),
            unit_amount: 0,
            recurring: None,
            price_id: None,
        },
    };

    Some(summary)
}
