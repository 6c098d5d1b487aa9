//! # Request Handlers
//!
//! Axum request handlers for the billing gateway. Every response body is
//! JSON; errors use the `{error: {message}}` shape.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bill_core::{resolve_plan, subscribe, BillingError, PlanSummary, SubscriptionOutcome};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Plan lookup query: three catalog identifiers, all required.
/// Fields deserialize as optional so a missing parameter produces this
/// service's 400 contract rather than the framework's rejection.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    #[serde(default)]
    pub weekly: Option<String>,
    #[serde(default)]
    pub monthly: Option<String>,
    #[serde(default)]
    pub yearly: Option<String>,
}

/// Plans response: one slot per billing cadence, `null` when the lookup
/// failed or the product has been removed.
#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub plans: PlanSlots,
}

#[derive(Debug, Serialize)]
pub struct PlanSlots {
    pub weekly: Option<PlanSummary>,
    pub monthly: Option<PlanSummary>,
    pub yearly: Option<PlanSummary>,
}

/// Create subscription request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub price_id: Option<String>,
    #[serde(default)]
    pub payment_method_id: Option<String>,
}

/// Error response body: `{"error":{"message":"..."}}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}

fn billing_error_to_response(err: BillingError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.public_message())))
}

/// A required string parameter: present and non-empty
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "billing-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Public configuration snapshot. No inputs, no side effects, never fails.
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.public.clone())
}

/// Resolve the three pricing plans concurrently.
///
/// A failed lookup degrades its slot to `null`; only a failed join of the
/// concurrent tasks aborts the whole request.
#[instrument(skip(state, query))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<PlansResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (weekly_id, monthly_id, yearly_id) = match (
        required(&query.weekly),
        required(&query.monthly),
        required(&query.yearly),
    ) {
        (Some(w), Some(m), Some(y)) => (w.to_owned(), m.to_owned(), y.to_owned()),
        _ => {
            return Err(billing_error_to_response(BillingError::MissingParameter(
                "Missing required query parameters: weekly, monthly, yearly",
            )));
        }
    };

    let provider = state.provider.clone();
    let weekly_task =
        tokio::spawn(async move { resolve_plan(provider.as_ref(), &weekly_id).await });

    let provider = state.provider.clone();
    let monthly_task =
        tokio::spawn(async move { resolve_plan(provider.as_ref(), &monthly_id).await });

    let provider = state.provider.clone();
    let yearly_task =
        tokio::spawn(async move { resolve_plan(provider.as_ref(), &yearly_id).await });

    let (weekly, monthly, yearly) = match tokio::try_join!(weekly_task, monthly_task, yearly_task)
    {
        Ok(plans) => plans,
        Err(err) => {
            error!("plan aggregation failed: {}", err);
            return Err(billing_error_to_response(BillingError::Aggregation(
                err.to_string(),
            )));
        }
    };

    Ok(Json(PlansResponse {
        plans: PlanSlots {
            weekly,
            monthly,
            yearly,
        },
    }))
}

/// Create a subscription: customer, payment method attach, default
/// payment method, then the subscription itself, aborting on the first
/// processor failure.
#[instrument(skip(state, request))]
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<Json<SubscriptionOutcome>, (StatusCode, Json<ErrorResponse>)> {
    let (email, price_id, payment_method_id) = match (
        required(&request.email),
        required(&request.price_id),
        required(&request.payment_method_id),
    ) {
        (Some(email), Some(price), Some(pm)) => (email, price, pm),
        _ => {
            return Err(billing_error_to_response(BillingError::MissingParameter(
                "Missing required fields: email, priceId, paymentMethodId",
            )));
        }
    };

    let outcome = subscribe(state.provider.as_ref(), email, price_id, payment_method_id)
        .await
        .map_err(|err| {
            error!("subscription creation failed: {}", err);
            billing_error_to_response(err)
        })?;

    Ok(Json(outcome))
}

/// Fallback for unmatched routes. Pure API surface, no static assets.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("API endpoint not found")),
    )
}
