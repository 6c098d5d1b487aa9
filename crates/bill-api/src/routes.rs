//! # Routes
//!
//! Axum router configuration for the billing gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /api/config - Public config snapshot
/// - GET  /api/products - Resolve weekly/monthly/yearly plans
/// - POST /api/create-subscription - Create a subscription
/// - anything else - JSON 404
pub fn create_router(state: AppState) -> Router {
    // CORS allow-list trust model: the gateway carries no auth of its own
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/products", get(handlers::get_products))
        .route("/create-subscription", post(handlers::create_subscription));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        // Pure API surface: everything unmatched gets the JSON 404
        .fallback(handlers::not_found)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
