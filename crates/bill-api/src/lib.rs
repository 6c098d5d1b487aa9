//! # bill-api
//!
//! HTTP API layer for billing-gateway-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - JSON endpoints proxying the external payment processor
//! - A uniform `{error: {message}}` error shape, including the 404 fallback
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/config` | Public config snapshot |
//! | GET | `/api/products` | Resolve weekly/monthly/yearly plans |
//! | POST | `/api/create-subscription` | Create a subscription |
//! | * | anything else | 404 `{"error":{"message":"API endpoint not found"}}` |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, PublicConfig};
