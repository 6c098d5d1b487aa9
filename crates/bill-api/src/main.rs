//! # Billing-Gateway RS
//!
//! HTTP JSON proxy in front of the Stripe billing API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLISHABLE_KEY=pk_test_...
//!
//! # Run the server
//! billing-gateway
//! ```

use bill_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state; a missing Stripe key warns instead of
    // failing, so /api/config stays serviceable
    let state = AppState::new();

    let addr = state.config.socket_addr();

    info!("Payment provider: {}", state.provider.provider_name());
    info!("Apple Pay enabled: {}", state.public.apple_pay_enabled);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Billing-Gateway starting on http://{}", addr);
    info!("💳 Plans: GET http://{}/api/products", addr);
    info!("📄 Config: GET http://{}/api/config", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  💳 Billing-Gateway RS 💳
  ━━━━━━━━━━━━━━━━━━━━━━━━
  Subscription billing proxy
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
