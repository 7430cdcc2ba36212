use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod checkout;
mod clients;
mod config;
mod domain;
mod proto;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging with environment-based filtering; override with
    // RUST_LOG, e.g. RUST_LOG=debug.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,checkout_service=debug")),
        )
        .init();

    let cfg = config::Config::from_env()?;
    tracing::info!(
        port = cfg.listen_port,
        cart = %cfg.cart_addr,
        product_catalog = %cfg.product_catalog_addr,
        currency = %cfg.currency_addr,
        shipping_stubbed = cfg.shipping.is_stubbed(),
        payment_stubbed = cfg.payment.is_stubbed(),
        email_stubbed = cfg.email.is_stubbed(),
        "service configured"
    );

    let backends = clients::from_config(&cfg)?;
    let orchestrator = Arc::new(checkout::Orchestrator::new(backends));

    server::serve(orchestrator, cfg.listen_port).await
}
