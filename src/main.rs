use invoice_tracker::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        bind = %config.server.bind,
        variant = %config.ui.default_variant,
        cors = config.server.cors,
        "Starting invoice tracker"
    );

    let bind = config.server.bind.clone();
    ServerBuilder::new()
        .with_store(InMemoryInvoiceStore::new())
        .with_config(config)
        .serve(&bind)
        .await
}
