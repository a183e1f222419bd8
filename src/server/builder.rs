//! Fluent construction of the invoice tracker's router and listener

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::InvoiceService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the invoice tracker's HTTP application
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryInvoiceStore::new())
///     .with_config(AppConfig::load()?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn InvoiceService>>,
    config: AppConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            store: None,
            config: AppConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the invoice store (required)
    pub fn with_store(mut self, store: impl InvoiceService + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared invoice store (required, alternative to `with_store`)
    pub fn with_shared_store(mut self, store: Arc<dyn InvoiceService>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Merge extra routes next to the invoice routes
    ///
    /// # Example
    ///
    /// ```ignore
    /// let extra = Router::new().route("/version", get(|| async { env!("CARGO_PKG_VERSION") }));
    ///
    /// ServerBuilder::new()
    ///     .with_store(store)
    ///     .with_custom_routes(extra)
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Resolve the store and validated config into a [`ServerHost`]
    pub fn build_host(mut self) -> Result<ServerHost> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("InvoiceService is required. Call .with_store()"))?;

        self.config.validate()?;

        ServerHost::from_builder_components(store, self.config)
    }

    /// Build the router serving the API, the page and health checks
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Bind `addr` and serve until Ctrl+C or SIGTERM
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_store(InMemoryInvoiceStore::new())
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(%addr, "Invoice tracker listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Invoice tracker stopped");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on the first of Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!(signal = "SIGINT", "Shutting down");
        },
        _ = terminate => {
            tracing::info!(signal = "SIGTERM", "Shutting down");
        },
    }
}
