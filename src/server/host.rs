//! Server host for transport-agnostic application state
//!
//! The host owns everything a request needs: the invoice store, the page
//! renderer and the configuration. Exposures (currently only REST) borrow
//! from it to build their routers.

use super::exposure::rest::API_PATH;
use crate::config::AppConfig;
use crate::core::InvoiceService;
use crate::ui::{PageRenderer, PageVariant};
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_builder_components(
///     Arc::new(InMemoryInvoiceStore::new()),
///     AppConfig::default(),
/// )?;
///
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Effective configuration
    pub config: Arc<AppConfig>,

    /// Invoice store shared by every request
    pub store: Arc<dyn InvoiceService>,

    /// Compiled page template
    pub pages: Arc<PageRenderer>,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Fails only if the page template does not compile.
    pub fn from_builder_components(
        store: Arc<dyn InvoiceService>,
        config: AppConfig,
    ) -> Result<Self> {
        let pages = PageRenderer::new(API_PATH)?;

        Ok(Self {
            config: Arc::new(config),
            store,
            pages: Arc::new(pages),
        })
    }

    /// Variant served at `/`
    pub fn default_variant(&self) -> PageVariant {
        self.config.ui.default_variant
    }
}
