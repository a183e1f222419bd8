//! # Invoice Tracker
//!
//! A minimal invoice-tracking web application: one in-memory collection of
//! invoices behind a JSON API, and a form/table page that drives it.
//!
//! ## Features
//!
//! - **Four operations on one path**: `GET`, `POST`, `PUT` and `DELETE` on `/api/invoices`
//! - **Store-assigned ids**: increasing and never reused, even after deletes
//! - **Explicit input parsing**: loosely-typed JSON is coerced at the boundary,
//!   and values that cannot be coerced are rejected with a 400
//! - **Injected store**: handlers only see the [`core::InvoiceService`] trait
//! - **Two page variants**: English with edit/delete actions, Arabic display-only
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoice_tracker::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryInvoiceStore::new())
//!         .with_config(AppConfig::load()?)
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod ui;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, Invoice, InvoiceError, InvoiceFields, InvoiceId, InvoiceResult,
        InvoiceService, Operation, ValidationError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryInvoiceStore;

    // === Config ===
    pub use crate::config::{AppConfig, LogConfig, ServerConfig, UiConfig};

    // === Server ===
    pub use crate::server::{API_PATH, RestExposure, ServerBuilder, ServerHost};

    // === UI ===
    pub use crate::ui::{PageRenderer, PageVariant, format_amount};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
