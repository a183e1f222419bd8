//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with:
//! - `GET|POST|PUT|DELETE /api/invoices`
//! - the invoice page (`/`, `/en`, `/ar`) and its script
//! - health checks
//! - any custom routes handed to the builder

pub mod handlers;
pub mod pages;

use super::super::host::ServerHost;
use crate::core::InvoiceService;
use crate::ui::{PageRenderer, PageVariant, SCRIPT_PATH};
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Path of the invoice collection
pub const API_PATH: &str = "/api/invoices";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InvoiceService>,
    pub pages: Arc<PageRenderer>,
    pub default_variant: PageVariant,
}

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let state = AppState {
            store: host.store.clone(),
            pages: host.pages.clone(),
            default_variant: host.default_variant(),
        };

        let mut app = Self::health_routes()
            .merge(Self::api_routes(state.clone()))
            .merge(Self::page_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app = app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if host.config.server.cors {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app)
    }

    /// The four invoice operations, all on one path
    fn api_routes(state: AppState) -> Router {
        Router::new()
            .route(
                API_PATH,
                get(handlers::list_invoices)
                    .post(handlers::create_invoice)
                    .put(handlers::update_invoice)
                    .delete(handlers::delete_invoice),
            )
            .with_state(state)
    }

    fn page_routes(state: AppState) -> Router {
        Router::new()
            .route("/", get(pages::default_page))
            .route("/en", get(pages::standard_page))
            .route("/ar", get(pages::arabic_page))
            .route(SCRIPT_PATH, get(pages::script))
            .with_state(state)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "invoice-tracker"
        }))
    }
}
