//! Handlers serving the invoice page and its script

use super::AppState;
use crate::core::{InvoiceError, InvoiceResult, Operation};
use crate::ui::{PageVariant, SCRIPT};
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use chrono::Utc;

/// GET / renders the configured default variant
pub async fn default_page(State(state): State<AppState>) -> InvoiceResult<Html<String>> {
    let variant = state.default_variant;
    render(&state, variant).await
}

/// GET /en
pub async fn standard_page(State(state): State<AppState>) -> InvoiceResult<Html<String>> {
    render(&state, PageVariant::Standard).await
}

/// GET /ar
pub async fn arabic_page(State(state): State<AppState>) -> InvoiceResult<Html<String>> {
    render(&state, PageVariant::Arabic).await
}

/// GET /assets/invoices.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT,
    )
}

async fn render(state: &AppState, variant: PageVariant) -> InvoiceResult<Html<String>> {
    let invoices = state.store.list().await?;
    let today = Utc::now().date_naive();

    state
        .pages
        .render(variant, &invoices, today)
        .map(Html)
        .map_err(|e| InvoiceError::internal(Operation::RenderPage, e))
}
