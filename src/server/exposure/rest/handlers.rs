//! HTTP handlers for the invoice collection
//!
//! Bodies are taken as raw bytes and parsed by [`crate::core::payload`], so
//! a malformed body or a missing `Content-Type` header becomes the
//! operation's internal error instead of an axum rejection.

use super::AppState;
use crate::core::payload::{self, Body};
use crate::core::{Invoice, InvoiceError, InvoiceResult, Operation};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};

/// GET /api/invoices
pub async fn list_invoices(State(state): State<AppState>) -> InvoiceResult<Json<Vec<Invoice>>> {
    let invoices = state.store.list().await?;
    tracing::debug!(count = invoices.len(), "Listed invoices");
    Ok(Json(invoices))
}

/// POST /api/invoices with `{customerName, amount, dueDate}`
pub async fn create_invoice(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> InvoiceResult<(StatusCode, Json<Invoice>)> {
    let body = read_body(body, Operation::Create)?;
    let fields = payload::create_fields(&body)?;

    let invoice = state.store.create(fields).await?;
    tracing::info!(invoice_id = invoice.id, "Invoice created");

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// PUT /api/invoices with `{id, customerName, amount, dueDate}`
pub async fn update_invoice(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> InvoiceResult<Json<Invoice>> {
    let body = read_body(body, Operation::Update)?;
    let (id, fields) = payload::update_fields(&body)?;

    let invoice = state.store.update(id, fields).await?;
    tracing::info!(invoice_id = invoice.id, "Invoice updated");

    Ok(Json(invoice))
}

/// DELETE /api/invoices with `{id}`
pub async fn delete_invoice(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> InvoiceResult<Json<Invoice>> {
    let body = read_body(body, Operation::Delete)?;
    let id = payload::delete_id(&body)?;

    let invoice = state.store.delete(id).await?;
    tracing::info!(invoice_id = invoice.id, "Invoice deleted");

    Ok(Json(invoice))
}

fn read_body(body: Result<Bytes, BytesRejection>, operation: Operation) -> InvoiceResult<Body> {
    let bytes = body.map_err(|rejection| InvoiceError::internal(operation, rejection.body_text()))?;
    payload::parse_object(&bytes, operation)
}
