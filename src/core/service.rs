//! Service trait for invoice storage

use crate::core::error::InvoiceResult;
use crate::core::invoice::{Invoice, InvoiceFields, InvoiceId};
use async_trait::async_trait;

/// Storage contract for invoices
///
/// Each method is a single atomic step against the collection. The in-memory
/// backing is the only one shipped, but handlers only ever see this trait,
/// so a persistent backing can replace it without touching the HTTP layer.
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// All invoices, in insertion order
    async fn list(&self) -> InvoiceResult<Vec<Invoice>>;

    /// Get an invoice by id
    async fn get(&self, id: InvoiceId) -> InvoiceResult<Option<Invoice>>;

    /// Allocate the next id, stamp `created_at` and append the invoice
    async fn create(&self, fields: InvoiceFields) -> InvoiceResult<Invoice>;

    /// Replace the editable fields of an existing invoice
    ///
    /// Fails with `InvoiceError::NotFound` when no invoice has `id`.
    async fn update(&self, id: InvoiceId, fields: InvoiceFields) -> InvoiceResult<Invoice>;

    /// Remove an invoice and return it as it was
    ///
    /// Fails with `InvoiceError::NotFound` when no invoice has `id`.
    async fn delete(&self, id: InvoiceId) -> InvoiceResult<Invoice>;
}
