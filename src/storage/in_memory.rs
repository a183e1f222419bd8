//! In-memory implementation of InvoiceService

use crate::core::{
    Invoice, InvoiceError, InvoiceFields, InvoiceId, InvoiceResult, InvoiceService, Operation,
};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The collection and its id counter, guarded together so that allocating
/// an id and inserting the invoice happen as one step.
#[derive(Debug)]
struct Ledger {
    invoices: IndexMap<InvoiceId, Invoice>,
    next_id: InvoiceId,
}

/// In-memory invoice store
///
/// Lives for the lifetime of the process. Clones share the same collection,
/// so one store can be handed to the router and kept for inspection.
#[derive(Clone, Debug)]
pub struct InMemoryInvoiceStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryInvoiceStore {
    /// Create an empty store whose first invoice gets id 1
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Create an empty store that starts allocating at `next_id`
    pub fn with_next_id(next_id: InvoiceId) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger {
                invoices: IndexMap::new(),
                next_id: next_id.max(1),
            })),
        }
    }

    /// Number of invoices currently held
    pub fn len(&self) -> InvoiceResult<usize> {
        Ok(self.read(Operation::List)?.invoices.len())
    }

    pub fn is_empty(&self) -> InvoiceResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self, operation: Operation) -> InvoiceResult<RwLockReadGuard<'_, Ledger>> {
        self.ledger
            .read()
            .map_err(|e| InvoiceError::internal(operation, format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self, operation: Operation) -> InvoiceResult<RwLockWriteGuard<'_, Ledger>> {
        self.ledger
            .write()
            .map_err(|e| InvoiceError::internal(operation, format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for InMemoryInvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceService for InMemoryInvoiceStore {
    async fn list(&self) -> InvoiceResult<Vec<Invoice>> {
        let ledger = self.read(Operation::List)?;
        Ok(ledger.invoices.values().cloned().collect())
    }

    async fn get(&self, id: InvoiceId) -> InvoiceResult<Option<Invoice>> {
        let ledger = self.read(Operation::Get)?;
        Ok(ledger.invoices.get(&id).cloned())
    }

    async fn create(&self, fields: InvoiceFields) -> InvoiceResult<Invoice> {
        let mut ledger = self.write(Operation::Create)?;

        let id = ledger.next_id;
        ledger.next_id = id
            .checked_add(1)
            .ok_or_else(|| InvoiceError::internal(Operation::Create, "invoice ids exhausted"))?;

        let invoice = Invoice::new(id, fields);
        ledger.invoices.insert(id, invoice.clone());

        Ok(invoice)
    }

    async fn update(&self, id: InvoiceId, fields: InvoiceFields) -> InvoiceResult<Invoice> {
        let mut ledger = self.write(Operation::Update)?;

        let invoice = ledger
            .invoices
            .get_mut(&id)
            .ok_or(InvoiceError::NotFound { id })?;
        invoice.apply(fields);

        Ok(invoice.clone())
    }

    async fn delete(&self, id: InvoiceId) -> InvoiceResult<Invoice> {
        let mut ledger = self.write(Operation::Delete)?;

        // shift_remove keeps the remaining invoices in insertion order
        ledger
            .invoices
            .shift_remove(&id)
            .ok_or(InvoiceError::NotFound { id })
    }
}
