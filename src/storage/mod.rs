//! Storage implementations for invoices

pub mod in_memory;

pub use in_memory::InMemoryInvoiceStore;
