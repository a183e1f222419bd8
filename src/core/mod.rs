//! Core module containing the invoice model, input parsing and the store contract

pub mod error;
pub mod invoice;
pub mod payload;
pub mod service;

pub use error::{ConfigError, InvoiceError, InvoiceResult, Operation, ValidationError};
pub use invoice::{Invoice, InvoiceFields, InvoiceId};
pub use service::InvoiceService;
