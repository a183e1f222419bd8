//! Typed error handling for the invoice tracker
//!
//! Every failure a request can hit is an [`InvoiceError`]. Handlers return it
//! directly and axum turns it into a response through [`IntoResponse`].
//!
//! # Error Categories
//!
//! - [`InvoiceError::Validation`]: missing or malformed input (400)
//! - [`InvoiceError::NotFound`]: the referenced invoice id does not exist (404)
//! - [`InvoiceError::Internal`]: unparsable bodies and store failures (500)
//! - [`ConfigError`]: configuration file and environment problems at startup
//!
//! Error bodies are always `{"message": "<text>"}`. Internal causes are
//! logged and never sent to the client.
//!
//! # Example
//!
//! ```rust,ignore
//! match store.delete(id).await {
//!     Ok(invoice) => println!("removed {}", invoice.id),
//!     Err(InvoiceError::NotFound { id }) => println!("no invoice {}", id),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::core::invoice::InvoiceId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The API operation a request was performing
///
/// Internal failures are reported to the client with an operation-specific
/// message, so the operation travels with the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    RenderPage,
}

impl Operation {
    /// Client-facing message for an internal failure during this operation
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Error while fetching invoices.",
            Operation::Get => "Error while fetching the invoice.",
            Operation::Create => "Error while creating the invoice.",
            Operation::Update => "Error while updating the invoice.",
            Operation::Delete => "Error while deleting the invoice.",
            Operation::RenderPage => "Error while rendering the page.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::RenderPage => "render_page",
        };
        f.write_str(name)
    }
}

/// The main error type for invoice operations
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Input is missing a required field or a field has the wrong shape
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No invoice carries the requested id
    #[error("Invoice not found.")]
    NotFound { id: InvoiceId },

    /// Unexpected failure; `cause` is for the logs only
    #[error("{}", .operation.failure_message())]
    Internal { operation: Operation, cause: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl InvoiceError {
    /// Build an internal error for `operation` from any displayable cause
    pub fn internal(operation: Operation, cause: impl fmt::Display) -> Self {
        InvoiceError::Internal {
            operation,
            cause: cause.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InvoiceError::Validation(_) => StatusCode::BAD_REQUEST,
            InvoiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InvoiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            InvoiceError::Validation(e) => e.error_code(),
            InvoiceError::NotFound { .. } => "INVOICE_NOT_FOUND",
            InvoiceError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for InvoiceError {
    fn into_response(self) -> Response {
        match &self {
            InvoiceError::Internal { operation, cause } => {
                tracing::error!(%operation, %cause, "Invoice request failed");
            }
            InvoiceError::NotFound { id } => {
                tracing::warn!(invoice_id = id, "Invoice not found");
            }
            InvoiceError::Validation(e) => {
                tracing::warn!(code = e.error_code(), "Rejected invoice input: {}", e);
            }
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more of the required invoice fields is absent or falsy
    #[error("All fields are required.")]
    MissingFields { fields: Vec<&'static str> },

    /// A delete request carried no id
    #[error("Invoice id is required.")]
    MissingId,

    /// `customerName` is neither text nor a number
    #[error("Customer name must be text.")]
    InvalidCustomerName,

    /// `customerName` contains only whitespace
    #[error("Customer name must not be empty.")]
    BlankCustomerName,

    /// `amount` does not hold a finite number
    #[error("Amount must be a number.")]
    InvalidAmount { value: String },

    /// `dueDate` does not start with a `YYYY-MM-DD` calendar date
    #[error("Due date must be a date (YYYY-MM-DD).")]
    InvalidDueDate { value: String },

    /// `id` is not a positive integer
    #[error("Invoice id must be a positive integer.")]
    InvalidId { value: String },

    /// Field constraints reported by the validator
    #[error("{}", join_messages(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_messages(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "MISSING_FIELDS",
            ValidationError::MissingId => "MISSING_ID",
            ValidationError::InvalidCustomerName | ValidationError::BlankCustomerName => {
                "INVALID_CUSTOMER_NAME"
            }
            ValidationError::InvalidAmount { .. } => "INVALID_AMOUNT",
            ValidationError::InvalidDueDate { .. } => "INVALID_DUE_DATE",
            ValidationError::InvalidId { .. } => "INVALID_ID",
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldValidationError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}.", field)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    /// Configuration file is not valid YAML for [`crate::config::AppConfig`]
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    Parse {
        file: Option<String>,
        message: String,
    },

    /// A setting holds a value the server cannot use
    #[error("Invalid value '{value}' for {field}: {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;
