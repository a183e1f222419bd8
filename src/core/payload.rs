//! Boundary parsing of request bodies
//!
//! Clients send loosely-typed JSON: amounts arrive as numbers or numeric
//! strings, ids as numbers or strings. Parsing happens in three passes:
//!
//! 1. shape: the body must be a JSON object, otherwise the request is an
//!    internal failure of the current [`Operation`]
//! 2. presence: a field counts as missing when it is absent, `null`,
//!    `false`, `0` or `""`
//! 3. coercion: each field is converted explicitly and rejected when it
//!    cannot be, instead of degrading to a sentinel value

use crate::core::error::{InvoiceError, InvoiceResult, Operation, ValidationError};
use crate::core::invoice::{InvoiceFields, InvoiceId};
use chrono::NaiveDate;
use serde_json::{Map, Number, Value};
use validator::Validate;

pub const ID: &str = "id";
pub const CUSTOMER_NAME: &str = "customerName";
pub const AMOUNT: &str = "amount";
pub const DUE_DATE: &str = "dueDate";

const FIELDS: [&str; 3] = [CUSTOMER_NAME, AMOUNT, DUE_DATE];

/// Largest integer a JSON client can represent exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A JSON object body
pub type Body = Map<String, Value>;

/// Parse raw bytes as a JSON object
pub fn parse_object(bytes: &[u8], operation: Operation) -> InvoiceResult<Body> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(body)) => Ok(body),
        Ok(other) => Err(InvoiceError::internal(
            operation,
            format!("expected a JSON object, got {}", json_type(&other)),
        )),
        Err(e) => Err(InvoiceError::internal(operation, e)),
    }
}

/// Fields for a create request: `{customerName, amount, dueDate}`
pub fn create_fields(body: &Body) -> Result<InvoiceFields, ValidationError> {
    require(body, &FIELDS)?;
    invoice_fields(body)
}

/// Id and fields for an update request: `{id, customerName, amount, dueDate}`
pub fn update_fields(body: &Body) -> Result<(InvoiceId, InvoiceFields), ValidationError> {
    require(body, &[ID, CUSTOMER_NAME, AMOUNT, DUE_DATE])?;
    let id = coerce_id(&body[ID])?;
    Ok((id, invoice_fields(body)?))
}

/// Id for a delete request: `{id}`
pub fn delete_id(body: &Body) -> Result<InvoiceId, ValidationError> {
    if is_missing(body.get(ID)) {
        return Err(ValidationError::MissingId);
    }
    coerce_id(&body[ID])
}

/// JavaScript-style falsiness for JSON values
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn require(body: &Body, fields: &[&'static str]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .copied()
        .filter(|field| is_missing(body.get(*field)))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

fn invoice_fields(body: &Body) -> Result<InvoiceFields, ValidationError> {
    let fields = InvoiceFields {
        customer_name: coerce_customer_name(&body[CUSTOMER_NAME])?,
        amount: coerce_amount(&body[AMOUNT])?,
        due_date: coerce_due_date(&body[DUE_DATE])?,
    };
    fields.validate()?;
    Ok(fields)
}

fn coerce_customer_name(value: &Value) -> Result<String, ValidationError> {
    let name = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Err(ValidationError::InvalidCustomerName),
    };

    if name.trim().is_empty() {
        return Err(ValidationError::BlankCustomerName);
    }
    Ok(name)
}

fn coerce_amount(value: &Value) -> Result<f64, ValidationError> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount
        .filter(|a| a.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount {
            value: value.to_string(),
        })
}

fn coerce_due_date(value: &Value) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidDueDate {
        value: value.to_string(),
    };
    let Value::String(s) = value else {
        return Err(invalid());
    };

    if is_date_like(s) {
        Ok(s.clone())
    } else {
        Err(invalid())
    }
}

/// `YYYY-MM-DD`, optionally followed by a time part after `T` or a space
fn is_date_like(s: &str) -> bool {
    let Some(date) = s.get(..10) else {
        return false;
    };
    let shaped = date.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    let calendar = shaped && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok();

    calendar && matches!(s.as_bytes().get(10), None | Some(b'T') | Some(b' '))
}

fn coerce_id(value: &Value) -> Result<InvoiceId, ValidationError> {
    let id = match value {
        Value::Number(n) => number_to_id(n),
        Value::String(s) => s.trim().parse::<InvoiceId>().ok(),
        _ => None,
    };

    id.filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::InvalidId {
            value: value.to_string(),
        })
}

fn number_to_id(n: &Number) -> Option<InvoiceId> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= MAX_SAFE_INTEGER)
            .map(|f| f as InvoiceId)
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
