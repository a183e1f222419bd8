//! The invoice record and the editable field set

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store-assigned invoice identifier. Ids start at 1 and are never reused.
pub type InvoiceId = u64;

/// An invoice as stored and returned by the API
///
/// Serialized with camelCase keys: `id`, `customerName`, `amount`,
/// `dueDate`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_name: String,
    #[serde(serialize_with = "amount::serialize")]
    pub amount: f64,
    pub due_date: String,
    #[serde(serialize_with = "created_at::serialize")]
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a record from validated fields, stamped with the current time
    pub fn new(id: InvoiceId, fields: InvoiceFields) -> Self {
        Self::with_created_at(id, fields, Utc::now().trunc_subsecs(3))
    }

    /// Create a record with an explicit creation timestamp
    pub fn with_created_at(id: InvoiceId, fields: InvoiceFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: fields.customer_name,
            amount: fields.amount,
            due_date: fields.due_date,
            created_at,
        }
    }

    /// Replace the editable fields. `id` and `created_at` are untouched.
    pub fn apply(&mut self, fields: InvoiceFields) {
        self.customer_name = fields.customer_name;
        self.amount = fields.amount;
        self.due_date = fields.due_date;
    }

    /// The calendar part of `due_date`
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Whether the invoice is past due on `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_on().is_some_and(|due| due < today)
    }
}

/// The fields a client may set on create and update
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct InvoiceFields {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Customer name must be between 1 and 200 characters."
    ))]
    pub customer_name: String,
    pub amount: f64,
    pub due_date: String,
}

impl InvoiceFields {
    pub fn new(customer_name: impl Into<String>, amount: f64, due_date: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            amount,
            due_date: due_date.into(),
        }
    }
}

/// Amounts are written the way a JavaScript client expects numbers:
/// integral values without a fractional part (`250`, not `250.0`).
mod amount {
    use serde::Serializer;

    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub fn serialize<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if amount.fract() == 0.0 && amount.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(*amount as i64)
        } else {
            serializer.serialize_f64(*amount)
        }
    }
}

/// Timestamps always carry milliseconds: `2024-01-01T09:30:00.000Z`
mod created_at {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
