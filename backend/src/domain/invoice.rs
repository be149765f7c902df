//! Invoice aggregate and its value types.
//!
//! Amounts are carried as an integer number of cents end to end. The decimal
//! value entered on the form is converted during validation (see
//! [`crate::domain::invoice_form`]), never at storage time.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Payment received.
    Paid,
}

impl InvoiceStatus {
    /// Wire and database representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognised invoice status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invoice status must be pending or paid, got {value:?}")]
pub struct ParseInvoiceStatusError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for InvoiceStatus {
    type Err = ParseInvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(ParseInvoiceStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

/// A persisted invoice record.
///
/// ## Invariants
/// - `amount_cents` is strictly positive.
/// - `id` and `date` are assigned at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Database-generated identifier.
    #[schema(format = "uuid")]
    pub id: Uuid,
    /// Opaque reference to the owning customer.
    pub customer_id: String,
    /// Amount in minor currency units (cents).
    pub amount_cents: i64,
    /// Current lifecycle status.
    pub status: InvoiceStatus,
    /// Creation date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Fields persisted when creating an invoice; the identifier is assigned by
/// the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    /// Opaque reference to the owning customer.
    pub customer_id: String,
    /// Amount in minor currency units (cents).
    pub amount_cents: i64,
    /// Initial lifecycle status.
    pub status: InvoiceStatus,
    /// Creation date (the invocation day).
    pub date: NaiveDate,
}

/// Mutable fields of an existing invoice. `id` and `date` are deliberately
/// absent: they are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChanges {
    /// Opaque reference to the owning customer.
    pub customer_id: String,
    /// Amount in minor currency units (cents).
    pub amount_cents: i64,
    /// Lifecycle status.
    pub status: InvoiceStatus,
}
