//! Form parsing for invoice mutations.
//!
//! Raw form submissions arrive as an untyped field map. Parsing produces
//! either a validated [`InvoiceInput`] or a map of field errors; malformed
//! input is an expected, recoverable condition, so nothing here returns a
//! fault or panics. An earlier revision of the actions threw on parse
//! failure; the collected-errors shape below superseded it.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::invoice::InvoiceStatus;

/// Form field carrying the customer reference.
pub const CUSTOMER_ID_FIELD: &str = "customerId";
/// Form field carrying the decimal amount.
pub const AMOUNT_FIELD: &str = "amount";
/// Form field carrying the invoice status.
pub const STATUS_FIELD: &str = "status";

/// Message attached to a missing or empty customer reference.
pub const CUSTOMER_REQUIRED_MESSAGE: &str = "Please select a customer.";
/// Message attached to a missing, unparseable, or non-positive amount.
pub const AMOUNT_RANGE_MESSAGE: &str = "Please enter an amount greater than $0.";
/// Message attached to a missing or unrecognised status.
pub const STATUS_REQUIRED_MESSAGE: &str = "Please select an invoice status.";

/// Mapping from field name to the human-readable messages raised against it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Untyped field map extracted from a submitted form.
///
/// # Examples
/// ```
/// use backend::domain::FormFields;
///
/// let fields = FormFields::from_pairs([("amount", "45.50")]);
/// assert_eq!(fields.get("amount"), Some("45.50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Look up a raw field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Build a field map from name/value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

/// Validated invoice mutation input.
///
/// `id` and `date` never appear here: both are server-assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceInput {
    /// Opaque reference to the owning customer.
    pub customer_id: String,
    /// Amount converted to minor currency units (cents).
    pub amount_cents: i64,
    /// Requested lifecycle status.
    pub status: InvoiceStatus,
}

/// Outcome of a mutation, returned to the caller for re-rendering.
///
/// An empty state signals success; populated `errors` or `message` carry the
/// inline feedback rendered next to the originating form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionState {
    /// Field-scoped validation messages.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,
    /// Summary message for the whole submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionState {
    /// Build a failure state from collected field errors plus a summary.
    pub fn from_field_errors(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors,
            message: Some(message.into()),
        }
    }

    /// Build a state carrying only a summary message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::new(),
            message: Some(message.into()),
        }
    }

    /// Whether any field-scoped errors are present.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse the raw field map into validated mutation input.
///
/// All three fields are checked in one pass so the caller receives every
/// failure at once rather than the first encountered. The amount is coerced
/// from its decimal string form and converted to cents here, at validation
/// time.
pub fn parse_invoice_fields(fields: &FormFields) -> Result<InvoiceInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let customer_id = match fields.get(CUSTOMER_ID_FIELD).map(str::trim) {
        Some(value) if !value.is_empty() => Some(value.to_owned()),
        _ => {
            push_error(&mut errors, CUSTOMER_ID_FIELD, CUSTOMER_REQUIRED_MESSAGE);
            None
        }
    };

    let amount_cents = match fields
        .get(AMOUNT_FIELD)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
        .map(to_cents)
    {
        // Validate the converted value: sub-cent amounts round to zero.
        Some(cents) if cents > 0 => Some(cents),
        _ => {
            push_error(&mut errors, AMOUNT_FIELD, AMOUNT_RANGE_MESSAGE);
            None
        }
    };

    let status = match fields
        .get(STATUS_FIELD)
        .and_then(|raw| InvoiceStatus::from_str(raw).ok())
    {
        Some(status) => Some(status),
        None => {
            push_error(&mut errors, STATUS_FIELD, STATUS_REQUIRED_MESSAGE);
            None
        }
    };

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) => Ok(InvoiceInput {
            customer_id,
            amount_cents,
            status,
        }),
        _ => Err(errors),
    }
}

/// Convert a decimal currency value to cents, rounding half away from zero.
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}
