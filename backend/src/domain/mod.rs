//! Domain types and services.
//!
//! Purpose: validation, the invoice mutation flow, and the credential
//! authenticator, all expressed against ports so adapters stay swappable.
//! Types are transport agnostic; inbound adapters own the HTTP mapping.

pub mod auth;
pub mod error;
pub mod invoice;
pub mod invoice_actions;
#[cfg(test)]
mod invoice_actions_tests;
pub mod invoice_form;
pub mod login;
pub mod ports;
pub mod user;

pub use self::auth::{Credentials, CredentialsError, MIN_PASSWORD_LENGTH};
pub use self::error::{Error, ErrorCode};
pub use self::invoice::{
    Invoice, InvoiceChanges, InvoiceStatus, NewInvoice, ParseInvoiceStatusError,
};
pub use self::invoice_actions::{INVOICES_LISTING_PATH, InvoiceActions};
pub use self::invoice_form::{
    ActionState, FieldErrors, FormFields, InvoiceInput, parse_invoice_fields,
};
pub use self::login::Authenticator;
pub use self::user::User;
