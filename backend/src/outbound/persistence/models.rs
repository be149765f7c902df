//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements for
//! queries and mutations.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{invoices, users};

/// Insertable struct for creating invoice records.
///
/// `id` is absent: the database default generates it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invoices)]
pub(crate) struct NewInvoiceRow<'a> {
    pub customer_id: &'a str,
    pub amount: i64,
    pub status: &'a str,
    pub date: NaiveDate,
}

/// Changeset struct for updating the mutable invoice columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = invoices)]
pub(crate) struct InvoiceChangesRow<'a> {
    pub customer_id: &'a str,
    pub amount: i64,
    pub status: &'a str,
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}
