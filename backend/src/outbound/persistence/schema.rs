//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Invoice records.
    ///
    /// The `id` column is the primary key and defaults to a generated
    /// UUID v4, so inserts never supply it.
    invoices (id) {
        /// Primary key: UUID v4, database-generated.
        id -> Uuid,
        /// Opaque reference to the owning customer.
        customer_id -> Varchar,
        /// Amount in minor currency units (cents).
        amount -> Int8,
        /// Lifecycle status: `pending` or `paid`.
        status -> Varchar,
        /// Date the invoice was raised.
        date -> Date,
    }
}

diesel::table! {
    /// User accounts able to sign in.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name.
        name -> Varchar,
        /// Login email, unique across the table.
        email -> Varchar,
        /// One-way password hash.
        password -> Varchar,
    }
}
