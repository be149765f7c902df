//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling.
//!
//! Adapters here stay thin: they translate between Diesel rows and domain
//! types and map database failures onto the port error types. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) are internal and never
//! exposed to the domain layer.

pub(crate) mod diesel_helpers;
mod diesel_invoice_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_invoice_repository::DieselInvoiceRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
