//! PostgreSQL-backed `InvoiceRepository` implementation using Diesel ORM.
//!
//! A thin adapter: each port operation issues exactly one statement and
//! translates between domain types and Diesel rows. No business logic lives
//! here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use crate::domain::{InvoiceChanges, NewInvoice};

use super::diesel_helpers::{diesel_error_message, is_connection_error};
use super::models::{InvoiceChangesRow, NewInvoiceRow};
use super::pool::{DbPool, PoolError};
use super::schema::invoices;

/// Diesel-backed implementation of the `InvoiceRepository` port.
#[derive(Clone)]
pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InvoiceRepositoryError {
    InvoiceRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> InvoiceRepositoryError {
    let message = diesel_error_message(&error, operation);
    if is_connection_error(&error) {
        InvoiceRepositoryError::connection(message)
    } else {
        InvoiceRepositoryError::query(message)
    }
}

#[async_trait]
impl InvoiceRepository for DieselInvoiceRepository {
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewInvoiceRow {
            customer_id: &invoice.customer_id,
            amount: invoice.amount_cents,
            status: invoice.status.as_str(),
            date: invoice.date,
        };

        diesel::insert_into(invoices::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert invoice"))?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &InvoiceChanges,
    ) -> Result<(), InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = InvoiceChangesRow {
            customer_id: &changes.customer_id,
            amount: changes.amount_cents,
            status: changes.status.as_str(),
        };

        diesel::update(invoices::table.filter(invoices::id.eq(id)))
            .set(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update invoice"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), InvoiceRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // A missing row deletes zero rows; that is not an error.
        diesel::delete(invoices::table.filter(invoices::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete invoice"))?;
        Ok(())
    }
}
