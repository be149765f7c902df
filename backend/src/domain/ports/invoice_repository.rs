//! Driven port for invoice persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceChanges, NewInvoice};

/// Errors raised by invoice repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvoiceRepositoryError {
    /// Repository connection could not be established.
    #[error("invoice repository connection failed: {message}")]
    Connection {
        /// Adapter-level cause, logged but never shown to the end user.
        message: String,
    },
    /// Statement failed during execution.
    #[error("invoice repository query failed: {message}")]
    Query {
        /// Adapter-level cause, logged but never shown to the end user.
        message: String,
    },
}

impl InvoiceRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for invoice storage.
///
/// Each method issues exactly one statement. Deleting a nonexistent
/// identifier is not an error: the statement simply affects zero rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Insert a new invoice; the identifier is database-generated.
    async fn insert(&self, invoice: &NewInvoice) -> Result<(), InvoiceRepositoryError>;

    /// Apply the given changes to the row matching `id`.
    async fn update(
        &self,
        id: Uuid,
        changes: &InvoiceChanges,
    ) -> Result<(), InvoiceRepositoryError>;

    /// Delete the row matching `id`.
    async fn delete(&self, id: Uuid) -> Result<(), InvoiceRepositoryError>;
}
