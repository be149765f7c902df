//! Driven port for user lookups during authentication.

use async_trait::async_trait;

use crate::domain::user::User;

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-level cause, logged but never shown to the end user.
        message: String,
    },
    /// Query failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-level cause, logged but never shown to the end user.
        message: String,
    },
}

impl UserRepositoryError {
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

/// Port for user storage reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by exact email match, `None` when absent.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;
}
