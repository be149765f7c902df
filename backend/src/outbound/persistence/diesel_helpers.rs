//! Shared helpers for Diesel repository adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Whether the error indicates a lost or unusable connection rather than a
/// problem with the statement itself.
pub(crate) fn is_connection_error(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
            | DieselError::BrokenTransactionManager
    )
}

/// Extract a readable message from a Diesel error and emit debug context.
pub(crate) fn diesel_error_message(error: &DieselError, operation: &str) -> String {
    let error_message = error.to_string();
    debug!(%error_message, %operation, "diesel operation failed");
    error_message
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_is_not_a_connection_error() {
        assert!(!is_connection_error(&DieselError::NotFound));
    }

    #[rstest]
    fn broken_transaction_manager_is_a_connection_error() {
        assert!(is_connection_error(&DieselError::BrokenTransactionManager));
    }

    #[rstest]
    fn message_extraction_preserves_the_diesel_text() {
        let message = diesel_error_message(&DieselError::NotFound, "find invoice");
        assert_eq!(message, DieselError::NotFound.to_string());
    }
}
