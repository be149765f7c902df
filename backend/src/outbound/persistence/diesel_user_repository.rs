//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::User;
use crate::domain::ports::{UserRepository, UserRepositoryError};

use super::diesel_helpers::{diesel_error_message, is_connection_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    UserRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    let message = diesel_error_message(&error, "find user by email");
    if is_connection_error(&error) {
        UserRepositoryError::connection(message)
    } else {
        UserRepositoryError::query(message)
    }
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id,
        name: row.name,
        email: row.email,
        password_hash: row.password,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
            .map(|row| row.map(row_to_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn row_conversion_maps_the_password_column_to_the_hash() {
        let id = Uuid::new_v4();
        let user = row_to_user(UserRow {
            id,
            name: "User".to_owned(),
            email: "user@nextmail.com".to_owned(),
            password: "$2b$10$hash".to_owned(),
        });

        assert_eq!(user.id, id);
        assert_eq!(user.email, "user@nextmail.com");
        assert_eq!(user.password_hash, "$2b$10$hash");
    }

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let mapped = map_pool_error(PoolError::build("bad url"));
        assert!(matches!(mapped, UserRepositoryError::Connection { .. }));
    }
}
