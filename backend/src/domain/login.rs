//! Credential authenticator implementing the login driving port.
//!
//! The flow is deliberately quiet about why a login was rejected: a
//! malformed payload, an unknown email, and a wrong password all collapse
//! into the same `Ok(None)` so the response never leaks which field was
//! wrong. Only a failed user lookup is a fault.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::auth::Credentials;
use super::error::Error;
use super::ports::{LoginService, PasswordHasher, UserRepository};
use super::user::User;

/// Message surfaced when the user lookup itself fails.
pub const USER_FETCH_ERROR_MESSAGE: &str = "Failed to fetch user";

/// Authenticator wired to the user store and the hash-comparison port.
#[derive(Clone)]
pub struct Authenticator<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> Authenticator<U, H> {
    /// Create a new authenticator with the given ports.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<U, H> LoginService for Authenticator<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn authorize(&self, email: &str, password: &str) -> Result<Option<User>, Error> {
        let credentials = match Credentials::try_from_parts(email, password) {
            Ok(credentials) => credentials,
            Err(reason) => {
                debug!(%reason, "rejected malformed credentials");
                return Ok(None);
            }
        };

        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(|cause| {
                error!(%cause, "user lookup failed");
                Error::internal(USER_FETCH_ERROR_MESSAGE)
            })?;

        let Some(user) = user else {
            debug!("invalid credentials");
            return Ok(None);
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &user.password_hash)
            .map_err(|cause| {
                error!(%cause, "password comparison failed");
                Error::internal("password verification failed")
            })?;

        if matches {
            Ok(Some(user))
        } else {
            debug!("invalid credentials");
            Ok(None)
        }
    }
}
