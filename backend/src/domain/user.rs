//! The user record backing a credential.

use std::fmt;

use uuid::Uuid;

/// A registered user fetched by exact email match.
///
/// `password_hash` holds the stored one-way hash and only ever feeds the
/// password-comparison port. The struct is deliberately not serialisable and
/// its `Debug` output redacts the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, unique within the store.
    pub email: String,
    /// One-way hash of the password.
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
