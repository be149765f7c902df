//! bcrypt-backed password hasher adapter.

use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Implements the `PasswordHasher` port with bcrypt verification.
///
/// Verification is CPU-bound (tens of milliseconds at the usual cost
/// factor), which doubles as a brake on credential stuffing.
#[derive(Debug, Clone, Default)]
pub struct BcryptPasswordHasher;

impl BcryptPasswordHasher {
    /// Create a new hasher instance.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHasherError> {
        bcrypt::verify(password, hash).map_err(|err| PasswordHasherError::new(err.to_string()))
    }
}
