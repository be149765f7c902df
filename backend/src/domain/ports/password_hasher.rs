//! Driven port for one-way password comparison.

/// Error raised when a stored hash cannot be compared against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hash comparison failed: {message}")]
pub struct PasswordHasherError {
    /// Adapter-level cause, logged but never shown to the end user.
    pub message: String,
}

impl PasswordHasherError {
    /// Create a comparison error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for comparing a plain-text password against a stored one-way hash.
///
/// The stored value is never decrypted; implementations hash the candidate
/// and compare. A mismatch is `Ok(false)`, not an error; `Err` is reserved
/// for malformed hashes and similar adapter faults.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Whether `password` matches the stored `hash`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHasherError>;
}
