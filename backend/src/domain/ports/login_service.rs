//! Driving port for the credential authenticator.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::User;

/// Domain use-case port for credential checks.
///
/// `Ok(None)` is the ordinary rejected-login outcome and deliberately does
/// not distinguish a malformed payload, an unknown email, or a wrong
/// password. `Err` is reserved for faults such as a failed user lookup.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check the submitted credentials and return the matching user.
    async fn authorize(&self, email: &str, password: &str) -> Result<Option<User>, Error>;
}
