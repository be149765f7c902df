//! Authentication primitives: the login credential shape.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

/// Minimum accepted password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Domain error returned when login payload values are invalid.
///
/// The authenticator never surfaces which variant occurred to the client;
/// both collapse into an ordinary rejected login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// Email did not satisfy basic address syntax.
    InvalidEmail,
    /// Password was shorter than [`MIN_PASSWORD_LENGTH`].
    PasswordTooShort,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::PasswordTooShort => {
                write!(f, "password must be at least {MIN_PASSWORD_LENGTH} characters")
            }
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Validated login credentials used by the authenticator.
///
/// ## Invariants
/// - `email` is trimmed and satisfies [`is_valid_email`].
/// - `password` holds at least [`MIN_PASSWORD_LENGTH`] characters and keeps
///   caller-provided whitespace to avoid surprising hash comparisons.
///
/// The password is wrapped in [`Zeroizing`] so the plain text is wiped when
/// the credentials are dropped; it is never logged or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let normalized = email.trim();
        if !is_valid_email(normalized) {
            return Err(CredentialsError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CredentialsError::PasswordTooShort);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Check basic email address syntax.
///
/// Intentionally conservative: one `@`, a non-empty local part, a domain
/// containing a dot with non-empty labels, and no whitespace anywhere.
/// Deliverability checks belong to an outer layer.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
