//! Domain ports: the traits adapters implement.
//!
//! Driving ports ([`InvoiceMutations`], [`LoginService`]) are called by
//! inbound adapters; driven ports (repositories, the password hasher, the
//! listing cache, and the navigator) are implemented by outbound adapters.
//! Handlers therefore remain testable without a live framework or database.

mod invoice_mutations;
mod invoice_repository;
mod listing_cache;
mod login_service;
mod navigator;
mod password_hasher;
mod user_repository;

pub use invoice_mutations::InvoiceMutations;
pub use invoice_repository::{InvoiceRepository, InvoiceRepositoryError};
pub use listing_cache::ListingCache;
pub use login_service::LoginService;
pub use navigator::Navigator;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
pub use user_repository::{UserRepository, UserRepositoryError};

#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
#[cfg(test)]
pub use listing_cache::MockListingCache;
#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use user_repository::MockUserRepository;
