//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{InvoiceMutations, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Invoice mutation use-cases.
    pub invoices: Arc<dyn InvoiceMutations>,
    /// Credential authenticator.
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Bundle the port implementations for handler injection.
    pub fn new(invoices: Arc<dyn InvoiceMutations>, login: Arc<dyn LoginService>) -> Self {
        Self { invoices, login }
    }
}
