//! HTTP inbound adapter exposing the form-action endpoints.

pub mod error;
pub mod invoices;
pub mod login;
pub mod navigator;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
