//! Driven port for client navigation after a successful mutation.

/// Port for issuing a client redirect.
///
/// The domain never builds HTTP responses; it announces the navigation
/// target through this port and the inbound adapter turns it into whatever
/// its transport calls a redirect.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Send the client to `path` once the mutation completes.
    fn redirect_to(&self, path: &str);
}
