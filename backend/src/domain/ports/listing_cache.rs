//! Driven port for marking cached listing views stale.

/// Port for invalidating a cached logical path.
///
/// Successful mutations call [`ListingCache::invalidate`] with the listing
/// path before any navigation is issued, so the destination view is fresh by
/// the time the client follows the redirect.
#[cfg_attr(test, mockall::automock)]
pub trait ListingCache: Send + Sync {
    /// Mark the cached view behind `path` stale.
    fn invalidate(&self, path: &str);
}
