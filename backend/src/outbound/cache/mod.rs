//! In-process listing cache adapter.
//!
//! Implements the `ListingCache` port with a per-path generation counter.
//! Invalidating a path bumps its generation; readers that captured an
//! earlier generation know their rendered listing is stale and must refetch.
//! State lives in process memory, so a restart implicitly invalidates
//! everything.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::domain::ports::ListingCache;

/// Generation-counting cache shared across request handlers.
#[derive(Debug, Default)]
pub struct InProcessListingCache {
    generations: RwLock<HashMap<String, u64>>,
}

impl InProcessListingCache {
    /// Create an empty cache; every path starts at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation for the path.
    pub fn generation(&self, path: &str) -> u64 {
        self.read_lock().get(path).copied().unwrap_or(0)
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, u64>> {
        // A poisoned lock only means another handler panicked mid-bump;
        // the counter itself is still usable.
        self.generations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ListingCache for InProcessListingCache {
    fn invalidate(&self, path: &str) {
        let mut generations = self
            .generations
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let generation = generations.entry(path.to_owned()).or_insert(0);
        *generation += 1;
        debug!(path, generation = *generation, "listing invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unseen_paths_start_at_generation_zero() {
        let cache = InProcessListingCache::new();
        assert_eq!(cache.generation("/dashboard/invoices"), 0);
    }

    #[rstest]
    fn each_invalidation_bumps_only_the_named_path() {
        let cache = InProcessListingCache::new();

        cache.invalidate("/dashboard/invoices");
        cache.invalidate("/dashboard/invoices");
        cache.invalidate("/dashboard/customers");

        assert_eq!(cache.generation("/dashboard/invoices"), 2);
        assert_eq!(cache.generation("/dashboard/customers"), 1);
        assert_eq!(cache.generation("/dashboard"), 0);
    }
}
