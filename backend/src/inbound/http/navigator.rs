//! Request-scoped navigator capturing the redirect issued by a mutation.
//!
//! Actix handlers cannot "perform" a redirect mid-call the way the domain
//! announces one, so each request gets a recorder; after the mutation
//! returns, the handler drains it into a `303 See Other` response.

use std::sync::Mutex;

use crate::domain::ports::Navigator;

/// [`Navigator`] implementation that records the last redirect target.
#[derive(Debug, Default)]
pub struct RecordedRedirect {
    target: Mutex<Option<String>>,
}

impl RecordedRedirect {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded target, leaving the recorder empty.
    pub fn take(&self) -> Option<String> {
        self.lock_target().take()
    }

    fn lock_target(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        match self.target.lock() {
            Ok(guard) => guard,
            // A poisoned lock still holds a usable Option.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Navigator for RecordedRedirect {
    fn redirect_to(&self, path: &str) {
        *self.lock_target() = Some(path.to_owned());
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn records_and_drains_the_target() {
        let recorder = RecordedRedirect::new();
        assert_eq!(recorder.take(), None);

        recorder.redirect_to("/dashboard/invoices");
        assert_eq!(recorder.take(), Some("/dashboard/invoices".to_owned()));
        assert_eq!(recorder.take(), None);
    }

    #[test]
    fn later_redirects_replace_earlier_ones() {
        let recorder = RecordedRedirect::new();
        recorder.redirect_to("/a");
        recorder.redirect_to("/b");
        assert_eq!(recorder.take(), Some("/b".to_owned()));
    }
}
