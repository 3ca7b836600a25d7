//! Session handle for one command-line invocation.
//!
//! A [`CliHandle`] exclusively owns its [`ConfigStore`]. There is no way to
//! move the store back out, so the store is released together with the
//! handle on every exit path: normal return, early `?` return, or unwinding.

use clack_core::{ConfigStore, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

static ACTIVE_SESSIONS: AtomicUsize = AtomicUsize::new(0);

/// One command-line session.
#[derive(Debug)]
pub struct CliHandle {
    store: ConfigStore,
}

impl CliHandle {
    /// Open a session with an empty store.
    pub fn new() -> Self {
        Self::with_store(ConfigStore::new())
    }

    /// Open a session that takes ownership of a pre-populated store.
    pub fn with_store(store: ConfigStore) -> Self {
        let active = ACTIVE_SESSIONS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(options = store.len(), active, "Session opened");
        Self { store }
    }

    /// Set an option for the rest of the session.
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.store.set_option(name, value)
    }

    /// Read an option; `None` when it was never set.
    pub fn get_option(&self, name: &str) -> Option<&str> {
        self.store.get_option(name)
    }

    /// Read an option, treating a miss as an error.
    pub fn require_option(&self, name: &str) -> Result<&str> {
        self.store.require_option(name)
    }

    /// Borrow the session's store for read-only consumers.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Number of sessions currently alive in this process.
    pub fn active_sessions() -> usize {
        ACTIVE_SESSIONS.load(Ordering::SeqCst)
    }
}

impl Default for CliHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CliHandle {
    fn drop(&mut self) {
        let active = ACTIVE_SESSIONS.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!(options = self.store.len(), active, "Session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clack_core::ConfigError;

    #[test]
    fn test_new_session_has_empty_store() {
        let handle = CliHandle::new();
        assert!(handle.store().is_empty());
    }

    #[test]
    fn test_with_store_keeps_seeded_options() {
        let store = ConfigStore::from_entries([("editor", "vim")]).unwrap();
        let handle = CliHandle::with_store(store);
        assert_eq!(handle.get_option("editor"), Some("vim"));
    }

    #[test]
    fn test_set_through_handle_overrides_seed() {
        let store = ConfigStore::from_entries([("editor", "vim")]).unwrap();
        let mut handle = CliHandle::with_store(store);

        handle.set_option("editor", "helix").unwrap();
        assert_eq!(handle.get_option("editor"), Some("helix"));
        assert_eq!(handle.store().len(), 1);
    }

    #[test]
    fn test_require_option_miss() {
        let handle = CliHandle::default();
        assert_eq!(
            handle.require_option("pager"),
            Err(ConfigError::OptionNotFound("pager".to_string()))
        );
    }
}
