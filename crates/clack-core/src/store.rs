//! Configuration store
//!
//! A mapping from option name to option value. Both are opaque text; the
//! store neither types nor validates values.

use crate::error::{ConfigError, Result};
use crate::option::OptionEntry;
use std::collections::HashMap;

/// String-keyed configuration for one session.
///
/// Invariants:
/// - names are unique and non-empty; the last write for a name wins
/// - an absent name is distinct from a name set to `""`
/// - iteration order is unspecified
///
/// The store is mutated only through [`ConfigStore::set_option`] (and
/// [`ConfigStore::apply`], which forwards to it). There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    options: HashMap<String, String>,
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a sequence of entries, applied in order.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyName` on the first entry with an empty name
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::new();
        for (name, value) in entries {
            store.set_option(name, value)?;
        }
        Ok(store)
    }

    /// Insert the option, or overwrite its value if already present.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyName` if `name` is empty; the store is
    /// left unchanged
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        self.options.insert(name, value.into());
        Ok(())
    }

    /// Set the option described by a parsed entry
    pub fn apply(&mut self, entry: OptionEntry) -> Result<()> {
        self.set_option(entry.name, entry.value)
    }

    /// Look up an option.
    ///
    /// Returns `None` when the option was never set. An option set to the
    /// empty string returns `Some("")`.
    pub fn get_option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Look up an option, treating a miss as an error.
    ///
    /// # Errors
    /// Returns `ConfigError::OptionNotFound` when the option was never set
    pub fn require_option(&self, name: &str) -> Result<&str> {
        self.get_option(name)
            .ok_or_else(|| ConfigError::OptionNotFound(name.to_string()))
    }

    /// Check whether an option has been set
    pub fn contains_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Number of options held
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when no option has been set
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// All entries sorted by name, for presentation
    pub fn sorted_entries(&self) -> Vec<OptionEntry> {
        let mut entries: Vec<OptionEntry> = self
            .options
            .iter()
            .map(|(name, value)| OptionEntry {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

impl TryFrom<HashMap<String, String>> for ConfigStore {
    type Error = ConfigError;

    fn try_from(options: HashMap<String, String>) -> Result<Self> {
        if options.contains_key("") {
            return Err(ConfigError::EmptyName);
        }
        Ok(Self { options })
    }
}
