//! Option entries: a single `name = value` pair

use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A named text value.
///
/// The textual form is `name=value`. Parsing splits on the first `=`, so the
/// value may be empty or contain further `=` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OptionEntry {
    /// Lookup key
    pub name: String,
    /// Opaque text value
    pub value: String,
}

impl OptionEntry {
    /// Create a new entry
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyName` if `name` is empty
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        Ok(Self {
            name,
            value: value.into(),
        })
    }
}

impl FromStr for OptionEntry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidAssignment(s.to_string()))?;

        if name.is_empty() {
            return Err(ConfigError::InvalidAssignment(s.to_string()));
        }

        Self::new(name, value)
    }
}

impl fmt::Display for OptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
