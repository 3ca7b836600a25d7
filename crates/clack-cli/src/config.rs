//! Seed file loading for the CLI.
//!
//! The seed file is read-only: it pre-populates a session's store and sets
//! tool preferences, and is never written back.
//!
//! ```toml
//! [settings]
//! color = true
//! format = "table"
//!
//! [options]
//! editor = "vim"
//! port = 8080
//! ```

use crate::error::{CliError, Result};
use clack_core::ConfigStore;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed seed file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tool preferences
    pub settings: Settings,

    /// Options used to seed the session store
    pub options: ConfigStore,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (values only) format
    Quiet,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    settings: Settings,

    #[serde(default)]
    options: toml::Table,
}

impl Config {
    /// Default seed file location: `<config dir>/clack/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("clack").join("config.toml"))
    }

    /// Load the seed file.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and an empty config is returned otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No seed file found, starting with an empty store");
                    return Ok(Self::default());
                }
            },
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(
            path = %path.display(),
            options = config.options.len(),
            "Loaded seed file"
        );
        Ok(config)
    }

    /// Parse seed file contents.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;

        let mut options = ConfigStore::new();
        for (name, value) in raw.options {
            let text = option_text(&name, value)?;
            options.set_option(name, text)?;
        }

        Ok(Self {
            settings: raw.settings,
            options,
        })
    }
}

/// Convert a TOML scalar to the store's text form.
fn option_text(name: &str, value: toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        // Debug keeps the fractional part (`1.0`) and exponent form (`1e20`)
        toml::Value::Float(f) => Ok(format!("{f:?}")),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        other => Err(CliError::Config(format!(
            "Option '{}' must be a string, number or boolean, found {}",
            name,
            other.type_str()
        ))),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}
