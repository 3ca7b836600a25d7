//! Error types for store operations

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while reading or writing options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option names must contain at least one character
    #[error("Option name cannot be empty")]
    EmptyName,

    /// Lookup miss surfaced as an error
    #[error("Option '{0}' is not set")]
    OptionNotFound(String),

    /// Text that is not of the form `name=value`
    #[error("Invalid assignment '{0}': expected NAME=VALUE")]
    InvalidAssignment(String),
}
