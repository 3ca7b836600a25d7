//! Clack CLI library.
//!
//! This library provides the command layer around the clack configuration
//! store: session handling, seed file loading, command execution, and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::CliHandle;
