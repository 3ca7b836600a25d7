//! CLI command definitions and argument parsing.

use clack_core::OptionEntry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clack - Read options from a seeded, session-scoped configuration store.
#[derive(Debug, Parser)]
#[command(name = "clack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed file path (TOML)
    #[arg(short, long, global = true, env = "CLACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Set an option for this invocation (repeatable, later wins)
    #[arg(short, long = "set", value_name = "NAME=VALUE", global = true)]
    pub set: Vec<OptionEntry>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the value of one option
    Get {
        /// Option name
        name: String,
    },

    /// Report whether an option is set
    Has {
        /// Option name
        name: String,
    },

    /// Print every option
    Show,
}

impl Cli {
    /// Log filter implied by the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
