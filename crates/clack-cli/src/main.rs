//! Clack - read options from a session-scoped configuration store.

use clack_cli::config::OutputFormat;
use clack_cli::{commands, Cli, CliHandle, Config, Formatter};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Log to stderr so stdout carries only option values
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let color_flag = !cli.no_color;
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            let formatter = Formatter::new(OutputFormat::Table, color_flag);
            eprintln!("{}", formatter.error(&format!("Error: {}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> clack_cli::Result<bool> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    // The session owns the seeded store; command-line assignments win over the seed file
    let mut handle = CliHandle::with_store(config.options);
    for entry in cli.set {
        tracing::info!(name = %entry.name, "Setting option from command line");
        handle.set_option(entry.name, entry.value)?;
    }

    let stdout = std::io::stdout();
    commands::dispatch(cli.command, &handle, &formatter, &mut stdout.lock())
}
