//! Command implementations.

pub mod get;
pub mod has;
pub mod show;

pub use self::get::execute_get;
pub use self::has::execute_has;
pub use self::show::execute_show;

use crate::cli::Command;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::CliHandle;
use std::io::Write;

/// Run one command against a session.
///
/// Returns `false` when the command completed but reports a negative answer
/// (`has` on an unset option), which maps to a non-zero exit status.
pub fn dispatch(
    command: Option<Command>,
    handle: &CliHandle,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        None | Some(Command::Show) => execute_show(handle, formatter, out).map(|()| true),
        Some(Command::Get { name }) => execute_get(&name, handle, formatter, out).map(|()| true),
        Some(Command::Has { name }) => execute_has(&name, handle, formatter, out),
    }
}
