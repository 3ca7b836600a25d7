//! Has command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::CliHandle;
use std::io::Write;

/// Execute the has command, returning whether the option is set.
pub fn execute_has(
    name: &str,
    handle: &CliHandle,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<bool> {
    let present = handle.get_option(name).is_some();
    writeln!(out, "{}", formatter.format_presence(name, present)?)?;
    Ok(present)
}
