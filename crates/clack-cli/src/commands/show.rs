//! Show command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::CliHandle;
use std::io::Write;

/// Execute the show command.
pub fn execute_show(handle: &CliHandle, formatter: &Formatter, out: &mut impl Write) -> Result<()> {
    let entries = handle.store().sorted_entries();
    let rendered = formatter.format_options(&entries)?;
    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_show_sorted_by_name() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut handle = CliHandle::new();
        handle.set_option("zeta", "1").unwrap();
        handle.set_option("alpha", "2").unwrap();

        let mut out = Vec::new();
        execute_show(&handle, &formatter, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "alpha=2\nzeta=1\n");
    }

    #[test]
    fn test_show_quiet_empty_store_prints_nothing() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let handle = CliHandle::new();

        let mut out = Vec::new();
        execute_show(&handle, &formatter, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_show_table_empty_store_prints_notice() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let handle = CliHandle::new();

        let mut out = Vec::new();
        execute_show(&handle, &formatter, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No options set.\n");
    }
}
