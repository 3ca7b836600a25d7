//! Get command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::CliHandle;
use clack_core::OptionEntry;
use std::io::Write;
use tracing::debug;

/// Execute the get command.
///
/// A missing option is an error, so the process exits non-zero.
pub fn execute_get(
    name: &str,
    handle: &CliHandle,
    formatter: &Formatter,
    out: &mut impl Write,
) -> Result<()> {
    let value = handle.require_option(name)?;
    debug!(name, "Option found");

    let entry = OptionEntry {
        name: name.to_string(),
        value: value.to_string(),
    };
    writeln!(out, "{}", formatter.format_value(&entry)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use clack_core::{ConfigError, ConfigStore};

    fn handle() -> CliHandle {
        let store = ConfigStore::from_entries([("editor", "vim"), ("pager", "")]).unwrap();
        CliHandle::with_store(store)
    }

    #[test]
    fn test_get_prints_value() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut out = Vec::new();

        execute_get("editor", &handle(), &formatter, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "vim\n");
    }

    #[test]
    fn test_get_empty_value() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut out = Vec::new();

        execute_get("pager", &handle(), &formatter, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn test_get_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let mut out = Vec::new();

        execute_get("editor", &handle(), &formatter, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!({ "name": "editor", "value": "vim" }));
    }

    #[test]
    fn test_get_missing_option() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut out = Vec::new();

        let result = execute_get("color", &handle(), &formatter, &mut out);
        assert!(matches!(
            result,
            Err(CliError::Store(ConfigError::OptionNotFound(ref name))) if name == "color"
        ));
        assert!(out.is_empty());
    }
}
