//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clack_core::OptionEntry;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of options.
    pub fn format_options(&self, entries: &[OptionEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_options_json(entries),
            OutputFormat::Table => Ok(self.format_options_table(entries)),
            OutputFormat::Quiet => Ok(Self::format_options_quiet(entries)),
        }
    }

    /// Format the value of a single option.
    pub fn format_value(&self, entry: &OptionEntry) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entry)?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(entry.value.clone()),
        }
    }

    /// Format the answer to a presence check.
    pub fn format_presence(&self, name: &str, present: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
                "name": name,
                "set": present,
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(present.to_string()),
        }
    }

    fn format_options_json(&self, entries: &[OptionEntry]) -> Result<String> {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|e| (e.name.clone(), serde_json::Value::String(e.value.clone())))
            .collect();

        Ok(serde_json::to_string_pretty(&map)?)
    }

    fn format_options_table(&self, entries: &[OptionEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No options set.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Value"]);

        for entry in entries {
            builder.push_record([entry.name.as_str(), entry.value.as_str()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// One `name=value` line per option.
    fn format_options_quiet(entries: &[OptionEntry]) -> String {
        entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<OptionEntry> {
        vec![
            OptionEntry::new("editor", "vim").unwrap(),
            OptionEntry::new("pager", "").unwrap(),
        ]
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_options(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["editor"], "vim");
        assert_eq!(parsed["pager"], "");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_options(&sample()).unwrap();
        assert_eq!(output, "editor=vim\npager=");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_options(&sample()).unwrap();
        assert!(output.contains("Name"));
        assert!(output.contains("editor"));
        assert!(output.contains("vim"));
    }

    #[test]
    fn test_empty_options() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_options(&[]).unwrap();
        assert!(output.contains("No options set"));
    }

    #[test]
    fn test_value_is_printed_raw() {
        let formatter = Formatter::new(OutputFormat::Table, true);
        let entry = OptionEntry::new("editor", "vim").unwrap();
        assert_eq!(formatter.format_value(&entry).unwrap(), "vim");
    }

    #[test]
    fn test_presence_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_presence("pager", false).unwrap();
        assert_eq!(output, r#"{"name":"pager","set":false}"#);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
