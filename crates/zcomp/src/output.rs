//! Output formatting for flag reports
//!
//! Supports a table (default) and JSON.

use std::io::Write;

use anyhow::Result;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use serde::Serialize;

/// Output format for `zcomp inspect`
#[derive(Debug, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Columnar table (default)
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// How one flag of one command gets completed
#[derive(Debug, Clone, Serialize)]
pub struct FlagRow {
    /// Command path, e.g. `tool remote add`
    pub command: String,
    /// Flag names as typed, e.g. `-v, --verbose`
    pub flag: String,
    pub kind: String,
    /// Inferred value hint; empty for switches
    pub hint: String,
    /// Rendered `_arguments` spec
    pub spec: String,
}

/// Format and write flag rows to the given writer.
pub fn write_rows(writer: &mut dyn Write, rows: &[FlagRow], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(writer, rows),
        OutputFormat::Json => write_json(writer, rows),
    }
}

fn write_json(writer: &mut dyn Write, rows: &[FlagRow]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn write_table(writer: &mut dyn Write, rows: &[FlagRow]) -> Result<()> {
    if rows.is_empty() {
        writeln!(writer, "(no flags)")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Command", "Flag", "Kind", "Completes"]);

    for row in rows {
        let hint = if row.hint.is_empty() { "-" } else { row.hint.as_str() };
        table.add_row(vec![
            row.command.as_str(),
            row.flag.as_str(),
            row.kind.as_str(),
            hint,
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<FlagRow> {
        vec![
            FlagRow {
                command: "tool".into(),
                flag: "-v, --verbose".into(),
                kind: "bool".into(),
                hint: String::new(),
                spec: "'(-v --verbose)'{-v,--verbose}'[Verbose]'".into(),
            },
            FlagRow {
                command: "tool build".into(),
                flag: "--output".into(),
                kind: "text".into(),
                hint: "file path".into(),
                spec: "'--output[Output file]:file:_files'".into(),
            },
        ]
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows(), &OutputFormat::Json).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[1]["command"], "tool build");
        assert_eq!(parsed[1]["hint"], "file path");
        assert_eq!(parsed[0]["kind"], "bool");
    }

    #[test]
    fn test_write_table_with_data() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows(), &OutputFormat::Table).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Command"));
        assert!(output.contains("tool build"));
        assert!(output.contains("--output"));
        assert!(output.contains("file path"));
    }

    #[test]
    fn test_write_table_empty() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[], &OutputFormat::Table).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("no flags"));
    }
}
