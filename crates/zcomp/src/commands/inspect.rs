//! Report how each flag in a manifest will be completed

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use zcomp_core::manifest;
use zcomp_core::model::{CommandNode, Flag};
use zcomp_core::zsh;

use crate::output::{FlagRow, OutputFormat, write_rows};

pub fn run(manifest_path: &Path, format: &OutputFormat) -> Result<()> {
    let root = manifest::load_from(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;
    let rows = flag_rows(&root);
    write_rows(&mut io::stdout().lock(), &rows, format)
}

/// One row per flag of every command the completion script reaches.
pub fn flag_rows(root: &CommandNode) -> Vec<FlagRow> {
    let mut rows = Vec::new();
    collect(root, &root.name, &mut rows);
    rows
}

fn collect(cmd: &CommandNode, path: &str, rows: &mut Vec<FlagRow>) {
    for flag in &cmd.flags {
        rows.push(FlagRow {
            command: path.to_string(),
            flag: display_names(flag),
            kind: flag.kind.to_string(),
            hint: zsh::flag_value(flag).map(|v| v.to_string()).unwrap_or_default(),
            spec: zsh::flag_spec(flag).unwrap_or_default(),
        });
    }

    if !cmd.expands_commands() {
        return;
    }
    for sub in cmd.visible_commands() {
        collect(sub, &format!("{path} {}", sub.name), rows);
    }
}

fn display_names(flag: &Flag) -> String {
    let mut names: Vec<String> = flag.short().map(|s| format!("-{s}")).into_iter().collect();
    names.extend(flag.long().map(|l| format!("--{l}")));
    names.join(", ")
}
