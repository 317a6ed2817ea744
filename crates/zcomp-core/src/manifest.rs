//! Command tree manifests
//!
//! A manifest describes a tool's commands in YAML (or JSON, for files ending
//! in `.json`) so that completions can be generated for tools zcomp cannot
//! introspect directly.
//!
//! Example:
//! ```yaml
//! name: tool
//! usage: An example tool
//! flags:
//!   - names: [v, verbose]
//!     usage: Enable verbose output
//!   - names: [output]
//!     usage: output file path
//!     kind: text
//! commands:
//!   - name: build
//!     usage: Build the project
//!     aliases: [b]
//! ```

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::{CommandNode, Flag};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Read(#[from] std::io::Error),

    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("failed to parse manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the root command '{0}' cannot be hidden")]
    HiddenRoot(String),

    #[error("command '{parent}' declares sub-command '{name}' more than once")]
    DuplicateCommand { parent: String, name: String },

    #[error("command '{command}' declares flag '{name}' more than once")]
    DuplicateFlag { command: String, name: String },

    #[error("command '{command}' has a flag without names")]
    EmptyFlagNames { command: String },

    #[error("command '{command}': flag {names:?} needs at most one short and one long name")]
    InvalidFlagNames { command: String, names: Vec<String> },

    #[error(
        "command '{command}': flag name '{name}' must be given without dashes, spaces, brackets or quotes"
    )]
    MalformedFlagName { command: String, name: String },
}

/// Manifest file format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Load and validate a manifest file.
pub fn load_from(path: &Path) -> Result<CommandNode, ManifestError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound(path.display().to_string())
        } else {
            ManifestError::Read(e)
        }
    })?;
    debug!(path = %path.display(), "loaded manifest");
    parse(&contents, Format::from_path(path))
}

/// Parse and validate manifest text.
pub fn parse(contents: &str, format: Format) -> Result<CommandNode, ManifestError> {
    let root: CommandNode = match format {
        Format::Yaml => serde_yaml::from_str(contents)?,
        Format::Json => serde_json::from_str(contents)?,
    };
    validate(&root)?;
    Ok(root)
}

/// Check the invariants the generator relies on: a visible root, unique
/// sibling command names, unique flag names per command, and flag name sets
/// of at most one short and one long name.
pub fn validate(root: &CommandNode) -> Result<(), ManifestError> {
    if root.hidden {
        return Err(ManifestError::HiddenRoot(root.name.clone()));
    }
    validate_command(root)
}

fn validate_command(cmd: &CommandNode) -> Result<(), ManifestError> {
    let mut flag_names = HashSet::new();
    for flag in &cmd.flags {
        validate_flag(cmd, flag)?;
        for name in &flag.names {
            if !flag_names.insert(name.as_str()) {
                return Err(ManifestError::DuplicateFlag {
                    command: cmd.name.clone(),
                    name: name.clone(),
                });
            }
        }
    }

    let mut command_names = HashSet::new();
    for sub in &cmd.commands {
        if !command_names.insert(sub.name.as_str()) {
            return Err(ManifestError::DuplicateCommand {
                parent: cmd.name.clone(),
                name: sub.name.clone(),
            });
        }
        validate_command(sub)?;
    }
    Ok(())
}

fn validate_flag(cmd: &CommandNode, flag: &Flag) -> Result<(), ManifestError> {
    if flag.names.is_empty() || flag.names.iter().any(|n| n.is_empty()) {
        return Err(ManifestError::EmptyFlagNames {
            command: cmd.name.clone(),
        });
    }
    if let Some(name) = flag.names.iter().find(|n| !is_plain_flag_name(n)) {
        return Err(ManifestError::MalformedFlagName {
            command: cmd.name.clone(),
            name: name.clone(),
        });
    }
    let shorts = flag.names.iter().filter(|n| n.chars().count() == 1).count();
    let longs = flag.names.len() - shorts;
    if shorts > 1 || longs > 1 {
        return Err(ManifestError::InvalidFlagNames {
            command: cmd.name.clone(),
            names: flag.names.clone(),
        });
    }
    Ok(())
}

/// Flag names are stored bare; the emitter adds the dashes and writes the
/// name unescaped into a single-quoted `_arguments` spec.
fn is_plain_flag_name(name: &str) -> bool {
    !name.starts_with('-')
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '[' | ']' | '\'' | '(' | ')'))
}
