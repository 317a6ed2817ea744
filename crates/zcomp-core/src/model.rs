//! Command tree model
//!
//! A read-only view of a tool's command hierarchy: commands with their
//! aliases, flags and sub-commands, in declaration order. Trees are built
//! once (from a `clap::Command` via [`crate::host`], or from a manifest file
//! via [`crate::manifest`]) and only read afterwards.

use serde::{Deserialize, Serialize};

/// Command names that exist in a tree but never show up in completions.
pub const EXCLUDED_COMMANDS: &[&str] = &["help", "completion"];

/// Commands whose children are leaves that are not completed separately.
const NON_EXPANDING_COMMANDS: &[&str] = &["version"];

/// A command or sub-command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandNode {
    /// Command name, unique among its siblings
    pub name: String,

    /// One-line description
    #[serde(default)]
    pub usage: String,

    /// Alternative names the command can be invoked by
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Hidden commands are skipped by the generator
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    /// Flags accepted by this command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,

    /// Sub-commands, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandNode>,
}

impl CommandNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn command(mut self, command: CommandNode) -> Self {
        self.commands.push(command);
        self
    }

    /// Whether the generator may list or traverse this command.
    pub fn is_visible(&self) -> bool {
        !self.hidden && !EXCLUDED_COMMANDS.contains(&self.name.as_str())
    }

    /// Visible sub-commands, in declaration order.
    pub fn visible_commands(&self) -> impl Iterator<Item = &CommandNode> {
        self.commands.iter().filter(|c| c.is_visible())
    }

    /// Whether the sub-commands of this command are offered as completions.
    pub fn expands_commands(&self) -> bool {
        !NON_EXPANDING_COMMANDS.contains(&self.name.as_str())
    }

    /// The command name followed by its aliases.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Declared value kind of a flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagKind {
    /// Switch without a value
    #[default]
    Bool,
    /// Free-form text, classified from name and usage
    Text,
    Integer,
    Duration,
    /// Text that may be given several times
    RepeatedText,
    /// Anything the host could not describe; treated as a switch
    Other,
}

impl FlagKind {
    pub fn takes_value(self) -> bool {
        !matches!(self, FlagKind::Bool | FlagKind::Other)
    }
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagKind::Bool => write!(f, "bool"),
            FlagKind::Text => write!(f, "text"),
            FlagKind::Integer => write!(f, "integer"),
            FlagKind::Duration => write!(f, "duration"),
            FlagKind::RepeatedText => write!(f, "repeated-text"),
            FlagKind::Other => write!(f, "other"),
        }
    }
}

/// A flag descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    /// Flag names without dashes: at most one single-character short name
    /// and at most one long name
    pub names: Vec<String>,

    /// Human-readable description
    #[serde(default)]
    pub usage: String,

    /// Declared value kind
    #[serde(default)]
    pub kind: FlagKind,
}

impl Flag {
    pub fn new<I, S>(names: I, kind: FlagKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            usage: String::new(),
            kind,
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn takes_value(&self) -> bool {
        self.kind.takes_value()
    }

    /// The single-character name, if any.
    pub fn short(&self) -> Option<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .find(|n| n.chars().count() == 1)
    }

    /// The multi-character name, if any.
    pub fn long(&self) -> Option<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .find(|n| n.chars().count() > 1)
    }

    /// The name used to classify the flag's value, preferring the long name.
    pub fn primary_name(&self) -> &str {
        self.long()
            .or_else(|| self.names.first().map(String::as_str))
            .unwrap_or_default()
    }
}
