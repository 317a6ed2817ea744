//! zsh completion script emission
//!
//! Walks a [`CommandNode`] tree depth-first and emits one `_arguments` based
//! function per command, plus a `<function>_commands` function listing the
//! sub-commands of every command that expands them. The whole script is
//! built in a single `String` owned by one generation call, so two calls on
//! the same tree always produce the same text.
//!
//! ```text
//! #compdef tool
//!
//! # tool zsh completion script (auto-generated)
//!
//! _tool() { ... }            root, dispatches on the first word
//! _tool_commands() { ... }   `_describe` list of visible sub-commands
//! _tool__build() { ... }     one function per sub-command, pre-order
//!
//! compdef _tool tool
//! ```

use std::fmt;
use std::io::Write;

use tracing::{debug, trace};

use crate::classify::{CompletionHint, classify};
use crate::error::Error;
use crate::model::{CommandNode, Flag, FlagKind};
use crate::sanitize::{Identifiers, child_identifier, commands_identifier, sanitize};

/// Help option added to the root function; selecting it ends completion.
pub const HELP_SPEC: &str = "'(- *)'{-h,--help}'[Show help information]'";

/// Generate the completion script for `root`, registered under its own name.
pub fn generate(root: &CommandNode) -> String {
    generate_as(root, &root.name)
}

/// Generate the completion script for `root`, registered under `bin_name`.
pub fn generate_as(root: &CommandNode, bin_name: &str) -> String {
    Generator::default().script(root, bin_name)
}

/// Generate the script and write it to `sink`.
///
/// Write failures are returned as is; bytes already flushed stay written.
pub fn write_script(sink: &mut dyn Write, root: &CommandNode, bin_name: &str) -> Result<(), Error> {
    let script = generate_as(root, bin_name);
    sink.write_all(script.as_bytes())?;
    sink.flush()?;
    Ok(())
}

#[derive(Default)]
struct Generator {
    out: String,
    ids: Identifiers,
}

impl Generator {
    fn script(mut self, root: &CommandNode, bin_name: &str) -> String {
        let id = self.ids.claim_command(sanitize(bin_name));

        self.out.push_str(&format!("#compdef {bin_name}\n\n"));
        self.out.push_str(&format!("# {bin_name} zsh completion script (auto-generated)\n\n"));
        self.node(root, &id, true);
        self.out.push_str(&format!("compdef {id} {bin_name}\n"));

        debug!(bytes = self.out.len(), "generated zsh completion script");
        self.out
    }

    /// Emit the function for `cmd`, then its list function and descendants
    /// when it expands its sub-commands.
    fn node(&mut self, cmd: &CommandNode, id: &str, is_root: bool) {
        let children: Vec<(&CommandNode, String)> = if cmd.expands_commands() {
            cmd.visible_commands()
                .map(|c| (c, self.ids.claim_command(child_identifier(id, &c.name))))
                .collect()
        } else {
            Vec::new()
        };

        self.function(cmd, id, is_root, &children);

        if children.is_empty() {
            return;
        }
        self.commands_function(id, &children);
        for (child, child_id) in &children {
            self.node(child, child_id, false);
        }
    }

    fn function(
        &mut self,
        cmd: &CommandNode,
        id: &str,
        is_root: bool,
        children: &[(&CommandNode, String)],
    ) {
        debug!(command = %cmd.name, function = id, "emitting completion function");

        let out = &mut self.out;
        out.push_str(&format!("{id}() {{\n"));
        out.push_str("    local curcontext=\"$curcontext\" state line\n");
        out.push_str("    typeset -A opt_args\n\n");

        let flags = flag_specs(cmd, is_root);
        if !flags.is_empty() {
            out.push_str("    local -a flags\n");
            out.push_str("    flags=(\n");
            for spec in &flags {
                out.push_str(&format!("        {spec}\n"));
            }
            out.push_str("    )\n\n");
        }

        out.push_str("    _arguments -C \\\n");
        if !flags.is_empty() {
            out.push_str("        $flags \\\n");
        }
        if children.is_empty() {
            out.push_str("        '*:file:_files'\n");
        } else {
            out.push_str(&format!("        '1: :{}' \\\n", commands_identifier(id)));
            out.push_str("        '*::arg:->args'\n");

            out.push_str("\n    case $state in\n");
            out.push_str("        args)\n");
            out.push_str("            case $line[1] in\n");
            for (child, child_id) in children {
                let names: Vec<&str> = child.all_names().collect();
                out.push_str(&format!("                {})\n", names.join("|")));
                out.push_str(&format!("                    {child_id}\n"));
                out.push_str("                    ;;\n");
            }
            out.push_str("            esac\n");
            out.push_str("            ;;\n");
            out.push_str("    esac\n");
        }

        out.push_str("}\n\n");
    }

    fn commands_function(&mut self, id: &str, children: &[(&CommandNode, String)]) {
        let out = &mut self.out;
        out.push_str(&format!("{}() {{\n", commands_identifier(id)));
        out.push_str("    local -a commands\n");
        out.push_str("    commands=(\n");
        for (child, _) in children {
            out.push_str(&format!(
                "        '{}:{}'\n",
                child.name,
                escape_quotes(&child.usage)
            ));
        }
        out.push_str("    )\n");
        out.push_str("    _describe -t commands 'commands' commands\n");
        out.push_str("}\n\n");
    }
}

/// `_arguments` specs for the flags of `cmd`, in declaration order and
/// without duplicates. The root also gets [`HELP_SPEC`].
fn flag_specs(cmd: &CommandNode, is_root: bool) -> Vec<String> {
    let mut specs: Vec<String> = Vec::new();
    for flag in &cmd.flags {
        if is_root && flag.long() == Some("help") {
            continue;
        }
        match flag_spec(flag) {
            Some(spec) if !specs.contains(&spec) => specs.push(spec),
            _ => {}
        }
    }
    if is_root {
        specs.push(HELP_SPEC.to_string());
    }
    specs
}

/// Render one flag as an `_arguments` spec, or `None` for a flag without names.
///
/// A flag with both a short and a long name becomes one spec that makes the
/// two names mutually exclusive: `'(-o --output)'{-o,--output}'[...]'`.
pub fn flag_spec(flag: &Flag) -> Option<String> {
    let usage = escape_description(&flag.usage);
    let value = value_spec(flag);

    if let (Some(short), Some(long)) = (flag.short(), flag.long()) {
        return Some(format!(
            "'(-{short} --{long})'{{-{short},--{long}}}'[{usage}]{value}'"
        ));
    }

    let name = flag.names.first()?;
    let dashes = if name.chars().count() == 1 { "-" } else { "--" };
    Some(format!("'{dashes}{name}[{usage}]{value}'"))
}

/// What a valued flag completes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Hint(CompletionHint),
    /// Message only; durations have no candidates to offer
    Duration,
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Hint(hint) => hint.fmt(f),
            FlagValue::Duration => write!(f, "duration"),
        }
    }
}

/// Completion for a flag's value, by declared kind. `None` for switches.
///
/// Only text flags go through the classifier.
pub fn flag_value(flag: &Flag) -> Option<FlagValue> {
    let hint = match flag.kind {
        FlagKind::Bool | FlagKind::Other => return None,
        FlagKind::Text => {
            let hint = classify(flag.primary_name(), &flag.usage);
            trace!(flag = flag.primary_name(), %hint, "classified flag");
            hint
        }
        FlagKind::Integer => CompletionHint::Number,
        FlagKind::Duration => return Some(FlagValue::Duration),
        FlagKind::RepeatedText => CompletionHint::Generic,
    };
    Some(FlagValue::Hint(hint))
}

/// Value part of a flag spec; empty for switches.
pub fn value_spec(flag: &Flag) -> String {
    match flag_value(flag) {
        None => String::new(),
        Some(FlagValue::Duration) => ":duration:".to_string(),
        Some(FlagValue::Hint(hint)) => hint_spec(&hint),
    }
}

/// `_arguments` value action for a completion hint.
pub fn hint_spec(hint: &CompletionHint) -> String {
    match hint {
        CompletionHint::Enumerated(values) => {
            let values: Vec<String> = values.iter().map(|v| escape_quotes(v)).collect();
            format!(":value:({})", values.join(" "))
        }
        CompletionHint::Url => ":url:".to_string(),
        CompletionHint::FilePath => ":file:_files".to_string(),
        CompletionHint::Number => ":number:".to_string(),
        CompletionHint::Generic => ":value:".to_string(),
    }
}

/// Make text safe inside a single-quoted zsh word.
fn escape_quotes(text: &str) -> String {
    text.replace('\n', " ").replace('\'', "'\\''")
}

/// Like [`escape_quotes`], and swap square brackets for parentheses since
/// `_arguments` reads `[...]` as the option description.
fn escape_description(text: &str) -> String {
    escape_quotes(text).replace('[', "(").replace(']', ")")
}
