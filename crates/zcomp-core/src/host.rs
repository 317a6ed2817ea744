//! Build the command tree from a `clap::Command`
//!
//! clap owns the real command definitions; this module only reads them.
//! Positional arguments and clap's own help arguments are left out (the
//! root function always offers `-h/--help`), and argument actions decide
//! the flag kind.

use clap::{Arg, ArgAction, Command};

use crate::model::{CommandNode, Flag, FlagKind};

impl From<&Command> for CommandNode {
    fn from(cmd: &Command) -> Self {
        CommandNode {
            name: cmd.get_name().to_string(),
            usage: cmd.get_about().map(|s| s.to_string()).unwrap_or_default(),
            aliases: cmd.get_all_aliases().map(str::to_string).collect(),
            hidden: cmd.is_hide_set(),
            flags: cmd.get_arguments().filter_map(flag).collect(),
            commands: cmd.get_subcommands().map(CommandNode::from).collect(),
        }
    }
}

/// Name the shell invokes the command by.
pub fn bin_name(cmd: &Command) -> &str {
    cmd.get_bin_name().unwrap_or_else(|| cmd.get_name())
}

/// Generate the zsh completion script for a clap command tree.
pub fn generate(cmd: &Command) -> String {
    crate::zsh::generate_as(&CommandNode::from(cmd), bin_name(cmd))
}

fn flag(arg: &Arg) -> Option<Flag> {
    if arg.is_positional() || arg.is_hide_set() {
        return None;
    }
    let kind = match arg.get_action() {
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong => return None,
        ArgAction::Set => FlagKind::Text,
        ArgAction::Append => FlagKind::RepeatedText,
        ArgAction::SetTrue | ArgAction::SetFalse | ArgAction::Count | ArgAction::Version => {
            FlagKind::Bool
        }
        _ => FlagKind::Other,
    };

    let names: Vec<String> = arg
        .get_short()
        .map(String::from)
        .into_iter()
        .chain(arg.get_long().map(str::to_string))
        .collect();
    if names.is_empty() {
        return None;
    }

    Some(Flag {
        names,
        usage: arg.get_help().map(|s| s.to_string()).unwrap_or_default(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> Command {
        Command::new("tool")
            .about("An example tool")
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Enable verbose output")
                    .action(ArgAction::Count),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .help("output file path")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("tag")
                    .short('t')
                    .help("Tag to apply")
                    .action(ArgAction::Append),
            )
            .arg(Arg::new("secret").long("secret").hide(true))
            .arg(Arg::new("target").help("Build target"))
            .subcommand(Command::new("build").about("Build the project").alias("b"))
            .subcommand(Command::new("internal").hide(true))
    }

    #[test]
    fn test_command_node_from_clap() {
        let node = CommandNode::from(&tool());
        assert_eq!(node.name, "tool");
        assert_eq!(node.usage, "An example tool");
        assert!(!node.hidden);

        let flags: Vec<&Vec<String>> = node.flags.iter().map(|f| &f.names).collect();
        assert_eq!(
            flags,
            vec![
                &vec!["v".to_string(), "verbose".to_string()],
                &vec!["output".to_string()],
                &vec!["t".to_string()],
            ]
        );
        assert_eq!(node.flags[0].kind, FlagKind::Bool);
        assert_eq!(node.flags[1].kind, FlagKind::Text);
        assert_eq!(node.flags[1].usage, "output file path");
        assert_eq!(node.flags[2].kind, FlagKind::RepeatedText);

        assert_eq!(node.commands.len(), 2);
        assert_eq!(node.commands[0].name, "build");
        assert_eq!(node.commands[0].aliases, vec!["b".to_string()]);
        assert!(node.commands[1].hidden);
    }

    #[test]
    fn test_help_arguments_are_skipped() {
        let cmd = Command::new("tool").arg(
            Arg::new("assist")
                .long("assist")
                .action(ArgAction::Help),
        );
        assert!(CommandNode::from(&cmd).flags.is_empty());
    }

    #[test]
    fn test_generate_from_clap() {
        let script = generate(&tool());
        assert!(script.starts_with("#compdef tool\n"));
        assert!(script.contains("'(-v --verbose)'{-v,--verbose}'[Enable verbose output]'"));
        assert!(script.contains("'--output[output file path]:file:_files'"));
        assert!(script.contains("'-t[Tag to apply]:value:'"));
        assert!(script.contains("                build|b)\n                    _tool__build\n"));
        assert!(!script.contains("internal"));
        assert!(!script.contains("secret"));
        assert!(script.ends_with("compdef _tool tool\n"));
    }

    #[test]
    fn test_bin_name_prefers_bin_name() {
        let cmd = Command::new("tool").bin_name("tool-cli");
        assert_eq!(bin_name(&cmd), "tool-cli");
        assert_eq!(bin_name(&Command::new("tool")), "tool");
    }
}
