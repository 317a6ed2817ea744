//! zsh completion for zcomp itself

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use zcomp_core::host;
use zcomp_core::model::CommandNode;
use zcomp_core::zsh;

use crate::cli::Cli;

/// Write the zsh completion script for zcomp to stdout.
pub fn run() -> Result<()> {
    let cmd = Cli::command();
    let root = CommandNode::from(&cmd);
    zsh::write_script(&mut io::stdout().lock(), &root, host::bin_name(&cmd))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> String {
        host::generate(&Cli::command())
    }

    #[test]
    fn test_lists_public_commands_only() {
        let script = script();
        assert!(script.starts_with("#compdef zcomp\n"));
        assert!(script.contains("        'generate:Generate a zsh completion script from a manifest'\n"));
        assert!(script.contains("        'inspect:"));
        assert!(script.contains("        'version:Show version information'\n"));
        assert!(!script.contains("completion:"));
        assert!(!script.contains("_zcomp__completion"));
        assert!(script.ends_with("compdef _zcomp zcomp\n"));
    }

    #[test]
    fn test_version_subcommands_not_expanded() {
        let script = script();
        assert!(script.contains("_zcomp__version() {"));
        assert!(!script.contains("_zcomp__version_commands"));
        assert!(!script.contains("_zcomp__version__short"));
    }

    #[test]
    fn test_flag_hints() {
        let script = script();
        assert!(script.contains(
            "'(-o --output)'{-o,--output}'[Output file path (defaults to stdout)]:file:_files'"
        ));
        assert!(script.contains("'--format[Report format (table|json)]:value:(table json)'"));
        assert!(script.contains("'(-q --quiet)'{-q,--quiet}'[Suppress non-essential output]'"));
    }
}
