//! CLI argument definitions using clap

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::output::OutputFormat;

/// Generate zsh completion scripts from command trees
#[derive(Parser)]
#[command(name = "zcomp")]
#[command(author, version, about)]
#[command(long_about = "Generate zsh completion scripts from command trees.\n\n\
    Describe a tool's commands and flags in a YAML or JSON manifest and zcomp \
    writes a completion script that offers sub-commands and infers flag values \
    from their descriptions.")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a zsh completion script from a manifest
    Generate {
        /// Manifest file describing the command tree (YAML, or JSON by extension)
        manifest: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Command name to register the completion for (defaults to the root command name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show how every flag in a manifest will be completed
    Inspect {
        /// Manifest file describing the command tree (YAML, or JSON by extension)
        manifest: PathBuf,

        /// Report format (table|json)
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Generate the zsh completion script for zcomp
    #[command(hide = true)]
    #[command(long_about = "Generate the zsh completion script for zcomp.\n\n\
        To enable completions:\n\n\
        \x20 # make sure the completions directory is on fpath\n\
        \x20 echo 'fpath=(~/.zsh/completions $fpath)' >> ~/.zshrc\n\
        \x20 echo 'autoload -Uz compinit && compinit' >> ~/.zshrc\n\n\
        \x20 # write the script\n\
        \x20 mkdir -p ~/.zsh/completions\n\
        \x20 zcomp completion > ~/.zsh/completions/_zcomp\n\n\
        \x20 # reload zsh\n\
        \x20 exec zsh")]
    Completion,

    /// Show version information
    Version {
        #[command(subcommand)]
        command: Option<VersionCommands>,
    },
}

#[derive(clap::Subcommand)]
pub enum VersionCommands {
    /// Print only the version number
    Short,
    /// Print version information as JSON
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Generate {
                manifest,
                output,
                name,
            }) => crate::commands::generate::run(crate::commands::generate::GenerateArgs {
                manifest,
                output,
                name,
                quiet: self.quiet,
            }),
            Some(Commands::Inspect { manifest, format }) => {
                crate::commands::inspect::run(&manifest, &format)
            }
            Some(Commands::Completion) => crate::commands::completion::run(),
            Some(Commands::Version { command }) => crate::commands::version::run(command),
            None => {
                // Show help when no subcommand is given
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["zcomp", "generate", "tool.yaml", "-o", "_tool"]).unwrap();
        match cli.command {
            Some(Commands::Generate {
                manifest, output, ..
            }) => {
                assert_eq!(manifest, PathBuf::from("tool.yaml"));
                assert_eq!(output, Some(PathBuf::from("_tool")));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_completion_is_hidden() {
        let cmd = Cli::command();
        let completion = cmd.find_subcommand("completion").unwrap();
        assert!(completion.is_hide_set());
        assert_eq!(completion.get_arguments().count(), 0);
    }
}
