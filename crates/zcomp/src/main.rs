//! zcomp - Generate zsh completion scripts from command trees

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod output;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for generated scripts
    let filter = if cli.verbose > 0 {
        match cli.verbose {
            1 => "zcomp=debug,zcomp_core=debug",
            _ => "zcomp=trace,zcomp_core=trace",
        }
    } else if cli.quiet {
        "error"
    } else {
        "zcomp=info"
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    cli.run()
}
