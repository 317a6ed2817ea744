//! Generate a completion script from a manifest

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;
use zcomp_core::{manifest, zsh};

pub struct GenerateArgs {
    pub manifest: PathBuf,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub quiet: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let root = manifest::load_from(&args.manifest)
        .with_context(|| format!("failed to load manifest {}", args.manifest.display()))?;
    let bin_name = args.name.as_deref().unwrap_or(&root.name);
    info!(command = %root.name, bin_name, "generating zsh completion");

    let Some(path) = &args.output else {
        zsh::write_script(&mut io::stdout().lock(), &root, bin_name)?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    zsh::write_script(&mut BufWriter::new(file), &root, bin_name)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if !args.quiet {
        eprintln!(
            "{} {}",
            "Wrote completion script to".green(),
            path.display().to_string().bold()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
name: tool
flags:
  - names: [o, output]
    usage: output file path
    kind: text
commands:
  - name: build
    usage: Build the project
"#;

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("tool.yaml");
        std::fs::write(&manifest, MANIFEST).unwrap();
        let output = dir.path().join("completions").join("_tool");

        run(GenerateArgs {
            manifest,
            output: Some(output.clone()),
            name: Some("tool-cli".into()),
            quiet: true,
        })
        .unwrap();

        let script = std::fs::read_to_string(&output).unwrap();
        assert!(script.starts_with("#compdef tool-cli\n"));
        assert!(script.contains("'(-o --output)'{-o,--output}'[output file path]:file:_files'"));
        assert!(script.contains("_tool_cli__build"));
        assert!(script.ends_with("compdef _tool_cli tool-cli\n"));
    }

    #[test]
    fn test_generate_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(GenerateArgs {
            manifest: dir.path().join("missing.yaml"),
            output: None,
            name: None,
            quiet: true,
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to load manifest"));
    }
}
