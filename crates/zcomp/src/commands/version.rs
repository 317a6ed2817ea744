//! Version information

use anyhow::Result;
use colored::Colorize;

use crate::cli::VersionCommands;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run(cmd: Option<VersionCommands>) -> Result<()> {
    match cmd {
        None => println!("{} {}", "zcomp".bold(), format!("v{VERSION}").dimmed()),
        Some(VersionCommands::Short) => println!("{VERSION}"),
        Some(VersionCommands::Json) => println!("{}", version_json()?),
    }
    Ok(())
}

fn version_json() -> Result<String> {
    Ok(serde_json::to_string(&serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": VERSION,
    }))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_json() {
        let json: serde_json::Value = serde_json::from_str(&version_json().unwrap()).unwrap();
        assert_eq!(json["name"], "zcomp");
        assert_eq!(json["version"], VERSION);
    }
}
