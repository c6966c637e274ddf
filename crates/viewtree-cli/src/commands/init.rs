use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::config::{Config, CONFIG_FILE};

pub fn execute(project: &Path) -> Result<()> {
    let path = project.join(CONFIG_FILE);

    if path.exists() {
        anyhow::bail!("{:?} already exists", path);
    }

    let rendered = Config::default().to_toml()?;
    fs::write(&path, rendered).with_context(|| format!("Failed to write {:?}", path))?;

    println!("{}", "Config created!".green().bold());
    println!("  {} {}", "✓".green(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        execute(dir.path()).unwrap();

        let config = Config::load_from_project(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[routes]\n").unwrap();

        assert!(execute(dir.path()).is_err());
        let content = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "[routes]\n");
    }
}
