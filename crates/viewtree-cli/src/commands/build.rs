use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::{compile, route_count};
use crate::config::Config;
use crate::emit::render;

pub fn execute(project: &Path, config: &Config) -> Result<()> {
    let forest = compile(project, &config.routes)?;
    let rendered = render(&forest, config.output.format, config.output.space)?;

    let Some(write_path) = config.output.write_path.as_deref() else {
        print!("{}", rendered);
        return Ok(());
    };

    let target = project.join(write_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    fs::write(&target, rendered)
        .with_context(|| format!("Failed to write routes to {:?}", target))?;

    println!("{}", "Route table generated!".green().bold());
    println!();
    println!("  {} {} top-level routes", "✓".green(), forest.len());
    println!("  {} {} routes in total", "✓".green(), route_count(&forest));
    println!("  {} {}", "→".cyan(), target.display());

    Ok(())
}
