use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use viewtree_router::RouteNode;

use super::{compile, route_count};
use crate::config::Config;

pub fn execute(project: &Path, config: &Config) -> Result<()> {
    let forest = compile(project, &config.routes)?;

    if forest.is_empty() {
        println!("{}", "⚠ No views found".yellow());
        return Ok(());
    }

    let mut lines = Vec::new();
    outline(&forest, 0, &mut lines);
    for line in lines {
        println!("{}", line);
    }

    println!();
    println!("{} routes", route_count(&forest));
    Ok(())
}

/// Indented `path  name  [flags]` lines, depth-first
fn outline(nodes: &[RouteNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        let mut line = format!("{}{}  {}", "  ".repeat(depth), node.path.cyan(), node.name.dimmed());
        if node.before_enter.is_some() {
            line.push_str(&format!("  {}", "[guard]".yellow()));
        }
        if node.redirect.is_some() {
            line.push_str(&format!("  {}", "[redirect]".yellow()));
        }
        lines.push(line);
        outline(&node.children, depth + 1, lines);
    }
}
