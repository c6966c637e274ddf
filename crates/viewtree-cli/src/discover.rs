//! View discovery
//!
//! Walks the view root and reports every directory holding the entry
//! component, together with its metadata file when one exists.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use viewtree_router::{normalize_root, RawDiscovery};
use walkdir::WalkDir;

use crate::config::RoutesConfig;
use crate::meta;

/// Discovers views under `project`
///
/// Entries are returned in walk order (sorted by file name at every level)
/// so repeated runs over the same tree produce the same route order. File
/// paths are project-relative, `/`-separated and start with `/`.
pub fn discover(project: &Path, routes: &RoutesConfig) -> Result<Vec<RawDiscovery>> {
    let root = normalize_root(&routes.root_path);
    let views_dir = project.join(root.trim_start_matches('/'));

    if !views_dir.is_dir() {
        anyhow::bail!("View root {:?} does not exist or is not a directory", views_dir);
    }

    let mut discovered = Vec::new();

    for entry in WalkDir::new(&views_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {:?}", views_dir))?;

        if !entry.file_type().is_file() || entry.file_name() != routes.entry_file.as_str() {
            continue;
        }

        let file_path = project_relative(project, entry.path())?;
        let meta = match entry.path().parent() {
            Some(dir) => meta::load_for_dir(dir, &routes.meta_files)?,
            None => None,
        };

        debug!(file = %file_path, has_meta = meta.is_some(), "discovered view");
        discovered.push(RawDiscovery { file_path, meta });
    }

    Ok(discovered)
}

/// `/`-joined path of `path` below `project`, with a leading `/`
fn project_relative(project: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(project)
        .with_context(|| format!("{:?} is outside of {:?}", path, project))?;

    let joined = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(format!("/{}", joined))
}
