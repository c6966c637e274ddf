pub mod build;
pub mod init;
pub mod tree;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use viewtree_router::{build_routes, RouteNode};

use crate::config::RoutesConfig;
use crate::discover::discover;

/// Discovers views under `project` and compiles them into a route forest
pub fn compile(project: &Path, routes: &RoutesConfig) -> Result<Vec<RouteNode>> {
    let discovered = discover(project, routes)?;
    info!(views = discovered.len(), root = %routes.root_path, "discovered views");

    let forest = build_routes(&discovered, &routes.route_options())
        .context("Failed to build route tree")?;

    let attached = route_count(&forest);
    if attached < discovered.len() {
        info!(
            dropped = discovered.len() - attached,
            "some views could not be placed in the route tree and were left out"
        );
    }

    Ok(forest)
}

/// Number of routes in a forest, nested ones included
pub fn route_count(forest: &[RouteNode]) -> usize {
    forest.iter().map(RouteNode::count).sum()
}
