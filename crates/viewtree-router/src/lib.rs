//! # viewtree Router
//!
//! Compiles a flat set of directory-based view descriptors into a nested
//! route table. Every view directory carries one entry component; its
//! position in the directory tree decides where it lands in the route tree:
//!
//! - Static segments: `views/about/index.vue` → `/about`
//! - Required parameters: `views/news/[id]/index.vue` → `/news/:id`
//! - Optional parameters: `views/news/[id$]/index.vue` → `/news/:id?`
//! - Nesting: `views/news/detail/index.vue` → child `detail` of `/news`
//! - A parameter directory nests under the directory holding it:
//!   `views/news/[id]/index.vue` → child `news/:id` of `/news`
//!
//! `beforeEnter` and `redirect` found in a view's metadata are hoisted out of
//! `meta` onto the route itself.
//!
//! ## Pipeline
//!
//! ```text
//! RawDiscovery ──▶ collect_entries ──▶ IndexMap<base path, RouteEntry>
//!                                             │
//!                                             ▼
//!                 Vec<RouteNode> ◀── resolve_forest (+ locate_parent)
//! ```
//!
//! The whole build is synchronous and pure: no filesystem access happens in
//! this crate. Discovery and serialization live with the caller.
//!
//! ## Example
//!
//! ```
//! use viewtree_router::{build_routes, RawDiscovery, RouteOptions};
//!
//! let discovered = vec![
//!     RawDiscovery::new("/src/views/index.vue"),
//!     RawDiscovery::new("/src/views/news/index.vue"),
//!     RawDiscovery::new("/src/views/news/detail/index.vue"),
//! ];
//!
//! let forest = build_routes(&discovered, &RouteOptions::default()).unwrap();
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest[1].path, "/news");
//! assert_eq!(forest[1].children[0].path, "detail");
//! assert_eq!(forest[1].children[0].name, "newsDetail");
//! ```

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod path;
pub mod route;

pub use error::RouteError;
pub use path::{
    nesting_chunks, normalize_root, strip_param_tokens, stripped_chunks, stripped_path, to_camel,
    to_camel_by, to_param_path, PathPrefixes, DEFAULT_ROOT,
};
pub use route::collect::collect_entries;
pub use route::locate::locate_parent;
pub use route::nest::{resolve_forest, ForestBuilder, NodeId};
pub use route::pattern::{classify_segment, Segment};

/// Metadata object attached to a view
pub type Meta = serde_json::Map<String, Value>;

/// Default entry component every view directory must contain
pub const DEFAULT_ENTRY_FILE: &str = "index.vue";

// ============================================================================
// Core Types
// ============================================================================

/// One view directory as reported by the discovery layer
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiscovery {
    /// Project-relative entry file path, e.g. `/src/views/news/index.vue`
    pub file_path: String,
    /// Parsed metadata found next to the entry file, if any
    pub meta: Option<Meta>,
}

impl RawDiscovery {
    /// Discovery without metadata
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            meta: None,
        }
    }

    /// Attaches metadata to this discovery
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Opaque reference to a view component
///
/// Carries the import specifier of the entry file. The router never
/// inspects it; emitters decide how it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(pub String);

impl ComponentRef {
    pub fn specifier(&self) -> &str {
        &self.0
    }
}

/// Options consumed by the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOptions {
    /// View root, normalized with [`normalize_root`]
    pub root_path: String,
    /// File name of the entry component inside each view directory
    pub entry_file: String,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            root_path: DEFAULT_ROOT.to_string(),
            entry_file: DEFAULT_ENTRY_FILE.to_string(),
        }
    }
}

impl RouteOptions {
    pub fn with_root(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn with_entry_file(mut self, entry_file: impl Into<String>) -> Self {
        self.entry_file = entry_file.into();
        self
    }
}

/// Flat record produced for every discovered view directory
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    /// Directory path without the entry file, e.g. `/src/views/news/[id]`
    pub base_path: String,
    /// Directory path below the view root, brackets intact, e.g. `/news/[id]`
    pub dir_path: String,
    /// Absolute route path with parameters rewritten, e.g. `/news/:id`
    pub path: String,
    /// Route name with parameter tokens removed, e.g. `news/detail/`
    pub name: String,
    /// Metadata without `beforeEnter` / `redirect`
    pub meta: Meta,
    pub component: ComponentRef,
    pub before_enter: Option<Value>,
    pub redirect: Option<Value>,
}

/// Element of the emitted route tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Absolute for roots, relative to the parent for children
    pub path: String,
    pub name: String,
    pub meta: Meta,
    pub component: ComponentRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_enter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Value>,
    /// Nested routes in attachment order
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Builds a childless node from an entry, overriding path and name
    pub(crate) fn from_entry(entry: RouteEntry, path: String, name: String) -> Self {
        Self {
            path,
            name,
            meta: entry.meta,
            component: entry.component,
            before_enter: entry.before_enter,
            redirect: entry.redirect,
            children: Vec::new(),
        }
    }

    /// Finds a direct child by its relative path
    pub fn child(&self, path: &str) -> Option<&RouteNode> {
        self.children.iter().find(|child| child.path == path)
    }

    /// Total number of routes in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(RouteNode::count).sum::<usize>()
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Compiles discovered views into a route forest
///
/// Runs [`collect_entries`] and then [`resolve_forest`]. Roots keep
/// discovery order; children keep the order they were attached in.
///
/// # Errors
///
/// [`RouteError::DuplicateBasePath`] when one directory is reported twice.
/// Every other irregularity is logged and dropped.
pub fn build_routes(
    discovered: &[RawDiscovery],
    options: &RouteOptions,
) -> Result<Vec<RouteNode>, RouteError> {
    let entries = collect_entries(discovered, options)?;
    Ok(resolve_forest(entries))
}
