//! Nesting Resolver
//!
//! Partitions entries into roots and pending children, then attaches the
//! children level by level. Construction happens in an arena
//! ([`ForestBuilder`]) so a node can be looked up and extended while the
//! tree is still growing; the arena is folded into owned [`RouteNode`]s at
//! the end.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::locate::locate_parent;
use super::pattern::classify_segment;
use crate::path::{nesting_chunks, stripped_chunks, to_camel_by};
use crate::{RouteEntry, RouteNode};

/// Index of a node inside a [`ForestBuilder`]
pub type NodeId = usize;

/// Depth of the shallowest child: a root plus one level
const FIRST_CHILD_DEPTH: usize = 2;

/// Key of the root view in the root map
const ROOT_KEY: &str = "/";

/// Forest under construction
///
/// Nodes live in an arena and refer to their children by id. The stripped
/// path of every node is kept in a side table used only for ancestor
/// matching; it never reaches the emitted [`RouteNode`]s.
#[derive(Debug, Default)]
pub struct ForestBuilder {
    nodes: Vec<RouteNode>,
    children: Vec<Vec<NodeId>>,
    roots: IndexMap<String, NodeId>,
    raw_paths: HashMap<NodeId, String>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a top-level node under `key`
    ///
    /// Returns `None` and leaves the forest untouched when `key` is taken.
    pub fn insert_root(&mut self, key: String, node: RouteNode, raw_path: String) -> Option<NodeId> {
        if self.roots.contains_key(&key) {
            return None;
        }

        let id = self.push(node, raw_path);
        self.roots.insert(key, id);
        Some(id)
    }

    /// Appends `node` to the children of `parent`, remembering its stripped path
    pub fn attach(&mut self, parent: NodeId, node: RouteNode, raw_path: String) -> NodeId {
        let id = self.push(node, raw_path);
        self.children[parent].push(id);
        id
    }

    /// Root registered under `key`
    pub fn root(&self, key: &str) -> Option<NodeId> {
        self.roots.get(key).copied()
    }

    /// Children of `id` in attachment order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stripped full path of a node
    pub fn raw_path(&self, id: NodeId) -> Option<&str> {
        self.raw_paths.get(&id).map(String::as_str)
    }

    pub fn node(&self, id: NodeId) -> Option<&RouteNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Folds the arena into owned trees, dropping the side table
    pub fn finish(self) -> Vec<RouteNode> {
        let Self {
            nodes,
            children,
            roots,
            raw_paths: _,
        } = self;

        // A child is always pushed after its parent, so walking ids backwards
        // completes every subtree before its parent claims it.
        let mut slots: Vec<Option<RouteNode>> = nodes.into_iter().map(Some).collect();
        for id in (0..slots.len()).rev() {
            let kids: Vec<RouteNode> = children[id]
                .iter()
                .filter_map(|&child| slots[child].take())
                .collect();
            if let Some(node) = slots[id].as_mut() {
                node.children = kids;
            }
        }

        roots
            .values()
            .filter_map(|&id| slots[id].take())
            .collect()
    }

    fn push(&mut self, node: RouteNode, raw_path: String) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.raw_paths.insert(id, raw_path);
        id
    }
}

/// Where an entry sits before attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Nothing but glued parameters after the first chunk: `/about[tab]`
    Root,
    /// Only parameter directories below the first chunk: `/news/[id]`
    ParamGroup,
    /// Anything deeper
    Nested,
}

/// A child waiting for its ancestor
#[derive(Debug)]
struct PendingChild {
    node: RouteNode,
    /// Stripped chunks joined by `/`
    raw_path: String,
    /// Stripped path of the expected parent
    ancestor: String,
    /// Number of stripped chunks
    depth: usize,
}

/// Resolves collected entries into a route forest
///
/// # Algorithm
///
/// 1. Each entry's directory path is split into nesting chunks (see
///    [`nesting_chunks`]); a parameter directory keeps an empty placeholder
///    chunk so it is one level deeper than the directory holding it
/// 2. An entry with only glued parameters after its first chunk is a root,
///    keyed by that chunk (`/` for the root view). The first root to claim a
///    key keeps it
/// 3. A parameter directory right below a top-level name (`/news/[id]`) nests
///    under the root of that name. When no such root exists, the shallowest
///    of them (first discovered on a tie) is promoted to root instead
/// 4. Every other entry becomes a pending child with a relative path (its
///    last static segment plus trailing parameters) and a camel-case name
/// 5. Starting at depth 2, each pass attaches the pending children of that
///    depth to the node found by [`locate_parent`], in discovery order
/// 6. A child whose ancestor does not resolve in its pass is dropped;
///    passes stop at the deepest pending level
pub fn resolve_forest(entries: IndexMap<String, RouteEntry>) -> Vec<RouteNode> {
    let placed: Vec<(RouteEntry, Vec<String>)> = entries
        .into_values()
        .map(|entry| {
            let chunks = nesting_chunks(&entry.dir_path);
            (entry, chunks)
        })
        .collect();

    let promoted = promoted_groups(&placed);
    let mut builder = ForestBuilder::new();
    let mut pending = Vec::new();

    for (index, (entry, chunks)) in placed.into_iter().enumerate() {
        let stripped = stripped_chunks(&chunks);
        let raw_path = stripped.join("/");

        if level(&chunks) == Level::Root || promoted.contains(&index) {
            let key = root_key(&chunks);
            if let Some(kept) = builder.root(key).and_then(|id| builder.node(id)) {
                warn!(key, kept = %kept.path, dropped = %entry.path, "top-level route key already taken");
                continue;
            }

            let path = entry.path.clone();
            let name = entry.name.clone();
            builder.insert_root(key.to_string(), RouteNode::from_entry(entry, path, name), raw_path);
            continue;
        }

        let depth = stripped.len();
        let ancestor = stripped[..depth.saturating_sub(1)].join("/");
        let path = child_path(&entry.path);
        let name = to_camel_by(&entry.name, "/");

        pending.push(PendingChild {
            node: RouteNode::from_entry(entry, path, name),
            raw_path,
            ancestor,
            depth,
        });
    }

    let deepest = pending.iter().map(|child| child.depth).max().unwrap_or(0);
    for depth in FIRST_CHILD_DEPTH..=deepest {
        if pending.is_empty() {
            break;
        }

        let mut deferred = Vec::with_capacity(pending.len());

        for child in pending {
            if child.depth != depth {
                deferred.push(child);
                continue;
            }

            match locate_parent(&builder, &child.ancestor) {
                Some(parent) => {
                    builder.attach(parent, child.node, child.raw_path);
                }
                None => {
                    debug!(path = %child.raw_path, ancestor = %child.ancestor, "dropping route without ancestor");
                }
            }
        }

        pending = deferred;
    }

    builder.finish()
}

fn level(chunks: &[String]) -> Level {
    let below = chunks.get(1..).unwrap_or_default();

    if below.iter().all(|chunk| classify_segment(chunk).is_param()) {
        Level::Root
    } else if below
        .iter()
        .all(|chunk| chunk.is_empty() || classify_segment(chunk).is_param())
    {
        Level::ParamGroup
    } else {
        Level::Nested
    }
}

/// Root key: the first chunk, or `/` when it is empty
fn root_key(chunks: &[String]) -> &str {
    chunks
        .first()
        .map(String::as_str)
        .filter(|chunk| !chunk.is_empty())
        .unwrap_or(ROOT_KEY)
}

/// Indices of parameter groups promoted to roots
///
/// Only groups whose key no plain root claims are candidates.
fn promoted_groups(placed: &[(RouteEntry, Vec<String>)]) -> HashSet<usize> {
    let root_keys: HashSet<&str> = placed
        .iter()
        .filter(|(_, chunks)| level(chunks) == Level::Root)
        .map(|(_, chunks)| root_key(chunks))
        .collect();

    let mut best: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, (_, chunks)) in placed.iter().enumerate() {
        let key = root_key(chunks);
        if level(chunks) != Level::ParamGroup || root_keys.contains(key) {
            continue;
        }

        let depth = stripped_chunks(chunks).len();
        best.entry(key)
            .and_modify(|current| {
                if depth < current.0 {
                    *current = (depth, index);
                }
            })
            .or_insert((depth, index));
    }

    best.into_values().map(|(_, index)| index).collect()
}

/// Relative path of a child: last static segment plus trailing parameters
///
/// `/news/detail/:id?` → `detail/:id?`
fn child_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let tail_start = segments
        .iter()
        .rposition(|segment| !classify_segment(segment).is_param())
        .unwrap_or(0);

    segments[tail_start..].join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{strip_param_tokens, to_param_path};
    use crate::{ComponentRef, Meta};
    use pretty_assertions::assert_eq;

    fn entry(dir: &str) -> RouteEntry {
        let name = match dir {
            "/" => "index".to_string(),
            _ => strip_param_tokens(dir.trim_start_matches('/')).into_owned(),
        };

        RouteEntry {
            base_path: format!("/src/views{}", dir),
            dir_path: dir.to_string(),
            path: to_param_path(dir).into_owned(),
            name,
            meta: Meta::new(),
            component: ComponentRef(format!("/src/views{}/index.vue", dir)),
            before_enter: None,
            redirect: None,
        }
    }

    fn entries(dirs: &[&str]) -> IndexMap<String, RouteEntry> {
        dirs.iter().map(|dir| (dir.to_string(), entry(dir))).collect()
    }

    fn node(path: &str) -> RouteNode {
        RouteNode::from_entry(entry("/n"), path.to_string(), "n".to_string())
    }

    fn chunks(dir: &str) -> Vec<String> {
        nesting_chunks(dir)
    }

    #[test]
    fn test_level() {
        assert_eq!(level(&chunks("/")), Level::Root);
        assert_eq!(level(&chunks("/about")), Level::Root);
        assert_eq!(level(&chunks("/about[tab]")), Level::Root);
        assert_eq!(level(&chunks("/news/[id]")), Level::ParamGroup);
        assert_eq!(level(&chunks("/archive/[year]/[month$]")), Level::ParamGroup);
        assert_eq!(level(&chunks("/news/detail")), Level::Nested);
        assert_eq!(level(&chunks("/news/[id]/edit")), Level::Nested);
    }

    #[test]
    fn test_root_key() {
        assert_eq!(root_key(&chunks("/")), "/");
        assert_eq!(root_key(&chunks("/about[tab]")), "about");
        assert_eq!(root_key(&chunks("/[id]")), "/");
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path("/news/detail"), "detail");
        assert_eq!(child_path("/news/detail/:id?"), "detail/:id?");
        assert_eq!(child_path("/a/b/:x/:y"), "b/:x/:y");
        assert_eq!(child_path("/users/:id/posts"), "posts");
    }

    #[test]
    fn test_builder_keeps_first_root() {
        let mut builder = ForestBuilder::new();
        let first = builder.insert_root("news".into(), node("/news"), "news".into());

        assert!(first.is_some());
        assert_eq!(builder.insert_root("news".into(), node("/news/:id"), "news".into()), None);
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_builder_finish_nests_and_drops_side_table() {
        let mut builder = ForestBuilder::new();
        let news = builder.insert_root("news".into(), node("/news"), "news".into()).unwrap();
        let detail = builder.attach(news, node("detail"), "news/detail".into());
        builder.attach(detail, node("comments"), "news/detail/comments".into());

        assert_eq!(builder.len(), 3);
        assert_eq!(builder.raw_path(detail), Some("news/detail"));
        assert_eq!(builder.raw_path(news), Some("news"));

        let forest = builder.finish();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children[0].path, "detail");
        assert_eq!(forest[0].children[0].children[0].path, "comments");
    }

    #[test]
    fn test_resolve_root_keys() {
        let forest = resolve_forest(entries(&["/", "/about", "/user/[id]"]));

        let paths: Vec<&str> = forest.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/user/:id"]);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_resolve_child_names_are_camel_case() {
        let forest = resolve_forest(entries(&["/news", "/news/detail"]));

        assert_eq!(forest[0].children[0].name, "newsDetail");
        assert_eq!(forest[0].name, "news");
    }

    #[test]
    fn test_resolve_param_directory_nests_under_static_parent() {
        let forest = resolve_forest(entries(&["/news/[id]", "/news"]));

        assert_eq!(forest.len(), 1);
        let news = &forest[0];
        assert_eq!(news.path, "/news");
        assert_eq!(news.children.len(), 1);
        assert_eq!(news.children[0].path, "news/:id");
        assert_eq!(news.children[0].name, "news/");
    }

    #[test]
    fn test_resolve_promotes_shallowest_param_group() {
        let forest = resolve_forest(entries(&["/user/[id]/[tab]", "/user/[id]"]));

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].path, "/user/:id");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].path, "user/:id/:tab");
    }

    #[test]
    fn test_resolve_drops_sibling_param_group_without_parent() {
        let forest = resolve_forest(entries(&["/user/[id]", "/user/[name]"]));

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].path, "/user/:id");
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_resolve_keeps_first_root_on_key_clash() {
        let forest = resolve_forest(entries(&["/about", "/about[tab]"]));

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].path, "/about");
    }

    #[test]
    fn test_resolve_drops_orphans() {
        let forest = resolve_forest(entries(&["/news", "/missing/child", "/news/a/b"]));

        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_resolve_drops_child_of_leading_param() {
        let forest = resolve_forest(entries(&["/[id]", "/[id]/posts"]));

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].path, "/:id");
        assert!(forest[0].children.is_empty());
    }
}
