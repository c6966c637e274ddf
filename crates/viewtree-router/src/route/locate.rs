//! Parent Locator

use super::nest::{ForestBuilder, NodeId};
use crate::path::PathPrefixes;

/// Finds the node that should receive a child with stripped ancestor `ancestor`
///
/// The first chunk is looked up among the roots; every longer prefix must
/// match the stripped path of a child of the previous match (first match
/// wins). A root promoted from a parameter directory already stands for its
/// own placeholder level, so a prefix equal to its stripped path stays on
/// it. The walk starts from the roots on every call: children are only ever
/// appended, and shallower levels are complete before a deeper level is
/// attached.
///
/// Returns `None` as soon as one level cannot be resolved, or when the node
/// reached does not carry exactly `ancestor`.
///
/// # Examples
///
/// ```
/// use viewtree_router::{locate_parent, ComponentRef, ForestBuilder, Meta, RouteNode};
///
/// let node = |path: &str| RouteNode {
///     path: path.to_string(),
///     name: String::new(),
///     meta: Meta::new(),
///     component: ComponentRef(String::new()),
///     before_enter: None,
///     redirect: None,
///     children: Vec::new(),
/// };
///
/// let mut builder = ForestBuilder::new();
/// let news = builder.insert_root("news".into(), node("/news"), "news".into()).unwrap();
/// let detail = builder.attach(news, node("detail"), "news/detail".into());
/// let item = builder.attach(detail, node("detail/:id?"), "news/detail/".into());
///
/// assert_eq!(locate_parent(&builder, "news"), Some(news));
/// assert_eq!(locate_parent(&builder, "news/detail"), Some(detail));
/// assert_eq!(locate_parent(&builder, "news/detail/"), Some(item));
/// assert_eq!(locate_parent(&builder, "news/other"), None);
/// ```
pub fn locate_parent(builder: &ForestBuilder, ancestor: &str) -> Option<NodeId> {
    let mut prefixes = PathPrefixes::new(ancestor);
    let mut target = builder.root(prefixes.next()?)?;

    for composed in prefixes {
        if builder.raw_path(target) == Some(composed) {
            continue;
        }

        target = builder
            .children(target)
            .iter()
            .copied()
            .find(|&child| builder.raw_path(child) == Some(composed))?;
    }

    (builder.raw_path(target) == Some(ancestor)).then_some(target)
}
