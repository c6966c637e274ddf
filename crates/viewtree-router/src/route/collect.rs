//! Route Entry Collector
//!
//! Turns discovery results into one [`RouteEntry`] per view directory, keyed
//! by base path in discovery order.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::path::{normalize_root, strip_param_tokens, to_param_path};
use crate::{ComponentRef, Meta, RawDiscovery, RouteEntry, RouteError, RouteOptions};

/// Metadata keys hoisted onto the route instead of staying in `meta`
const HOISTED_KEYS: [&str; 2] = ["beforeEnter", "redirect"];

/// Name given to the view at the root directory
const ROOT_NAME: &str = "index";

/// Collects discovered views into route entries
///
/// # Algorithm
///
/// 1. Strip `/<entry_file>` from the file path → base path
/// 2. Strip the view root from the base path → raw route path (`/` if empty)
/// 3. Rewrite bracket parameters → route path
/// 4. Name = raw path without leading `/` and parameter tokens (`index` for `/`);
///    the slash in front of a parameter directory stays
/// 5. Split metadata into `meta`, `beforeEnter` and `redirect`
///
/// Files that do not end with the entry file are skipped.
///
/// # Errors
///
/// [`RouteError::DuplicateBasePath`] when two discoveries resolve to the same
/// directory.
pub fn collect_entries(
    discovered: &[RawDiscovery],
    options: &RouteOptions,
) -> Result<IndexMap<String, RouteEntry>, RouteError> {
    let root = normalize_root(&options.root_path);
    let marker = format!("/{}", options.entry_file.trim_start_matches('/'));
    let mut entries = IndexMap::with_capacity(discovered.len());

    for discovery in discovered {
        let Some(base_path) = discovery.file_path.strip_suffix(marker.as_str()) else {
            debug!(file = %discovery.file_path, "skipping file that is not a view entry");
            continue;
        };

        if entries.contains_key(base_path) {
            return Err(RouteError::DuplicateBasePath {
                base_path: base_path.to_string(),
            });
        }

        let entry = build_entry(base_path, &root, discovery);
        debug!(base_path, path = %entry.path, name = %entry.name, "collected view");
        entries.insert(base_path.to_string(), entry);
    }

    Ok(entries)
}

fn build_entry(base_path: &str, root: &str, discovery: &RawDiscovery) -> RouteEntry {
    let raw = base_path.strip_prefix(root).unwrap_or(base_path);
    let raw = if raw.is_empty() { "/" } else { raw };

    let name = match raw {
        "/" => ROOT_NAME.to_string(),
        _ => strip_param_tokens(raw.trim_start_matches('/')).into_owned(),
    };

    let (meta, before_enter, redirect) = split_meta(discovery.meta.as_ref());

    RouteEntry {
        base_path: base_path.to_string(),
        dir_path: raw.to_string(),
        path: to_param_path(raw).into_owned(),
        name,
        meta,
        component: ComponentRef(discovery.file_path.clone()),
        before_enter,
        redirect,
    }
}

/// Separates hoisted keys from the rest of the metadata
///
/// Hoisted values are only kept when truthy.
pub(crate) fn split_meta(meta: Option<&Meta>) -> (Meta, Option<Value>, Option<Value>) {
    let Some(meta) = meta else {
        return (Meta::new(), None, None);
    };

    let rest = meta
        .iter()
        .filter(|(key, _)| !HOISTED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let hoist = |key: &str| meta.get(key).filter(|value| is_truthy(value)).cloned();

    (rest, hoist("beforeEnter"), hoist("redirect"))
}

/// Truthiness of a metadata value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
