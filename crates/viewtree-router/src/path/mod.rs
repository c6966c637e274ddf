//! Path utilities for root canonicalisation, parameter rewriting and naming
//!
//! All functions are **pure** and total: input they do not recognise (an
//! unmatched bracket, a stray slash) passes through unchanged.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::route::pattern::classify_segment;

pub mod prefixes;
pub use prefixes::PathPrefixes;

/// View root used when none is configured
pub const DEFAULT_ROOT: &str = "/src/views";

/// `[name]` or `[name$]`, together with the slash in front of it if any
static BRACKET_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(/)?\[(\w+)(\$)?\]").unwrap());

/// Canonicalises a configured view root
///
/// # Rules
///
/// - Empty input → [`DEFAULT_ROOT`]
/// - One leading `.` is dropped: `./src/views` → `/src/views`
/// - A leading `/` is added when missing: `pages` → `/pages`
/// - One trailing `/` is dropped: `/pages/` → `/pages`
///
/// # Examples
///
/// ```
/// use viewtree_router::path::normalize_root;
///
/// assert_eq!(normalize_root(""), "/src/views");
/// assert_eq!(normalize_root("./src/pages/"), "/src/pages");
/// assert_eq!(normalize_root("pages"), "/pages");
/// ```
pub fn normalize_root(root: &str) -> Cow<'_, str> {
    if root.is_empty() {
        return Cow::Borrowed(DEFAULT_ROOT);
    }

    let root = root.strip_prefix('.').unwrap_or(root);

    if root.starts_with('/') {
        Cow::Borrowed(root.strip_suffix('/').unwrap_or(root))
    } else {
        let mut owned = format!("/{}", root);
        if owned.ends_with('/') {
            owned.pop();
        }
        Cow::Owned(owned)
    }
}

/// Rewrites bracket parameters into routing parameters
///
/// `[name]` becomes `:name`, `[name$]` becomes `:name?`. A token glued to the
/// previous segment gets its own segment. The root path `/` is returned as is.
///
/// # Examples
///
/// ```
/// use viewtree_router::path::to_param_path;
///
/// assert_eq!(to_param_path("/news/[id]"), "/news/:id");
/// assert_eq!(to_param_path("/news/[id$]"), "/news/:id?");
/// assert_eq!(to_param_path("/about[tab]"), "/about/:tab");
/// assert_eq!(to_param_path("/"), "/");
/// ```
pub fn to_param_path(path: &str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }

    BRACKET_PARAM.replace_all(path, |caps: &Captures| {
        let optional = if caps.get(3).is_some() { "?" } else { "" };
        format!("/:{}{}", &caps[2], optional)
    })
}

/// Removes bracket parameter tokens, keeping the slash in front of them
///
/// Used for route names, which must not depend on parameter values. The
/// slash left behind by a parameter directory keeps its name apart from
/// the name of the directory above it.
///
/// ```
/// use viewtree_router::path::strip_param_tokens;
///
/// assert_eq!(strip_param_tokens("news/detail/[id$]"), "news/detail/");
/// assert_eq!(strip_param_tokens("about[tab]"), "about");
/// assert_eq!(strip_param_tokens("about"), "about");
/// ```
pub fn strip_param_tokens(name: &str) -> Cow<'_, str> {
    BRACKET_PARAM.replace_all(name, "$1")
}

/// Splits a view directory path into nesting chunks
///
/// Every bracket token becomes a `:name` / `:name?` chunk. A token that is a
/// whole directory also leaves an empty placeholder chunk in its place, so
/// the directory still counts as one level of depth. A token glued to a name
/// does not. The root path `/` yields a single empty chunk.
///
/// ```
/// use viewtree_router::path::nesting_chunks;
///
/// assert_eq!(nesting_chunks("/news/detail/[id$]"), vec!["news", "detail", "", ":id?"]);
/// assert_eq!(nesting_chunks("/about[tab]"), vec!["about", ":tab"]);
/// assert_eq!(nesting_chunks("/"), vec![""]);
/// ```
pub fn nesting_chunks(dir_path: &str) -> Vec<String> {
    let rewritten = BRACKET_PARAM.replace_all(dir_path, |caps: &Captures| {
        let placeholder = if caps.get(1).is_some() { "/" } else { "" };
        let optional = if caps.get(3).is_some() { "?" } else { "" };
        format!("{}/:{}{}", placeholder, &caps[2], optional)
    });

    rewritten.split('/').skip(1).map(str::to_string).collect()
}

/// Nesting chunks with the parameter chunks dropped
///
/// Placeholders stay, so the length is the depth of the view.
pub fn stripped_chunks(chunks: &[String]) -> Vec<&str> {
    chunks
        .iter()
        .map(String::as_str)
        .filter(|chunk| !classify_segment(chunk).is_param())
        .collect()
}

/// Stripped chunks of a view directory path joined by `/`
///
/// ```
/// use viewtree_router::path::stripped_path;
///
/// assert_eq!(stripped_path("/news/detail"), "news/detail");
/// assert_eq!(stripped_path("/news/detail/[id$]"), "news/detail/");
/// assert_eq!(stripped_path("/user/[id]/posts"), "user//posts");
/// ```
pub fn stripped_path(dir_path: &str) -> String {
    stripped_chunks(&nesting_chunks(dir_path)).join("/")
}

/// Snake case to camel case: `test_a` → `testA`
pub fn to_camel(key: &str) -> String {
    to_camel_by(key, "_")
}

/// Camel-cases `key` using `separator` as the word boundary
///
/// A separator directly followed by an ASCII letter is removed and the letter
/// upper-cased. Any other separator is kept, so the function is idempotent.
///
/// ```
/// use viewtree_router::path::to_camel_by;
///
/// assert_eq!(to_camel_by("test/a", "/"), "testA");
/// assert_eq!(to_camel_by("news/2024", "/"), "news/2024");
/// ```
pub fn to_camel_by(key: &str, separator: &str) -> String {
    if separator.is_empty() {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    let mut rest = key;

    while let Some(pos) = rest.find(separator) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + separator.len()..];

        match after.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {
                out.push(c.to_ascii_uppercase());
                rest = &after[c.len_utf8()..];
            }
            _ => {
                out.push_str(separator);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_root_default() {
        assert_eq!(normalize_root(""), DEFAULT_ROOT);
        assert!(matches!(normalize_root(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_root_forms() {
        assert_eq!(normalize_root("/src/views"), "/src/views");
        assert_eq!(normalize_root("/src/views/"), "/src/views");
        assert_eq!(normalize_root("./src/views"), "/src/views");
        assert_eq!(normalize_root("src/views/"), "/src/views");
        assert!(matches!(normalize_root("/src/views"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_root_project_root() {
        assert_eq!(normalize_root("."), "");
        assert_eq!(normalize_root("./"), "");
    }

    #[test]
    fn test_to_param_path_required_and_optional() {
        assert_eq!(to_param_path("/news/[id]"), "/news/:id");
        assert_eq!(to_param_path("/news/[id$]"), "/news/:id?");
        assert_eq!(to_param_path("/a/[x]/b/[y$]"), "/a/:x/b/:y?");
    }

    #[test]
    fn test_to_param_path_root_untouched() {
        assert!(matches!(to_param_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_to_param_path_passthrough() {
        assert_eq!(to_param_path("/about"), "/about");
        assert_eq!(to_param_path("/news/[id"), "/news/[id");
        assert_eq!(to_param_path("/news/[my-id]"), "/news/[my-id]");
    }

    #[test]
    fn test_to_param_path_glued_token() {
        assert_eq!(to_param_path("/about[param]"), "/about/:param");
    }

    #[test]
    fn test_strip_param_tokens() {
        assert_eq!(strip_param_tokens("news/[id]"), "news/");
        assert_eq!(strip_param_tokens("news/[id$]/edit"), "news//edit");
        assert_eq!(strip_param_tokens("index"), "index");
    }

    #[test]
    fn test_nesting_chunks_directory_params() {
        assert_eq!(nesting_chunks("/news/[id]"), vec!["news", "", ":id"]);
        assert_eq!(
            nesting_chunks("/archive/[year]/[month$]"),
            vec!["archive", "", ":year", "", ":month?"]
        );
        assert_eq!(nesting_chunks("/[id]"), vec!["", ":id"]);
    }

    #[test]
    fn test_nesting_chunks_glued_params() {
        assert_eq!(nesting_chunks("/about[tab]"), vec!["about", ":tab"]);
        assert_eq!(nesting_chunks("/about[tab]/team"), vec!["about", ":tab", "team"]);
    }

    #[test]
    fn test_stripped_chunks_keep_placeholders() {
        let chunks = nesting_chunks("/news/detail/[id$]");
        assert_eq!(stripped_chunks(&chunks), vec!["news", "detail", ""]);

        let chunks = nesting_chunks("/about[tab]");
        assert_eq!(stripped_chunks(&chunks), vec!["about"]);
    }

    #[test]
    fn test_stripped_path_depth_differs_from_parent() {
        assert_eq!(stripped_path("/news"), "news");
        assert_eq!(stripped_path("/news/[id]"), "news/");
        assert_eq!(stripped_path("/news/[id]/edit"), "news//edit");
        assert_eq!(stripped_path("/"), "");
    }

    #[test]
    fn test_to_camel() {
        assert_eq!(to_camel("test_a"), "testA");
        assert_eq!(to_camel("user_profile_edit"), "userProfileEdit");
        assert_eq!(to_camel_by("test/a", "/"), "testA");
        assert_eq!(to_camel_by("news/detail/comments", "/"), "newsDetailComments");
    }

    #[test]
    fn test_to_camel_idempotent() {
        let once = to_camel_by("news/detail/2024/x", "/");
        assert_eq!(once, "newsDetail/2024X");
        assert_eq!(to_camel_by(&once, "/"), once);
    }

    #[test]
    fn test_to_camel_edge_cases() {
        assert_eq!(to_camel_by("trailing/", "/"), "trailing/");
        assert_eq!(to_camel_by("a//b", "/"), "a/B");
        assert_eq!(to_camel_by("plain", ""), "plain");
    }
}
