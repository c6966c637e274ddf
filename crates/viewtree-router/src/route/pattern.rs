//! Classification of routing path segments
//!
//! Works on paths that already went through
//! [`to_param_path`](crate::path::to_param_path), where parameters read
//! `:name` or `:name?`.

/// One segment of a routing path
///
/// # Examples
///
/// ```
/// use viewtree_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("news"), Segment::Static("news"));
/// assert_eq!(classify_segment(":id"), Segment::Required("id"));
/// assert_eq!(classify_segment(":id?"), Segment::Optional("id"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Optional parameter: `:id?`
    Optional(&'a str),
    /// Required parameter: `:id`
    Required(&'a str),
    /// Plain directory name
    Static(&'a str),
}

impl<'a> Segment<'a> {
    pub fn is_param(&self) -> bool {
        !matches!(self, Segment::Static(_))
    }

    /// Parameter name, or the text of a static segment
    pub fn name(&self) -> &'a str {
        match *self {
            Segment::Optional(name) | Segment::Required(name) | Segment::Static(name) => name,
        }
    }
}

/// Classifies a segment (pure function)
///
/// Anything not starting with `:` is static.
pub fn classify_segment(segment: &str) -> Segment<'_> {
    match segment.strip_prefix(':') {
        Some(param) => param
            .strip_suffix('?')
            .map(Segment::Optional)
            .unwrap_or(Segment::Required(param)),
        None => Segment::Static(segment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        let seg = classify_segment("about");
        assert_eq!(seg, Segment::Static("about"));
        assert!(!seg.is_param());
    }

    #[test]
    fn test_classify_required() {
        let seg = classify_segment(":id");
        assert_eq!(seg, Segment::Required("id"));
        assert!(seg.is_param());
        assert_eq!(seg.name(), "id");
    }

    #[test]
    fn test_classify_optional() {
        let seg = classify_segment(":slug?");
        assert_eq!(seg, Segment::Optional("slug"));
        assert_eq!(seg.name(), "slug");
    }

    #[test]
    fn test_classify_unrewritten_bracket_is_static() {
        assert_eq!(classify_segment("[id"), Segment::Static("[id"));
    }
}
