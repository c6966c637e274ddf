/// Lazy iterator over the composed prefixes of a relative path, shallowest first
///
/// For `news/detail/comments`, yields: `news` → `news/detail` → `news/detail/comments`
///
/// This is the order in which an ancestor walk descends the route tree: the
/// first prefix names a root, every following one names a child of the
/// previous match.
///
/// # Performance
///
/// - **Allocations**: Zero (only borrows from input string)
/// - **Complexity**: O(n) over the whole iteration
///
/// # Examples
///
/// ```
/// use viewtree_router::path::PathPrefixes;
///
/// let prefixes: Vec<&str> = PathPrefixes::new("a/b/c").collect();
/// assert_eq!(prefixes, vec!["a", "a/b", "a/b/c"]);
/// ```
#[derive(Debug, Clone)]
pub struct PathPrefixes<'a> {
    path: &'a str,
    /// Byte offset where the search for the next `/` starts
    cursor: usize,
    done: bool,
}

impl<'a> PathPrefixes<'a> {
    /// Creates a prefix iterator; an empty path yields nothing
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            cursor: 0,
            done: path.is_empty(),
        }
    }
}

impl<'a> Iterator for PathPrefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.path[self.cursor..].find('/') {
            Some(offset) => {
                let end = self.cursor + offset;
                self.cursor = end + 1;
                Some(&self.path[..end])
            }
            None => {
                self.done = true;
                Some(self.path)
            }
        }
    }
}
