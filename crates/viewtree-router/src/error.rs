use thiserror::Error;

/// Hard failures of a route build
///
/// Everything else (missing metadata, unresolvable ancestors, malformed
/// bracket syntax) degrades locally and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate view directory: {base_path} was discovered more than once")]
    DuplicateBasePath { base_path: String },
}
