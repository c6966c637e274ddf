//! Route module: from discovered views to a nested forest
//!
//! - `pattern`: classification of routing path segments
//! - `collect`: flat `RouteEntry` records, one per view directory
//! - `nest`: depth-ordered attachment of entries into a forest
//! - `locate`: ancestor lookup inside a forest under construction

pub mod collect;
pub mod locate;
pub mod nest;
pub mod pattern;

pub use pattern::{classify_segment, Segment};
