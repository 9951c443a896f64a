//! Voronoi diagram divide-and-conquer merge step.
//!
//! Given two disjoint half-diagrams, `left` wholly left of `right`, [`merge`]
//! walks the dividing chain between their convex hulls and produces the
//! Voronoi diagram of their combined site set. This is the one operation a
//! divide-and-conquer Voronoi builder needs at every internal node of its
//! recursion; constructing the small-`n` base cases and driving the
//! recursion itself are a caller's concern.
//!
//! Cross-refs live in doc comments:
//! `crate::geometry` (predicates), `crate::hull` (tangent search),
//! `crate::region` (per-site crossing search), `crate::model` (the data
//! model shared by all of the above), `crate::merge` (the walk itself).

pub mod geometry;
pub mod hull;
pub mod merge;
pub mod model;
pub mod numeric;
pub mod region;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use merge::{merge as merge_diagrams, MergeError, Side};
pub use model::{Diagram, Edge, EdgeIndex, Site, SiteId};

/// Common imports for quick use in callers.
pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::merge::{merge as merge_diagrams, MergeError, Side};
    pub use crate::model::{Diagram, Edge, EdgeIndex, Site, SiteId};
}
