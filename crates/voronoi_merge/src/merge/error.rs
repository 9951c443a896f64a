//! Error type for a failed merge.

use crate::geometry::Point;
use crate::model::SiteId;

/// Which half-diagram a [`MergeError`] (or an internal walk state) refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Why [`crate::merge::merge`] could not produce a diagram.
///
/// The chain walk assumes every region it probes has *some* boundary edge
/// ahead of the ray it casts; a well-formed pair of half-diagrams always
/// satisfies this; this variant exists for malformed input (e.g. a
/// half-diagram whose region index was built against a different edge list)
/// rather than anything the walk itself can produce from valid input.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum MergeError {
    #[error("no forward edge crossing found in {side:?} region of site {site:?} at {point:?}")]
    NoCrossing {
        side: Side,
        site: SiteId,
        point: Point,
    },
}
