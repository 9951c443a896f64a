//! The merge step itself (§4): combine two disjoint half-diagrams by walking
//! the dividing chain between their convex hulls.
//!
//! Purpose
//! - `merge` is the one entry point a divide-and-conquer Voronoi builder
//!   calls once per internal tree node: given the completed left and right
//!   sub-diagrams, produce the diagram for their union.
//!
//! Why this split
//! - `error.rs` / `state.rs`: the small supporting types (failure mode, and
//!   the phase names used only for tracing and debug assertions).
//! - `chain.rs`: the walk itself — incoming ray, main loop, outgoing ray,
//!   final assembly — kept in one file since each step feeds state directly
//!   into the next.
//!
//! Code cross-refs: `crate::hull::merge_hulls` (starting/ending tangents),
//! `crate::region` (per-step crossing search), `crate::geometry` (the
//! predicates both of those, and the cutting policy here, reduce to).

mod chain;
mod error;
mod state;

pub use error::{MergeError, Side};

use crate::model::Diagram;

/// Merges two disjoint half-diagrams, `left` wholly left of `right`, into the
/// Voronoi diagram of their combined site set.
///
/// Both inputs must already be internally consistent `Diagram`s (sites,
/// edges, region index, and a counter-clockwise convex hull) — the output of
/// either a direct small-`n` construction or a previous call to `merge`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(left_sites = left.sites.len(), right_sites = right.sites.len())
)]
pub fn merge(left: Diagram, right: Diagram) -> Result<Diagram, MergeError> {
    chain::run(left, right)
}

#[cfg(test)]
mod tests;
