//! Hand-built half-diagrams for the concrete scenarios in the design notes.
//!
//! Purpose
//! - Every closed-form case here is small enough to check by hand (one or two
//!   sites per side, at most one existing edge), so the merge's output can be
//!   asserted against an exactly known answer instead of just its invariants.
//! - Exposed behind the `fixtures` feature so `tests/properties.rs` (an
//!   external integration test, which only sees the public API) can reuse the
//!   same constructors as this crate's own unit tests.

use crate::geometry::Point;
use crate::model::{Diagram, Edge, Site, SiteId};

fn site(id: u64, x: f64, y: f64) -> Site {
    Site::new(SiteId(id), Point::new(x, y))
}

/// Two singleton halves: `{id=0, (0,0)}` on the left, `{id=1, (2,0)}` on the
/// right. Neither has any edge yet; the merge has nothing to cut or prune.
pub fn two_points() -> (Diagram, Diagram) {
    let s0 = site(0, 0.0, 0.0);
    let s1 = site(1, 2.0, 0.0);
    let left = Diagram::from_parts(vec![s0], vec![], vec![s0]);
    let right = Diagram::from_parts(vec![s1], vec![], vec![s1]);
    (left, right)
}

/// Two 2-point halves forming a square: left `{(0,0), (0,2)}`, right
/// `{(2,0), (2,2)}`. Each half's own Voronoi diagram is the single horizontal
/// bisector `y=1` between its two sites, already extrapolated far enough
/// (`far_local`) that the merge's own, smaller extrapolation distance for
/// this site set still lands inside it.
pub fn four_point_square() -> (Diagram, Diagram) {
    let far_local = 1_000.0;
    let s0 = site(0, 0.0, 0.0);
    let s1 = site(1, 0.0, 2.0);
    let s2 = site(2, 2.0, 0.0);
    let s3 = site(3, 2.0, 2.0);

    let left_edge = Edge::new(
        Point::new(-far_local, 1.0),
        Point::new(far_local, 1.0),
        s1.id,
        s0.id,
    );
    let right_edge = Edge::new(
        Point::new(-far_local, 1.0),
        Point::new(far_local, 1.0),
        s3.id,
        s2.id,
    );
    // Hull order is bottom-to-top for a 2-point vertical hull, matching the
    // convention `crate::hull`'s own tests use.
    let left = Diagram::from_parts(vec![s0, s1], vec![left_edge], vec![s0, s1]);
    let right = Diagram::from_parts(vec![s2, s3], vec![right_edge], vec![s2, s3]);
    (left, right)
}

/// Left `{id=0, (0,0)}`; right `{id=1, (1,1)}, {id=2, (1,-1)}` with their own
/// bisector `y=0`, already extrapolated far past where the merge will cross it.
pub fn three_point_triangle() -> (Diagram, Diagram) {
    let far_local = 1_000.0;
    let s0 = site(0, 0.0, 0.0);
    let s1 = site(1, 1.0, 1.0);
    let s2 = site(2, 1.0, -1.0);
    let edge = Edge::new(
        Point::new(-far_local, 0.0),
        Point::new(far_local, 0.0),
        s1.id,
        s2.id,
    );
    let left = Diagram::from_parts(vec![s0], vec![], vec![s0]);
    // Bottom-to-top CCW order for the 2-point right hull.
    let right = Diagram::from_parts(vec![s1, s2], vec![edge], vec![s2, s1]);
    (left, right)
}
