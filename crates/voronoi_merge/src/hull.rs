//! Convex hull merge: given two disjoint, counter-clockwise hulls with `left`
//! wholly left of `right`, compute the union hull and the two bridging
//! tangents the merger's chain walk starts and ends on (§4.2).
//!
//! Purpose
//! - This is the classical "rotating pair" tangent search from
//!   divide-and-conquer convex hull construction, specialized to the one
//!   thing the merger needs from it: the upper and lower tangent sites.
//!
//! Why indices internally
//! - The tangent search and the hull walk that follows both need to advance
//!   around each hull's site array; working in `usize` indices (mod hull
//!   length) avoids re-deriving a site's position from its id mid-search.

use crate::geometry::ray_side;
use crate::model::Site;

/// A bridging tangent between the two hulls: one site from each side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    pub left: Site,
    pub right: Site,
}

/// Result of merging two hulls: the union hull (counter-clockwise) plus the
/// tangents the chain walk starts (`upper`) and ends (`lower`) on.
#[derive(Clone, Debug)]
pub struct HullMerge {
    pub hull: Vec<Site>,
    pub upper: Tangent,
    pub lower: Tangent,
}

/// Index of the hull point with maximal `x` (ties broken by the first found).
fn rightmost(hull: &[Site]) -> usize {
    let mut best = 0;
    for i in 1..hull.len() {
        if hull[i].point.x > hull[best].point.x {
            best = i;
        }
    }
    best
}

/// Index of the hull point with minimal `x` (ties broken by the first found).
fn leftmost(hull: &[Site]) -> usize {
    let mut best = 0;
    for i in 1..hull.len() {
        if hull[i].point.x < hull[best].point.x {
            best = i;
        }
    }
    best
}

/// Finds the upper tangent: advances `l` forward on `left` and `r` backward
/// on `right` — i.e. towards whichever neighbor currently lies strictly
/// above the line `(left[l], right[r])` — until no such neighbor remains, so
/// every other hull point lies on or below the tangent.
///
/// At a CCW hull's rightmost point, the successor lies upward; at the
/// leftmost point of the other hull, the predecessor lies upward. That fixes
/// the advance directions below.
///
/// Returns `(l_index, r_index)` into `left`/`right`.
fn upper_tangent(left: &[Site], right: &[Site]) -> (usize, usize) {
    let n1 = left.len();
    let n2 = right.len();
    let mut l = rightmost(left);
    let mut r = leftmost(right);
    loop {
        let mut moved = false;
        if n1 > 1 {
            while ray_side(left[l].point, right[r].point, left[(l + 1) % n1].point) > 0 {
                l = (l + 1) % n1;
                moved = true;
            }
        }
        if n2 > 1 {
            while ray_side(left[l].point, right[r].point, right[(r + n2 - 1) % n2].point) > 0 {
                r = (r + n2 - 1) % n2;
                moved = true;
            }
        }
        if !moved {
            return (l, r);
        }
    }
}

/// Finds the lower tangent: symmetric to [`upper_tangent`] with "above"
/// replaced by "below" and the advance directions reversed (the downward
/// neighbors are `left`'s predecessor and `right`'s successor).
///
/// Returns `(l_index, r_index)` into `left`/`right`.
fn lower_tangent(left: &[Site], right: &[Site]) -> (usize, usize) {
    let n1 = left.len();
    let n2 = right.len();
    let mut l = rightmost(left);
    let mut r = leftmost(right);
    loop {
        let mut moved = false;
        if n1 > 1 {
            while ray_side(left[l].point, right[r].point, left[(l + n1 - 1) % n1].point) < 0 {
                l = (l + n1 - 1) % n1;
                moved = true;
            }
        }
        if n2 > 1 {
            while ray_side(left[l].point, right[r].point, right[(r + 1) % n2].point) < 0 {
                r = (r + 1) % n2;
                moved = true;
            }
        }
        if !moved {
            return (l, r);
        }
    }
}

/// Merges two disjoint convex hulls into the convex hull of their union.
///
/// `left` must lie wholly left of `right`; both must be given in
/// counter-clockwise order. Panics (via indexing) only if either hull is
/// empty, which would itself indicate an empty input diagram.
pub fn merge_hulls(left: &[Site], right: &[Site]) -> HullMerge {
    let (ul, ur) = upper_tangent(left, right);
    let (ql, qr) = lower_tangent(left, right);

    // Walk left CCW from the upper tangent's left site to the lower
    // tangent's left site, then jump to right and walk CCW from the lower
    // tangent's right site to the upper tangent's right site.
    let mut hull = Vec::with_capacity(left.len() + right.len());
    let mut i = ul;
    loop {
        hull.push(left[i]);
        if i == ql {
            break;
        }
        i = (i + 1) % left.len();
    }
    let mut j = qr;
    loop {
        hull.push(right[j]);
        if j == ur {
            break;
        }
        j = (j + 1) % right.len();
    }

    HullMerge {
        hull,
        upper: Tangent {
            left: left[ul],
            right: right[ur],
        },
        lower: Tangent {
            left: left[ql],
            right: right[qr],
        },
    }
}
