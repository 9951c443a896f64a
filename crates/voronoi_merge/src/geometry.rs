//! Geometry predicates the merge depends on.
//!
//! Purpose
//! - Segment intersection, point-on-segment, ray side, perpendicular, and
//!   ray-endpoint extrapolation — the five primitives every step of the
//!   merger engine (`crate::merge`) bottoms out in.
//!
//! Why these five and no others
//! - The chain walk never needs anything fancier than "where do two lines
//!   cross" and "which side of a ray is this point on". Keeping the predicate
//!   set this small makes the merge easy to audit line by line.
//!
//! Code cross-refs: `crate::hull` (tangent finding reuses `ray_side`),
//! `crate::region` (crossing search reuses `intersection`/`point_on_segment`),
//! `crate::merge` (cutting/pruning reuse all five).

use nalgebra::Vector2;

/// A point (or, equivalently, a free vector) in the plane.
pub type Point = Vector2<f64>;

/// Rotates `v` 90 degrees to the left: `(x, y) -> (-y, x)`.
#[inline]
pub fn perpendicular(v: Point) -> Point {
    Point::new(-v.y, v.x)
}

/// Signed area of the triangle `(a, b, p)`, doubled.
///
/// Positive when `p` is left of the directed line `a -> b`, negative when
/// right, zero when collinear.
#[inline]
fn signed_area2(a: Point, b: Point, p: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}

/// The sign of [`signed_area2`]: `+1` if `p` is left of ray `a -> b`, `-1` if
/// right, `0` if `p` is collinear with `a` and `b`.
#[inline]
pub fn ray_side(a: Point, b: Point, p: Point) -> i32 {
    let area = signed_area2(a, b, p);
    if area > 0.0 {
        1
    } else if area < 0.0 {
        -1
    } else {
        0
    }
}

/// Intersects the infinite lines through `a`-`b` and `c`-`d`.
///
/// Returns `None` for parallel or coincident lines (no unique intersection).
pub fn intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    let r = b - a;
    let s = d - c;
    let denom = r.x * s.y - r.y * s.x;
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let ac = c - a;
    let t = (ac.x * s.y - ac.y * s.x) / denom;
    Some(a + r * t)
}

/// True iff `p` lies on the closed segment `c`-`d`.
///
/// Assumes `p` is already known to be collinear with `c` and `d` (it is
/// always called with a point produced by [`intersection`] on the same
/// line); this only needs to confirm `p` falls within the segment's
/// axis-aligned bounding box.
pub fn point_on_segment(c: Point, d: Point, p: Point) -> bool {
    let (lo_x, hi_x) = min_max(c.x, d.x);
    let (lo_y, hi_y) = min_max(c.y, d.y);
    const EPS: f64 = 1e-9;
    p.x >= lo_x - EPS && p.x <= hi_x + EPS && p.y >= lo_y - EPS && p.y <= hi_y + EPS
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Extrapolates an unbounded Voronoi edge emanating from `origin`, perpendicular
/// to the segment `l_site -> r_site`, out to a finite point well outside the
/// site bounding box.
///
/// `origin` is always a point already known to lie on the perpendicular
/// bisector of `l_site`/`r_site` (either the chain's first penetration point
/// or its last vertex), so the bisector's foot `mid = (l_site + r_site) / 2`
/// and `origin` are two points on the same line: the direction from `origin`
/// towards `mid` is the one unambiguous way to continue outward along that
/// line, regardless of which side of `mid` `origin` happens to sit on.
/// `far` is the distance to extrapolate, conventionally
/// `max_coordinate_extent * 4` (see `crate::model::Diagram::max_coordinate_extent`).
pub fn build_ray_end(origin: Point, l_site: Point, r_site: Point, far: f64) -> Point {
    let mid = (l_site + r_site) * 0.5;
    let mut dir = mid - origin;
    if dir.norm() < f64::EPSILON {
        // `origin` coincides with `mid` (only possible for degenerate,
        // coincident-site inputs); fall back to the bisector's own direction
        // so the result is still well-defined.
        dir = perpendicular(r_site - l_site);
    }
    let dir = dir.normalize();
    origin + dir * far
}
