//! Region/site crossing search (§4.3): where a ray fired from inside one
//! site's Voronoi region first crosses that region's boundary.
//!
//! Purpose
//! - Both the incoming-ray step and the main chain-walk loop of
//!   `crate::merge` need "which edge of this site's region does this ray
//!   hit, and where" — this module is that one operation, parameterized by
//!   how "first" is measured (§4.3 distinguishes two measures, kept as two
//!   functions below rather than one with a mode flag).

use crate::geometry::{intersection, point_on_segment, Point};
use crate::model::{Diagram, Edge, EdgeIndex, SiteId};
use crate::numeric::dist2;

/// Result of [`ray_region_crossing`].
#[derive(Clone, Copy, Debug)]
pub struct RayCrossing {
    /// The hit point's coordinate along `dir` in the rotated frame where
    /// `dir` maps to `+y`. Can be negative; smaller is "earlier".
    pub distance: f64,
    pub point: Point,
    pub edge_index: EdgeIndex,
    pub edge: Edge,
}

/// Among the edges bordering `site`, finds the one the infinite line through
/// `origin` in direction `dir` crosses with the smallest rotated-frame `y`
/// (§4.3). Returns `None` if no edge of the region is crossed at all.
pub fn ray_region_crossing(
    diagram: &Diagram,
    origin: Point,
    dir: Point,
    site: SiteId,
) -> Option<RayCrossing> {
    let dir_hat = dir.normalize();
    let far = origin + dir * 1e6;
    let mut best: Option<RayCrossing> = None;
    for &idx in diagram.region_edges(site) {
        let edge = diagram.edge(idx);
        let Some(p) = intersection(origin, far, edge.start, edge.end) else {
            continue;
        };
        if !point_on_segment(edge.start, edge.end, p) {
            continue;
        }
        let distance = (p - origin).dot(&dir_hat);
        if best.map(|b| distance < b.distance).unwrap_or(true) {
            best = Some(RayCrossing {
                distance,
                point: p,
                edge_index: idx,
                edge,
            });
        }
    }
    best
}

/// Result of [`region_crossing`].
#[derive(Clone, Copy, Debug)]
pub struct ForwardCrossing {
    /// Squared Euclidean distance from `origin` to [`ForwardCrossing::point`].
    pub approach: f64,
    pub point: Point,
    pub edge_index: EdgeIndex,
    pub edge: Edge,
}

/// Among the edges bordering `site` other than `excluded` (if any), finds the
/// one the ray from `origin` in direction `dir` crosses closest to `origin`,
/// counting only crossings strictly ahead of `origin`
/// (`dot(dir, point - origin) > 0`). Returns `None` if no such forward
/// crossing exists.
///
/// `excluded` is the edge the walk most recently entered this region
/// through, if any — `None` when probing a region the chain has not yet
/// entered (the static side of a tangent, or the very first incoming-ray
/// probe), so there is nothing to exclude.
pub fn region_crossing(
    diagram: &Diagram,
    origin: Point,
    dir: Point,
    site: SiteId,
    excluded: Option<EdgeIndex>,
) -> Option<ForwardCrossing> {
    let far = origin + dir * 1e6;
    let mut best: Option<ForwardCrossing> = None;
    for &idx in diagram.region_edges(site) {
        if Some(idx) == excluded {
            continue;
        }
        let edge = diagram.edge(idx);
        let Some(p) = intersection(origin, far, edge.start, edge.end) else {
            continue;
        };
        if !point_on_segment(edge.start, edge.end, p) {
            continue;
        }
        if dir.dot(&(p - origin)) <= 0.0 {
            continue;
        }
        let approach = dist2(p, origin);
        if best.map(|b| approach < b.approach).unwrap_or(true) {
            best = Some(ForwardCrossing {
                approach,
                point: p,
                edge_index: idx,
                edge,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Diagram, Site, SiteId};
    use nalgebra::Vector2;

    fn single_edge_diagram() -> (Diagram, SiteId) {
        let a = Site::new(SiteId(0), Vector2::new(-1.0, 0.0));
        let b = Site::new(SiteId(1), Vector2::new(1.0, 0.0));
        let edge = Edge::new(
            Vector2::new(0.0, 10.0),
            Vector2::new(0.0, -10.0),
            a.id,
            b.id,
        );
        let d = Diagram::from_parts(vec![a, b], vec![edge], vec![a, b]);
        (d, a.id)
    }

    #[test]
    fn ray_region_crossing_finds_vertical_edge() {
        let (d, site) = single_edge_diagram();
        let hit = ray_region_crossing(&d, Vector2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), site);
        let hit = hit.expect("expected a crossing");
        assert!((hit.point.x - 0.0).abs() < 1e-9);
        assert!((hit.point.y - 0.0).abs() < 1e-9);
        assert!((hit.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn ray_region_crossing_none_when_region_empty() {
        let a = Site::new(SiteId(0), Vector2::new(0.0, 0.0));
        let d = Diagram::from_parts(vec![a], vec![], vec![a]);
        let hit = ray_region_crossing(&d, Vector2::new(0.0, 0.0), Vector2::new(0.0, 1.0), a.id);
        assert!(hit.is_none());
    }

    #[test]
    fn region_crossing_excludes_given_edge_and_requires_forward() {
        let (d, site) = single_edge_diagram();
        let only_edge = EdgeIndex(0);
        let hit = region_crossing(
            &d,
            Vector2::new(-5.0, 0.0),
            Vector2::new(1.0, 0.0),
            site,
            Some(only_edge),
        );
        assert!(hit.is_none(), "excluded edge must not be returned");

        // Backward direction: the edge is behind the origin, so no forward hit.
        let hit = region_crossing(
            &d,
            Vector2::new(-5.0, 0.0),
            Vector2::new(-1.0, 0.0),
            site,
            None,
        );
        assert!(hit.is_none());
    }
}
