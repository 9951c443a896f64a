//! End-to-end tests of [`super::merge`] against the small closed-form
//! scenarios fixtures.rs builds, matching the design notes' concrete
//! scenarios.

use super::*;
use crate::fixtures;
use crate::model::{Diagram, Edge, EdgeIndex, SiteId};
use nalgebra::Vector2;

fn ids(d: &Diagram) -> Vec<u64> {
    d.sites.iter().map(|s| s.id.0).collect()
}

#[test]
fn two_points_yield_one_bisector_edge() {
    let (left, right) = fixtures::two_points();
    let merged = merge(left, right).expect("disjoint singletons always merge");

    assert_eq!(ids(&merged), vec![0, 1]);
    assert_eq!(merged.edges.len(), 1);

    let e = merged.edges[0];
    assert!((e.start.x - 1.0).abs() < 1e-9);
    assert!((e.end.x - 1.0).abs() < 1e-9);
    // far = max_coordinate_extent({(0,0),(2,0)}) * 4 = 2 * 4 = 8.
    let ys = [e.start.y, e.end.y];
    assert!(ys.contains(&8.0) && ys.contains(&-8.0));
    assert!(
        (e.left == SiteId(0) && e.right == SiteId(1))
            || (e.left == SiteId(1) && e.right == SiteId(0))
    );

    assert_eq!(merged.region_edges(SiteId(0)), &[EdgeIndex(0)]);
    assert_eq!(merged.region_edges(SiteId(1)), &[EdgeIndex(0)]);

    assert_eq!(
        merged.convex_hull.iter().map(|s| s.id.0).collect::<Vec<_>>(),
        vec![0, 1]
    );
}

#[test]
fn four_point_square_produces_a_triple_point() {
    let (left, right) = fixtures::four_point_square();
    let merged = merge(left, right).expect("square halves always merge");

    assert_eq!(ids(&merged), vec![0, 1, 2, 3]);
    // Two half-bisectors (each cut at the triple point) plus two chain
    // segments: four edges total.
    assert_eq!(merged.edges.len(), 4);

    // Every edge must pass through, or end at, the triple point (1, 1).
    let triple = Vector2::new(1.0, 1.0);
    let touches_triple = |p: Vector2<f64>| (p - triple).norm() < 1e-6;
    for e in &merged.edges {
        assert!(
            touches_triple(e.start) || touches_triple(e.end),
            "edge {e:?} does not touch the triple point"
        );
    }

    let owners = |e: &Edge| -> (u64, u64) {
        let (a, b) = (e.left.0, e.right.0);
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    };
    let far_end = |e: &Edge| -> Vector2<f64> {
        if touches_triple(e.start) {
            e.end
        } else {
            e.start
        }
    };

    // Left half-bisector (sites 0-1) keeps the side with x <= 1: its far
    // endpoint is the original far-left end of the bisector, not the
    // far-right one. Catches an inverted cut keeping the wrong half.
    let left_half = merged
        .edges
        .iter()
        .find(|e| owners(e) == (0, 1))
        .expect("0-1 bisector present");
    assert!((left_half.start.y - 1.0).abs() < 1e-9 && (left_half.end.y - 1.0).abs() < 1e-9);
    assert!((far_end(left_half).x - (-1000.0)).abs() < 1e-9);

    // Right half-bisector (sites 2-3) keeps the side with x >= 1.
    let right_half = merged
        .edges
        .iter()
        .find(|e| owners(e) == (2, 3))
        .expect("2-3 bisector present");
    assert!((right_half.start.y - 1.0).abs() < 1e-9 && (right_half.end.y - 1.0).abs() < 1e-9);
    assert!((far_end(right_half).x - 1000.0).abs() < 1e-9);

    // Incoming chain segment (sites 1-3, the upper tangent pair) runs from
    // the triple point *up* to (1, 9): max_coordinate_extent(sites) * 4 = 8
    // beyond the triple point's y = 1.
    let incoming = merged
        .edges
        .iter()
        .find(|e| owners(e) == (1, 3))
        .expect("1-3 chain segment present");
    assert!((far_end(incoming) - Vector2::new(1.0, 9.0)).norm() < 1e-9);

    // Outgoing chain segment (sites 0-2, the lower tangent pair) runs from
    // the triple point *down* to (1, -7).
    let outgoing = merged
        .edges
        .iter()
        .find(|e| owners(e) == (0, 2))
        .expect("0-2 chain segment present");
    assert!((far_end(outgoing) - Vector2::new(1.0, -7.0)).norm() < 1e-9);

    assert_eq!(merged.convex_hull.len(), 4);
}

#[test]
fn three_point_triangle_crosses_one_real_edge() {
    let (left, right) = fixtures::three_point_triangle();
    let merged = merge(left, right).expect("triangle halves always merge");

    assert_eq!(ids(&merged), vec![0, 1, 2]);
    // One cut copy of the original bisector, plus the incoming and outgoing
    // chain rays: three edges.
    assert_eq!(merged.edges.len(), 3);

    // The original right-side bisector (y=0) must now be cut at (1, 0)
    // rather than running all the way out to x = +-1000.
    let cut = merged
        .edges
        .iter()
        .find(|e| e.start.y.abs() < 1e-9 && e.end.y.abs() < 1e-9)
        .expect("cut bisector present");
    let near_is_start = (cut.start.x - 1.0).abs() < 1e-6;
    let far_end = if near_is_start { cut.end } else { cut.start };
    let near_end = if near_is_start { cut.start } else { cut.end };
    assert!((far_end.x.abs() - 1000.0).abs() < 1e-9);
    assert!((near_end.x - 1.0).abs() < 1e-9);
    assert!(near_end.y.abs() < 1e-9);

    // The chain's two unbounded rays both touch (1, 0) and are owned by
    // site 0 on one side.
    let vertex = Vector2::new(1.0, 0.0);
    let touches_vertex =
        |e: &Edge, v: Vector2<f64>| (e.start - v).norm() < 1e-6 || (e.end - v).norm() < 1e-6;
    let chain_edges: Vec<&Edge> = merged
        .edges
        .iter()
        .filter(|e| e.left == SiteId(0) || e.right == SiteId(0))
        .collect();
    assert_eq!(chain_edges.len(), 2);
    for e in chain_edges {
        assert!(touches_vertex(e, vertex));
    }
}

#[test]
fn merge_error_display_mentions_site_and_point() {
    let err = MergeError::NoCrossing {
        side: Side::Left,
        site: SiteId(7),
        point: Vector2::new(1.0, 2.0),
    };
    let msg = err.to_string();
    assert!(msg.contains("Left"));
    assert!(msg.contains("no forward edge crossing"));
}
