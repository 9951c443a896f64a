//! The dividing-chain walk itself (§4.1-§4.4): incoming ray, main loop,
//! outgoing ray, and final assembly.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::geometry::{build_ray_end, perpendicular, ray_side, Point};
use crate::hull::merge_hulls;
use crate::model::{max_coordinate_extent, Diagram, Edge, EdgeIndex, Site, SiteId};
use crate::numeric::float2_equals;
use crate::region::{ray_region_crossing, region_crossing};

use super::error::{MergeError, Side};
use super::state::MergeState;

/// Extrapolation distance for the two unbounded chain rays, per §4.1:
/// `max_coordinate_extent * 4`, comfortably outside every site's bounding box.
const RAY_EXTENT_FACTOR: f64 = 4.0;

/// The active site on one side of the chain, plus where the chain most
/// recently entered its current region (§4.4's "enter point"/"enter edge",
/// needed by the cutting policy when that region is later exited).
struct SideState {
    site: Site,
    enter_point: Point,
    enter_edge: Option<EdgeIndex>,
}

/// Owns the two half-diagrams being merged and the bookkeeping that
/// accumulates across the walk: edges marked for removal (pruned losing-side
/// edges) and the freshly minted dividing-chain edges.
struct MergeRun {
    left: Diagram,
    right: Diagram,
    remove_left: HashSet<usize>,
    remove_right: HashSet<usize>,
    chain_edges: Vec<Edge>,
}

impl MergeRun {
    fn diagram(&self, side: Side) -> &Diagram {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn diagram_mut(&mut self, side: Side) -> &mut Diagram {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn remove_set_mut(&mut self, side: Side) -> &mut HashSet<usize> {
        match side {
            Side::Left => &mut self.remove_left,
            Side::Right => &mut self.remove_right,
        }
    }

    /// Region exit/enter handling (§4.4): cuts the edge the walk is leaving
    /// `region_site`'s region through, prunes the edges of that region left
    /// entirely on the losing side of the `enter -> exit` chain segment, and
    /// returns the site whose region the walk now enters.
    fn cut_and_prune(
        &mut self,
        side: Side,
        region_site: SiteId,
        enter: Point,
        enter_edge: Option<EdgeIndex>,
        exit: Point,
        exit_edge_index: EdgeIndex,
    ) -> SiteId {
        let exit_edge = self.diagram(side).edge(exit_edge_index);
        let neighbor = exit_edge.other_side(region_site);
        debug_assert_ne!(
            neighbor, region_site,
            "edge {exit_edge_index:?} does not border its own region"
        );

        let cut = cut_edge(side, enter, enter_edge, exit_edge_index, exit_edge, exit);
        self.diagram_mut(side).edges[exit_edge_index.0] = cut;

        let region_edges: Vec<EdgeIndex> =
            self.diagram(side).region_edges(region_site).to_vec();
        for idx in region_edges {
            if idx == exit_edge_index || Some(idx) == enter_edge {
                continue;
            }
            let e = self.diagram(side).edge(idx);
            let s_start = ray_side(enter, exit, e.start);
            let s_end = ray_side(enter, exit, e.end);
            let losing = match side {
                Side::Left => s_start.max(s_end) > 0,
                Side::Right => s_start.min(s_end) < 0,
            };
            if losing {
                self.remove_set_mut(side).insert(idx.0);
            }
        }
        neighbor
    }
}

/// Cutting policy (§4.4): the replacement for `exit_edge`, clipped so it no
/// longer extends past the `enter -> exit` chain segment.
///
/// If the region was entered and is being exited through the same edge (a
/// degenerate, "hairline" region with a single boundary edge), the cut edge
/// is simply `enter -> exit`. Otherwise the kept original endpoint is the one
/// on the losing side of the chain segment, by `RaySide`: smaller for the
/// left diagram, larger for the right.
fn cut_edge(
    side: Side,
    enter: Point,
    enter_edge: Option<EdgeIndex>,
    exit_edge_index: EdgeIndex,
    exit_edge: Edge,
    exit: Point,
) -> Edge {
    if enter_edge == Some(exit_edge_index) {
        return Edge::new(enter, exit, exit_edge.left, exit_edge.right);
    }
    let side_start = ray_side(enter, exit, exit_edge.start);
    let side_end = ray_side(enter, exit, exit_edge.end);
    let keep_start = match side {
        Side::Left => side_start <= side_end,
        Side::Right => side_start >= side_end,
    };
    let kept = if keep_start {
        exit_edge.start
    } else {
        exit_edge.end
    };
    Edge::new(kept, exit, exit_edge.left, exit_edge.right)
}

/// Advances `state` across the edge at `exit_edge_index`, landing on its
/// neighboring region.
fn advance(run: &mut MergeRun, state: &mut SideState, side: Side, exit: Point, exit_edge_index: EdgeIndex) {
    let neighbor = run.cut_and_prune(
        side,
        state.site.id,
        state.enter_point,
        state.enter_edge,
        exit,
        exit_edge_index,
    );
    state.site = run.diagram(side).site(neighbor);
    state.enter_point = exit;
    state.enter_edge = Some(exit_edge_index);
}

/// Runs the full merge: hull merge, incoming ray, chain walk, outgoing ray,
/// and final assembly into one [`Diagram`].
pub(super) fn run(left: Diagram, right: Diagram) -> Result<Diagram, MergeError> {
    let mut sites = left.sites.clone();
    sites.extend(right.sites.iter().copied());
    let far = max_coordinate_extent(&sites) * RAY_EXTENT_FACTOR;

    debug!(state = MergeState::HullMerge.as_str(), "merging convex hulls");
    let hull_merge = merge_hulls(&left.convex_hull, &right.convex_hull);
    let q_left = hull_merge.lower.left;
    let q_right = hull_merge.lower.right;

    let mut run = MergeRun {
        left,
        right,
        remove_left: HashSet::new(),
        remove_right: HashSet::new(),
        chain_edges: Vec::new(),
    };

    // Incoming ray (§4.1): shoot perpendicular to the upper tangent, upward
    // from its midpoint, and see which side's region it penetrates first.
    debug!(state = MergeState::IncomingRay.as_str());
    let l0 = hull_merge.upper.left;
    let r0 = hull_merge.upper.right;
    let mid = (l0.point + r0.point) * 0.5;
    let dir = perpendicular(r0.point - l0.point);

    let left_hit = ray_region_crossing(&run.left, mid, dir, l0.id);
    let right_hit = ray_region_crossing(&run.right, mid, dir, r0.id);

    if left_hit.is_none()
        && right_hit.is_none()
        && run.left.region_edges(l0.id).is_empty()
        && run.right.region_edges(r0.id).is_empty()
    {
        // Neither side has any pre-existing edge to hit at all: this is the
        // base case of merging two singleton half-diagrams, where the whole
        // dividing chain is one unbounded bisector with nothing to cut or
        // prune.
        let dir_hat = dir.normalize();
        let top = mid + dir_hat * far;
        let bottom = mid - dir_hat * far;
        let edges = vec![Edge::new(top, bottom, l0.id, r0.id)];
        return Ok(Diagram::from_parts(sites, edges, hull_merge.hull));
    }

    // Which side(s) the incoming ray penetrates first: a near-simultaneous
    // hit (within `Float2Equals`) is a triple point right at the top of the
    // chain, handled the same way as one found mid-walk (§4.4 step 7d) —
    // both sides are cut and advanced together.
    let mut current_point = match (left_hit, right_hit) {
        (Some(lh), Some(rh)) if float2_equals(lh.point, rh.point) => lh.point,
        (Some(lh), Some(rh)) if lh.distance <= rh.distance => lh.point,
        (Some(_), Some(rh)) => rh.point,
        (Some(lh), None) => lh.point,
        (None, Some(rh)) => rh.point,
        (None, None) => {
            return Err(MergeError::NoCrossing {
                side: Side::Left,
                site: l0.id,
                point: mid,
            })
        }
    };

    let far_point = build_ray_end(current_point, l0.point, r0.point, far);
    run.chain_edges
        .push(Edge::new(far_point, current_point, l0.id, r0.id));

    let mut l_state = SideState {
        site: l0,
        enter_point: far_point,
        enter_edge: None,
    };
    let mut r_state = SideState {
        site: r0,
        enter_point: far_point,
        enter_edge: None,
    };
    match (left_hit, right_hit) {
        (Some(lh), Some(rh)) if float2_equals(lh.point, rh.point) => {
            advance(&mut run, &mut l_state, Side::Left, current_point, lh.edge_index);
            advance(&mut run, &mut r_state, Side::Right, current_point, rh.edge_index);
        }
        (Some(lh), Some(rh)) if lh.distance <= rh.distance => {
            advance(&mut run, &mut l_state, Side::Left, current_point, lh.edge_index);
        }
        (Some(_), Some(rh)) => {
            advance(&mut run, &mut r_state, Side::Right, current_point, rh.edge_index);
        }
        (Some(lh), None) => {
            advance(&mut run, &mut l_state, Side::Left, current_point, lh.edge_index);
        }
        (None, Some(rh)) => {
            advance(&mut run, &mut r_state, Side::Right, current_point, rh.edge_index);
        }
        (None, None) => unreachable!("handled above"),
    }

    // Main loop (§4.4): walk down the dividing chain until both sides reach
    // the lower tangent's sites.
    debug!(state = MergeState::ChainWalk.as_str());
    while l_state.site.id != q_left.id || r_state.site.id != q_right.id {
        let dir = perpendicular(r_state.site.point - l_state.site.point);
        let left_hit = region_crossing(
            &run.left,
            current_point,
            dir,
            l_state.site.id,
            l_state.enter_edge,
        );
        let right_hit = region_crossing(
            &run.right,
            current_point,
            dir,
            r_state.site.id,
            r_state.enter_edge,
        );

        let next_point = match (left_hit, right_hit) {
            (None, None) => {
                return Err(MergeError::NoCrossing {
                    side: Side::Left,
                    site: l_state.site.id,
                    point: current_point,
                })
            }
            (Some(lh), None) => {
                let vertex = lh.point;
                trace!(?vertex, side = "left", "chain vertex");
                run.chain_edges.push(Edge::new(
                    current_point,
                    vertex,
                    l_state.site.id,
                    r_state.site.id,
                ));
                advance(&mut run, &mut l_state, Side::Left, vertex, lh.edge_index);
                vertex
            }
            (None, Some(rh)) => {
                let vertex = rh.point;
                trace!(?vertex, side = "right", "chain vertex");
                run.chain_edges.push(Edge::new(
                    current_point,
                    vertex,
                    l_state.site.id,
                    r_state.site.id,
                ));
                advance(&mut run, &mut r_state, Side::Right, vertex, rh.edge_index);
                vertex
            }
            (Some(lh), Some(rh)) if float2_equals(lh.point, rh.point) => {
                let vertex = lh.point;
                trace!(?vertex, side = "triple", "chain vertex");
                run.chain_edges.push(Edge::new(
                    current_point,
                    vertex,
                    l_state.site.id,
                    r_state.site.id,
                ));
                advance(&mut run, &mut l_state, Side::Left, vertex, lh.edge_index);
                advance(&mut run, &mut r_state, Side::Right, vertex, rh.edge_index);
                vertex
            }
            (Some(lh), Some(rh)) if lh.approach <= rh.approach => {
                let vertex = lh.point;
                trace!(?vertex, side = "left", "chain vertex");
                run.chain_edges.push(Edge::new(
                    current_point,
                    vertex,
                    l_state.site.id,
                    r_state.site.id,
                ));
                advance(&mut run, &mut l_state, Side::Left, vertex, lh.edge_index);
                vertex
            }
            (Some(_), Some(rh)) => {
                let vertex = rh.point;
                trace!(?vertex, side = "right", "chain vertex");
                run.chain_edges.push(Edge::new(
                    current_point,
                    vertex,
                    l_state.site.id,
                    r_state.site.id,
                ));
                advance(&mut run, &mut r_state, Side::Right, vertex, rh.edge_index);
                vertex
            }
        };
        current_point = next_point;
    }

    // Outgoing ray (§4.1): extrapolate the chain's final segment away from
    // the lower tangent, out past the site bounding box.
    debug!(state = MergeState::OutgoingRay.as_str());
    let out_point = build_ray_end(current_point, q_left.point, q_right.point, far);
    run.chain_edges.push(Edge::new(
        current_point,
        out_point,
        q_left.id,
        q_right.id,
    ));

    debug!(state = MergeState::Assemble.as_str());
    let mut edges: Vec<Edge> = run
        .left
        .edges
        .iter()
        .enumerate()
        .filter(|(i, _)| !run.remove_left.contains(i))
        .map(|(_, e)| *e)
        .collect();
    edges.extend(
        run.right
            .edges
            .iter()
            .enumerate()
            .filter(|(i, _)| !run.remove_right.contains(i))
            .map(|(_, e)| *e),
    );
    edges.extend(run.chain_edges);

    Ok(Diagram::from_parts(sites, edges, hull_merge.hull))
}
