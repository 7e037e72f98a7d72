//! Network span (approximate diameter)
//!
//! For every node `r`, a probe picks a "farthest" node, Dijkstra from `r`
//! prices it, and the most expensive (origin, farthest) pair wins.
//! Cost: one Dijkstra run per node, O(V (V + E) log V) overall.

use super::common::GraphView;
use super::pathfinding::{shortest_paths, PathResult};
use super::traversal::dfs_farthest;

/// How the farthest node of each origin is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpanProbe {
    /// Last node popped by an unweighted depth-first walk.
    ///
    /// A heuristic: the result depends on incidence order and can miss the
    /// true weighted eccentricity.
    #[default]
    DepthFirst,
    /// Reachable node with the largest Dijkstra cost (true eccentricity).
    Eccentricity,
}

/// Find the pair of nodes with the largest probed shortest-path cost.
///
/// Origins are tried in view order and only a strictly larger cost replaces
/// the current best, so the first origin wins ties. Returns `None` when no
/// pair has a positive cost (empty or edgeless graph).
pub fn network_span(view: &GraphView, probe: SpanProbe) -> Option<PathResult> {
    let mut best: Option<PathResult> = None;

    for origin_idx in 0..view.node_count {
        let origin = view.node_at(origin_idx);
        let Some(paths) = shortest_paths(view, origin) else {
            continue;
        };

        let target = match probe {
            SpanProbe::DepthFirst => dfs_farthest(view, origin_idx).map(|idx| view.node_at(idx)),
            SpanProbe::Eccentricity => paths.farthest().map(|(node, _)| node),
        };
        let Some(target) = target else {
            continue;
        };
        let Some(cost) = paths.cost(target) else {
            continue;
        };

        let best_cost = best.as_ref().map_or(0, |b| b.cost);
        if cost > best_cost {
            best = paths.path_to(target);
        }
    }

    best
}
