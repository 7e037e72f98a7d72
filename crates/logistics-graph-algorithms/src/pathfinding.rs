//! Pathfinding algorithms
//!
//! Single-source Dijkstra over non-negative integer weights, with path
//! reconstruction from predecessor chains.

use super::common::{GraphView, NodeId, Weight};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: Weight,
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: Weight,
    node: NodeId,
    node_idx: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal costs pop the lowest node id first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Costs and predecessors computed from one origin.
///
/// A node with no cost entry is unreachable from the origin.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source_idx: usize,
    index_to_node: Vec<NodeId>,
    node_to_index: FxHashMap<NodeId, usize>,
    costs: Vec<Option<Weight>>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<usize>,
}

impl ShortestPaths {
    /// Origin node id
    pub fn source(&self) -> NodeId {
        self.index_to_node[self.source_idx]
    }

    /// Cost of the cheapest path to `target`, `None` when unreachable or unknown
    pub fn cost(&self, target: NodeId) -> Option<Weight> {
        let idx = self.position(target)?;
        self.costs[idx]
    }

    /// Cost by dense index
    pub fn cost_at(&self, idx: usize) -> Option<Weight> {
        self.costs.get(idx).copied().flatten()
    }

    /// Predecessor of `target` on its cheapest path
    pub fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        let idx = self.position(target)?;
        self.predecessors[idx].map(|p| self.index_to_node[p])
    }

    /// Node indices in the order Dijkstra settled them
    pub fn settled_order(&self) -> &[usize] {
        &self.settled
    }

    /// Reachable node with the largest cost; ties go to the lowest node id
    pub fn farthest(&self) -> Option<(NodeId, Weight)> {
        self.settled
            .iter()
            .filter_map(|&idx| self.costs[idx].map(|c| (self.index_to_node[idx], c)))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }

    /// Walk the predecessor chain back from `target` to the origin.
    ///
    /// Returns `None` when the chain breaks before reaching the origin, i.e.
    /// the target is unreachable. Origin to itself is a zero-cost path.
    pub fn path_to(&self, target: NodeId) -> Option<PathResult> {
        let target_idx = self.position(target)?;
        let cost = self.costs[target_idx]?;

        let mut path = vec![target];
        let mut current = target_idx;
        while current != self.source_idx {
            current = self.predecessors[current]?;
            path.push(self.index_to_node[current]);
        }
        path.reverse();

        Some(PathResult {
            source: self.source(),
            target,
            path,
            cost,
        })
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }
}

/// Single-source Dijkstra (weighted, undirected).
///
/// Repeatedly settles the unvisited node with the minimum known cost and
/// relaxes its incident edges with a strict improvement test. Among nodes of
/// equal cost, the lowest node id is settled first. Stops when no reachable
/// unvisited node remains. Returns `None` if `source` is not in the view.
pub fn shortest_paths(view: &GraphView, source: NodeId) -> Option<ShortestPaths> {
    let source_idx = view.index_of(source)?;
    let n = view.node_count;

    let mut costs: Vec<Option<Weight>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut settled = Vec::with_capacity(n);
    let mut heap = BinaryHeap::new();

    costs[source_idx] = Some(0);
    heap.push(State { cost: 0, node: source, node_idx: source_idx });

    while let Some(State { cost, node_idx, .. }) = heap.pop() {
        if visited[node_idx] {
            continue;
        }
        visited[node_idx] = true;
        settled.push(node_idx);

        for (&next_idx, &weight) in view.neighbors(node_idx).iter().zip(view.weights(node_idx)) {
            if visited[next_idx] {
                continue;
            }

            let next_cost = cost.saturating_add(weight);
            let improves = match costs[next_idx] {
                Some(known) => next_cost < known,
                None => true,
            };

            if improves {
                costs[next_idx] = Some(next_cost);
                predecessors[next_idx] = Some(node_idx);
                heap.push(State {
                    cost: next_cost,
                    node: view.node_at(next_idx),
                    node_idx: next_idx,
                });
            }
        }
    }

    Some(ShortestPaths {
        source_idx,
        index_to_node: view.index_to_node.clone(),
        node_to_index: view.node_to_index.clone(),
        costs,
        predecessors,
        settled,
    })
}

/// Dijkstra's Algorithm (Weighted Shortest Path) between two nodes
pub fn dijkstra(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
    view.index_of(target)?;
    shortest_paths(view, source)?.path_to(target)
}
