//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the network topology for algorithm execution.

use rustc_hash::FxHashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// Edge weight type (non-negative integer cost)
pub type Weight = u64;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Every undirected edge is stored twice, once in each endpoint's row. Rows keep
/// the order in which edges were supplied, so traversals over the view are
/// deterministic for a given insertion history.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbour indices
    pub targets: Vec<usize>,
    /// Edge weights, aligned with `targets`
    pub weights: Vec<Weight>,
}

impl GraphView {
    /// Number of incident edges of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Neighbours of a node, in incidence order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Weights of a node's incident edges, aligned with [`GraphView::neighbors`]
    pub fn weights(&self, idx: usize) -> &[Weight] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Dense index of a node id
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Node id at a dense index
    pub fn node_at(&self, idx: usize) -> NodeId {
        self.index_to_node[idx]
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Build a view from per-node adjacency rows of `(neighbour index, weight)`.
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        adjacency: Vec<Vec<(usize, Weight)>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();

        offsets.push(0);
        for row in adjacency.into_iter().take(node_count) {
            for (target, weight) in row {
                targets.push(target);
                weights.push(weight);
            }
            offsets.push(targets.len());
        }
        // Rows missing from `adjacency` are isolated nodes
        while offsets.len() < node_count + 1 {
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            weights,
        }
    }

    /// Build a view from a node list and an undirected edge list.
    ///
    /// Edges naming an unknown node are ignored.
    pub fn from_edges(nodes: &[NodeId], edges: &[(NodeId, NodeId, Weight)]) -> Self {
        let node_to_index: FxHashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for &(u, v, weight) in edges {
            if let (Some(&u_idx), Some(&v_idx)) = (node_to_index.get(&u), node_to_index.get(&v)) {
                adjacency[u_idx].push((v_idx, weight));
                adjacency[v_idx].push((u_idx, weight));
            }
        }

        Self::from_adjacency_list(nodes.to_vec(), adjacency)
    }
}
