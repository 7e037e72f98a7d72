//! Graph algorithms module
//!
//! Algorithms are implemented in the `logistics-graph-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::graph::GraphStore;
use logistics_graph_algorithms::{GraphView, NodeId as AlgoNodeId, Weight};
use rustc_hash::FxHashMap;

// Re-export algorithms
pub use logistics_graph_algorithms::{
    bfs_order, degree_centrality, dfs_farthest, dfs_order, dijkstra, network_span,
    shortest_paths, weakly_connected_components, DegreeCentrality, PathResult as AlgoPath,
    ShortestPaths, SpanProbe, WccResult,
};

/// Build a GraphView from the store for algorithm execution.
///
/// `node_key` maps each element to the id the algorithms report (it must be
/// unique per vertex) and `weight` prices each edge. Node order follows the
/// store's vertex order and each row follows the vertex's incidence order.
pub fn build_view<V, E>(
    store: &GraphStore<V, E>,
    node_key: impl Fn(&V) -> AlgoNodeId,
    weight: impl Fn(&E) -> Weight,
) -> GraphView {
    // 1. Dense index per vertex slot
    let mut index_to_node = Vec::with_capacity(store.num_vertices());
    let mut slot_to_index = FxHashMap::default();

    for (idx, vertex) in store.vertices().enumerate() {
        index_to_node.push(node_key(vertex.element()));
        slot_to_index.insert(vertex.id().slot(), idx);
    }

    // 2. Adjacency rows in incidence order
    let adjacency: Vec<Vec<(usize, Weight)>> = store
        .vertices()
        .map(|vertex| {
            vertex
                .incident_edges()
                .iter()
                .filter_map(|&e| {
                    let edge = store.edge(e)?;
                    let other = edge.opposite(vertex.id())?;
                    let &other_idx = slot_to_index.get(&other.slot())?;
                    Some((other_idx, weight(edge.element())))
                })
                .collect()
        })
        .collect();

    GraphView::from_adjacency_list(index_to_node, adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_view_follows_store_order() {
        let mut store: GraphStore<u64, u64> = GraphStore::new();
        let a = store.insert_vertex(30).unwrap();
        let b = store.insert_vertex(10).unwrap();
        let c = store.insert_vertex(20).unwrap();
        store.insert_edge(a, c, 5).unwrap();
        store.insert_edge(a, b, 7).unwrap();

        let view = build_view(&store, |&n| n, |&w| w);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.index_to_node, vec![30, 10, 20]);
        assert_eq!(view.neighbors(0), &[2, 1]);
        assert_eq!(view.weights(0), &[5, 7]);
        assert_eq!(view.neighbors(1), &[0]);
        assert_eq!(view.degree(2), 1);
    }

    #[test]
    fn test_build_view_after_removal() {
        let mut store: GraphStore<u64, u64> = GraphStore::new();
        let a = store.insert_vertex(1).unwrap();
        let b = store.insert_vertex(2).unwrap();
        let c = store.insert_vertex(3).unwrap();
        store.insert_edge(a, b, 1).unwrap();
        store.insert_edge(b, c, 1).unwrap();
        store.remove_vertex(b).unwrap();

        let view = build_view(&store, |&n| n, |&w| w);
        assert_eq!(view.index_to_node, vec![1, 3]);
        assert_eq!(view.degree(0), 0);
        assert_eq!(view.degree(1), 0);

        let result = dijkstra(&view, 1, 3);
        assert!(result.is_none());
    }
}
