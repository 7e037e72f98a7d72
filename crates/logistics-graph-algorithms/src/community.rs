//! Community detection algorithms
//!
//! Weakly connected components by repeated traversal.

use super::common::{GraphView, NodeId};
use super::traversal::bfs_order;
use rustc_hash::FxHashMap;

/// Result of WCC algorithm
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WccResult {
    /// Members of each component, in discovery order; component ids are positions
    pub components: Vec<Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: FxHashMap<NodeId, usize>,
}

impl WccResult {
    /// Number of components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component id of a node
    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.node_component.get(&node).copied()
    }

    /// Size of the largest component
    pub fn largest(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Weakly Connected Components (WCC)
///
/// Picks each unvisited node in view order as a traversal root, walks its
/// whole reachable set, and opens exactly one component per root. A node
/// without edges is a component of size 1.
pub fn weakly_connected_components(view: &GraphView) -> WccResult {
    let mut components = Vec::new();
    let mut node_component = FxHashMap::default();
    let mut visited = vec![false; view.node_count];

    for root in 0..view.node_count {
        if visited[root] {
            continue;
        }

        let component_id = components.len();
        let mut members = Vec::new();
        for idx in bfs_order(view, root) {
            visited[idx] = true;
            let node = view.node_at(idx);
            node_component.insert(node, component_id);
            members.push(node);
        }
        components.push(members);
    }

    WccResult {
        components,
        node_component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wcc() {
        // Nodes: 1, 2, 3, 4, 5, 6
        // Edges: 1-2, 3-4-5, 6 (isolated)
        let view = GraphView::from_edges(
            &[1, 2, 3, 4, 5, 6],
            &[(1, 2, 1), (3, 4, 1), (4, 5, 1)],
        );

        let result = weakly_connected_components(&view);

        assert_eq!(result.component_count(), 3);

        let c1 = result.component_of(1).unwrap();
        let c2 = result.component_of(2).unwrap();
        assert_eq!(c1, c2);

        let c3 = result.component_of(3).unwrap();
        let c4 = result.component_of(4).unwrap();
        let c5 = result.component_of(5).unwrap();
        assert_eq!(c3, c4);
        assert_eq!(c4, c5);
        assert_ne!(c1, c3);

        assert_eq!(result.components[2], vec![6]);
        assert_eq!(result.largest(), 3);
    }

    #[test]
    fn test_empty_view_has_no_components() {
        let view = GraphView::from_edges(&[], &[]);
        let result = weakly_connected_components(&view);
        assert_eq!(result.component_count(), 0);
        assert_eq!(result.largest(), 0);
    }
}
