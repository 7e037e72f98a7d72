//! Traversal primitives
//!
//! Unweighted depth-first and breadth-first walks over a [`GraphView`].
//! Both walks visit neighbours in incidence order, which makes their output
//! a pure function of the view.

use super::common::GraphView;
use std::collections::VecDeque;

/// Depth-first walk from `root`, returning node indices in the order they are
/// popped off the stack.
///
/// A node is marked visited when pushed, so each reachable node appears once.
pub fn dfs_order(view: &GraphView, root: usize) -> Vec<usize> {
    let mut order = Vec::new();
    if root >= view.node_count {
        return order;
    }

    let mut visited = vec![false; view.node_count];
    let mut stack = vec![root];
    visited[root] = true;

    while let Some(current) = stack.pop() {
        order.push(current);
        for &next in view.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }

    order
}

/// Last node popped by [`dfs_order`].
///
/// This is the "farthest" probe used by the network-span heuristic. It depends
/// on traversal order and is not a graph-theoretic eccentricity.
pub fn dfs_farthest(view: &GraphView, root: usize) -> Option<usize> {
    dfs_order(view, root).last().copied()
}

/// Breadth-first walk from `root`, returning node indices in visit order.
pub fn bfs_order(view: &GraphView, root: usize) -> Vec<usize> {
    let mut order = Vec::new();
    if root >= view.node_count {
        return order;
    }

    let mut visited = vec![false; view.node_count];
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in view.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 - 2 - 4
    //  \
    //   3
    fn tree() -> GraphView {
        GraphView::from_edges(&[1, 2, 3, 4], &[(1, 2, 1), (1, 3, 1), (2, 4, 1)])
    }

    #[test]
    fn test_dfs_pop_order() {
        let view = tree();
        // Stack after root: [2, 3] -> pop 3, then 2, then 4
        assert_eq!(dfs_order(&view, 0), vec![0, 2, 1, 3]);
        assert_eq!(dfs_farthest(&view, 0), Some(3));
    }

    #[test]
    fn test_bfs_level_order() {
        let view = tree();
        assert_eq!(bfs_order(&view, 0), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_isolated_root() {
        let view = GraphView::from_edges(&[1, 2], &[]);
        assert_eq!(dfs_order(&view, 1), vec![1]);
        assert_eq!(dfs_farthest(&view, 1), Some(1));
        assert_eq!(bfs_order(&view, 1), vec![1]);
    }

    #[test]
    fn test_out_of_range_root() {
        let view = tree();
        assert!(dfs_order(&view, 10).is_empty());
        assert_eq!(dfs_farthest(&view, 10), None);
        assert!(bfs_order(&view, 10).is_empty());
    }
}
