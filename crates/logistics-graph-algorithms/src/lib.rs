pub mod common;
pub mod traversal;
pub mod pathfinding;
pub mod span;
pub mod centrality;
pub mod community;

pub use common::{GraphView, NodeId, Weight};
pub use traversal::{bfs_order, dfs_order, dfs_farthest};
pub use pathfinding::{dijkstra, shortest_paths, PathResult, ShortestPaths};
pub use span::{network_span, SpanProbe};
pub use centrality::{degree_centrality, DegreeCentrality};
pub use community::{weakly_connected_components, WccResult};
