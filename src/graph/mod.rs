//! Core graph store
//!
//! This module implements the undirected simple graph the network is built on:
//! - Vertices unique by element value
//! - Edges owning their two endpoints, no parallel edges, no self-loops
//! - Store-scoped handles, so cross-store misuse is rejected
//! - Insertion-ordered vertex, edge and incidence iteration

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, StoreTag, VertexId};
pub use vertex::Vertex;
