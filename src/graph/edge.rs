//! Edge implementation for the graph store

use super::types::{EdgeId, VertexId};

/// An undirected edge in the graph store
///
/// Edges own the handles of their two endpoints, so resolving the opposite
/// endpoint never scans the vertex set.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    /// Handle of this edge
    pub(crate) id: EdgeId,

    /// Stored element
    pub(crate) element: E,

    /// The two distinct vertices this edge connects
    pub(crate) endpoints: [VertexId; 2],
}

impl<E> Edge<E> {
    pub(crate) fn new(id: EdgeId, u: VertexId, v: VertexId, element: E) -> Self {
        Edge {
            id,
            element,
            endpoints: [u, v],
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn endpoints(&self) -> [VertexId; 2] {
        self.endpoints
    }

    /// Check if this edge connects two specific vertices (in either order)
    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        let [a, b] = self.endpoints;
        (a == u && b == v) || (a == v && b == u)
    }

    /// Check if a vertex is one of the endpoints
    pub fn touches(&self, v: VertexId) -> bool {
        self.endpoints.contains(&v)
    }

    /// The endpoint at the other end from `v`, `None` if `v` is not an endpoint
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        match self.endpoints {
            [a, b] if a == v => Some(b),
            [a, b] if b == v => Some(a),
            _ => None,
        }
    }
}
