//! Vertex implementation for the graph store

use super::types::{EdgeId, VertexId};

/// A vertex in the graph store
///
/// A vertex wraps one element and keeps the handles of its incident edges in
/// insertion order (not weight order).
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    /// Handle of this vertex
    pub(crate) id: VertexId,

    /// Stored element; the vertex's identity within the store
    pub(crate) element: V,

    /// Incident edges, in the order they were inserted
    pub(crate) incident: Vec<EdgeId>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: VertexId, element: V) -> Self {
        Vertex {
            id,
            element,
            incident: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn element(&self) -> &V {
        &self.element
    }

    /// Incident edges, in insertion order
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Number of incident edges
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.incident.push(edge);
    }

    pub(crate) fn detach(&mut self, edge: EdgeId) {
        self.incident.retain(|&e| e != edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::StoreTag;

    #[test]
    fn test_attach_and_detach() {
        let tag = StoreTag::fresh();
        let mut vertex = Vertex::new(VertexId::new(tag, 1), "lisboa");
        let e1 = EdgeId::new(tag, 1);
        let e2 = EdgeId::new(tag, 2);

        vertex.attach(e1);
        vertex.attach(e2);
        assert_eq!(vertex.incident_edges(), &[e1, e2]);
        assert_eq!(vertex.degree(), 2);

        vertex.detach(e1);
        assert_eq!(vertex.incident_edges(), &[e2]);
        assert_eq!(*vertex.element(), "lisboa");
    }
}
