//! In-memory graph storage implementation
//!
//! An undirected simple graph over arbitrary element types:
//! - vertices are unique by element value
//! - at most one edge per unordered vertex pair, no self-loops
//! - every edge is registered on exactly its two endpoints

use super::edge::Edge;
use super::types::{EdgeId, StoreTag, VertexId};
use super::vertex::Vertex;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid vertex {0}: not present in this store")]
    InvalidVertex(VertexId),

    #[error("Invalid edge {0}: not present in this store")]
    InvalidEdge(EdgeId),

    #[error("Vertex {0} already holds an equal element")]
    DuplicateVertex(VertexId),

    #[error("Edge {0} already holds an equal element")]
    DuplicateEdge(EdgeId),

    #[error("An edge already connects {0} and {1}")]
    EdgeAlreadyExists(VertexId, VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - vertices: slot -> Vertex (insertion order)
/// - edges: slot -> Edge (insertion order)
/// - element_index: element -> vertex slot (uniqueness and lookup)
///
/// Slots are never reused, so a stale handle can never alias a newer element.
/// Cloning the store yields an independent deep copy that keeps the tag, so
/// handles issued before the clone resolve against both copies.
#[derive(Debug, Clone)]
pub struct GraphStore<V, E> {
    tag: StoreTag,

    vertices: IndexMap<u64, Vertex<V>>,

    edges: IndexMap<u64, Edge<E>>,

    element_index: FxHashMap<V, u64>,

    /// Next vertex slot
    next_vertex_slot: u64,

    /// Next edge slot
    next_edge_slot: u64,
}

impl<V, E> GraphStore<V, E>
where
    V: Eq + Hash + Clone,
    E: PartialEq,
{
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            tag: StoreTag::fresh(),
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            element_index: FxHashMap::default(),
            next_vertex_slot: 1,
            next_edge_slot: 1,
        }
    }

    /// Insert a vertex holding `element`
    pub fn insert_vertex(&mut self, element: V) -> GraphResult<VertexId> {
        if let Some(&slot) = self.element_index.get(&element) {
            return Err(GraphError::DuplicateVertex(VertexId::new(self.tag, slot)));
        }

        let slot = self.next_vertex_slot;
        self.next_vertex_slot += 1;
        let id = VertexId::new(self.tag, slot);

        self.element_index.insert(element.clone(), slot);
        self.vertices.insert(slot, Vertex::new(id, element));
        Ok(id)
    }

    /// Insert an edge between two distinct vertices of this store
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId, element: E) -> GraphResult<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::InvalidVertex(v));
        }
        if self.are_adjacent(u, v) {
            return Err(GraphError::EdgeAlreadyExists(u, v));
        }

        let slot = self.next_edge_slot;
        self.next_edge_slot += 1;
        let id = EdgeId::new(self.tag, slot);

        self.edges.insert(slot, Edge::new(id, u, v, element));
        for endpoint in [u, v] {
            if let Some(vertex) = self.vertices.get_mut(&endpoint.slot()) {
                vertex.attach(id);
            }
        }
        Ok(id)
    }

    /// Remove a vertex and every edge incident to it, returning its element
    pub fn remove_vertex(&mut self, v: VertexId) -> GraphResult<V> {
        self.check_vertex(v)?;

        let incident = self
            .vertices
            .get(&v.slot())
            .map(|vertex| vertex.incident.clone())
            .unwrap_or_default();
        for edge in incident {
            self.detach_edge(edge);
        }

        let vertex = self
            .vertices
            .shift_remove(&v.slot())
            .ok_or(GraphError::InvalidVertex(v))?;
        self.element_index.remove(&vertex.element);
        Ok(vertex.element)
    }

    /// Remove an edge, returning its element
    pub fn remove_edge(&mut self, e: EdgeId) -> GraphResult<E> {
        self.check_edge(e)?;
        self.detach_edge(e).ok_or(GraphError::InvalidEdge(e))
    }

    fn detach_edge(&mut self, e: EdgeId) -> Option<E> {
        let edge = self.edges.shift_remove(&e.slot())?;
        for endpoint in edge.endpoints {
            if let Some(vertex) = self.vertices.get_mut(&endpoint.slot()) {
                vertex.detach(e);
            }
        }
        Some(edge.element)
    }

    /// The vertex at the other end of `e` from `v`.
    ///
    /// `Ok(None)` when `e` is no longer in the store or does not touch `v`.
    /// Handles issued by another store are rejected.
    pub fn opposite(&self, v: VertexId, e: EdgeId) -> GraphResult<Option<VertexId>> {
        self.check_vertex(v)?;
        if e.store() != self.tag {
            return Err(GraphError::InvalidEdge(e));
        }
        Ok(self
            .edges
            .get(&e.slot())
            .and_then(|edge| edge.opposite(v)))
    }

    /// True iff an edge connects `u` and `v`
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_between(u, v).is_some()
    }

    /// The edge connecting `u` and `v`, if any. Scans the smaller incidence list.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let a = self.vertex(u)?;
        let b = self.vertex(v)?;
        let (shorter, other) = if a.degree() <= b.degree() { (a, b) } else { (b, a) };

        shorter.incident.iter().copied().find(|&e| {
            self.edges
                .get(&e.slot())
                .is_some_and(|edge| edge.connects(shorter.id, other.id))
        })
    }

    /// Swap the element of `v`, returning the old one.
    ///
    /// The vertex keeps its handle and incident edges.
    pub fn replace_vertex(&mut self, v: VertexId, element: V) -> GraphResult<V> {
        self.check_vertex(v)?;
        if let Some(&slot) = self.element_index.get(&element) {
            if slot != v.slot() {
                return Err(GraphError::DuplicateVertex(VertexId::new(self.tag, slot)));
            }
        }

        let vertex = self
            .vertices
            .get_mut(&v.slot())
            .ok_or(GraphError::InvalidVertex(v))?;
        let old = std::mem::replace(&mut vertex.element, element.clone());
        self.element_index.remove(&old);
        self.element_index.insert(element, v.slot());
        Ok(old)
    }

    /// Swap the element of `e` in place, returning the old one.
    ///
    /// Rejected when any stored edge, `e` included, already holds an equal element.
    pub fn replace_edge(&mut self, e: EdgeId, element: E) -> GraphResult<E> {
        self.check_edge(e)?;
        if let Some(existing) = self.edges.values().find(|edge| edge.element == element) {
            return Err(GraphError::DuplicateEdge(existing.id));
        }

        let edge = self
            .edges
            .get_mut(&e.slot())
            .ok_or(GraphError::InvalidEdge(e))?;
        Ok(std::mem::replace(&mut edge.element, element))
    }

    /// Handle of the vertex holding `element`
    pub fn find_vertex(&self, element: &V) -> Option<VertexId> {
        self.element_index
            .get(element)
            .map(|&slot| VertexId::new(self.tag, slot))
    }
}

impl<V, E> GraphStore<V, E> {
    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(v))
        }
    }

    fn check_edge(&self, e: EdgeId) -> GraphResult<()> {
        if self.contains_edge(e) {
            Ok(())
        } else {
            Err(GraphError::InvalidEdge(e))
        }
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.store() == self.tag && self.vertices.contains_key(&v.slot())
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        e.store() == self.tag && self.edges.contains_key(&e.slot())
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex<V>> {
        if v.store() != self.tag {
            return None;
        }
        self.vertices.get(&v.slot())
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge<E>> {
        if e.store() != self.tag {
            return None;
        }
        self.edges.get(&e.slot())
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> + '_ {
        self.vertices.values()
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.edges.values()
    }

    /// Incident edges of `v`, in insertion order
    pub fn incident_edges(&self, v: VertexId) -> GraphResult<&[EdgeId]> {
        self.vertex(v)
            .map(|vertex| vertex.incident_edges())
            .ok_or(GraphError::InvalidVertex(v))
    }

    pub fn degree(&self, v: VertexId) -> GraphResult<usize> {
        self.incident_edges(v).map(<[EdgeId]>::len)
    }

    pub fn endpoints(&self, e: EdgeId) -> GraphResult<[VertexId; 2]> {
        self.edge(e)
            .map(|edge| edge.endpoints())
            .ok_or(GraphError::InvalidEdge(e))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V, E> Default for GraphStore<V, E>
where
    V: Eq + Hash + Clone,
    E: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}
