//! Core handle types for the graph store

use std::fmt;
use uuid::Uuid;

/// Identity of one [`GraphStore`](super::GraphStore) instance.
///
/// Every handle carries the tag of the store that issued it, so a handle
/// presented to a different store is rejected instead of aliasing a slot.
/// Clones of a store share its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreTag(Uuid);

impl StoreTag {
    pub(crate) fn fresh() -> Self {
        StoreTag(Uuid::new_v4())
    }
}

/// Opaque handle to a vertex, valid only for the store that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    store: StoreTag,
    slot: u64,
}

impl VertexId {
    pub(crate) fn new(store: StoreTag, slot: u64) -> Self {
        VertexId { store, slot }
    }

    pub(crate) fn store(&self) -> StoreTag {
        self.store
    }

    /// Store-local slot number (never reused within a store)
    pub fn slot(&self) -> u64 {
        self.slot
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.slot)
    }
}

/// Opaque handle to an edge, valid only for the store that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    store: StoreTag,
    slot: u64,
}

impl EdgeId {
    pub(crate) fn new(store: StoreTag, slot: u64) -> Self {
        EdgeId { store, slot }
    }

    pub(crate) fn store(&self) -> StoreTag {
        self.store
    }

    /// Store-local slot number (never reused within a store)
    pub fn slot(&self) -> u64 {
        self.slot
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let tag = StoreTag::fresh();
        let id = VertexId::new(tag, 42);
        assert_eq!(id.slot(), 42);
        assert_eq!(format!("{}", id), "VertexId(42)");
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(StoreTag::fresh(), 99);
        assert_eq!(id.slot(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_handles_from_different_stores_differ() {
        let a = VertexId::new(StoreTag::fresh(), 1);
        let b = VertexId::new(StoreTag::fresh(), 1);
        assert_ne!(a, b);
        assert_ne!(a.store(), b.store());
    }

    #[test]
    fn test_id_ordering_within_store() {
        let tag = StoreTag::fresh();
        assert!(VertexId::new(tag, 1) < VertexId::new(tag, 2));
    }
}
