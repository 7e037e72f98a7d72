//! Hub and route identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct HubId(pub u64);

impl HubId {
    pub fn new(id: u64) -> Self {
        HubId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HubId({})", self.0)
    }
}

impl From<u64> for HubId {
    fn from(id: u64) -> Self {
        HubId(id)
    }
}

/// Identifier of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RouteId(pub u64);

impl RouteId {
    pub fn new(id: u64) -> Self {
        RouteId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl From<u64> for RouteId {
    fn from(id: u64) -> Self {
        RouteId(id)
    }
}

/// Hands out hub and route identifiers.
///
/// Each kind has its own sequence starting at 1. Identifiers are never
/// reused, including after removals or a snapshot restore. `u64::MAX` is
/// never handed out; reaching it exhausts the sequence.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_hub: u64,
    next_route: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator {
            next_hub: 1,
            next_route: 1,
        }
    }

    /// Next hub id, `None` once the sequence is exhausted
    pub fn next_hub(&mut self) -> Option<HubId> {
        let id = HubId(self.next_hub);
        self.next_hub = self.next_hub.checked_add(1)?;
        Some(id)
    }

    /// Next route id, `None` once the sequence is exhausted
    pub fn next_route(&mut self) -> Option<RouteId> {
        let id = RouteId(self.next_route);
        self.next_route = self.next_route.checked_add(1)?;
        Some(id)
    }

    /// Move the hub sequence past an identifier assigned elsewhere
    pub fn observe_hub(&mut self, id: HubId) {
        self.next_hub = self.next_hub.max(id.0.saturating_add(1));
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
