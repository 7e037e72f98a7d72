//! Logistics Network
//!
//! An in-memory network of hubs (cities) joined by routes (distances in km),
//! with the structural queries a planner asks of it.
//!
//! # Layers
//!
//! - [`graph`]: generic undirected simple graph store with store-scoped handles
//! - [`network`]: hubs, routes and the [`LogisticsNetwork`] facade
//! - [`algo`]: adapter onto the `logistics-graph-algorithms` crate
//!   (Dijkstra, network span, degree centrality, connected components)
//! - [`dataset`] and [`export`]: plain-data ingestion and export
//! - [`config`]: YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use logistics_network::{Coordinate, LogisticsNetwork};
//!
//! let mut network = LogisticsNetwork::new();
//!
//! let lisboa = network.add_hub("lisboa", 1000, Coordinate::new(1000, 500)).unwrap();
//! let setubal = network.add_hub("setubal", 700, Coordinate::new(990, 450)).unwrap();
//! let faro = network.add_hub("faro", 600, Coordinate::new(750, 200)).unwrap();
//!
//! network.add_route(lisboa, setubal, 1264).unwrap();
//! network.add_route(setubal, faro, 1845).unwrap();
//!
//! let path = network.shortest_path(lisboa, faro).unwrap();
//! assert_eq!(path.hubs, vec![lisboa, setubal, faro]);
//! assert_eq!(path.cost, 3109);
//!
//! assert_eq!(network.component_count(), 1);
//! assert_eq!(network.top_central_hubs(1), vec![(setubal, 2)]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod dataset;
pub mod export;
pub mod graph;
pub mod network;

// Re-export main types for convenience
pub use graph::{Edge, EdgeId, GraphError, GraphResult, GraphStore, Vertex, VertexId};

pub use network::{
    Coordinate, Hub, HubId, IdAllocator, LogisticsNetwork, NetworkError, NetworkEvent,
    NetworkResult, PathResult, Route, RouteId,
};

pub use algo::SpanProbe;
pub use config::{ConfigError, NetworkConfig};
pub use dataset::{ingest, Dataset, DatasetError, HubRecord, IngestReport, RouteRecord};
pub use export::{distance_matrix, to_dataset};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
