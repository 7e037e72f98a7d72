//! Network-level errors

use super::ids::HubId;
use crate::graph::GraphError;
use thiserror::Error;

/// Errors returned by [`LogisticsNetwork`](super::LogisticsNetwork) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Hub {0} not found")]
    UnknownHub(HubId),

    #[error("Hub id {0} is already in use")]
    DuplicateHubId(HubId),

    #[error("No route between {0} and {1}")]
    RouteNotFound(HubId, HubId),

    #[error("Invalid route distance {0}: must be positive")]
    InvalidDistance(u32),

    #[error("No path found")]
    NoPathFound,

    #[error("No identifiers left to allocate")]
    IdSpaceExhausted,

    #[error("No snapshot to restore")]
    NoSnapshot,
}

pub type NetworkResult<T> = Result<T, NetworkError>;
