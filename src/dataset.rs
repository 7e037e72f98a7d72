//! Dataset ingestion
//!
//! A dataset is a list of hub records plus a sparse list of route records
//! that name hubs by their 1-based position in the hub list. Ingestion skips
//! bad or redundant route records instead of failing on them.

use crate::network::{Coordinate, HubId, LogisticsNetwork, NetworkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read or write dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Distance matrix has {rows} rows, expected {expected}")]
    RowCount { rows: usize, expected: usize },

    #[error("Distance matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubRecord {
    pub city: String,
    pub population: u64,
    pub x: i32,
    pub y: i32,
}

impl HubRecord {
    pub fn new(city: impl Into<String>, population: u64, x: i32, y: i32) -> Self {
        HubRecord {
            city: city.into(),
            population,
            x,
            y,
        }
    }
}

/// A route between the hubs at two 1-based positions of [`Dataset::hubs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: usize,
    pub to: usize,
    pub distance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub hubs: Vec<HubRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

impl Dataset {
    /// Turn a square distance matrix into route records.
    ///
    /// Every non-zero cell becomes a record, so a symmetric matrix lists each
    /// route twice; ingestion skips the second copy.
    pub fn from_distance_matrix(hubs: Vec<HubRecord>, matrix: &[Vec<i64>]) -> DatasetResult<Self> {
        let expected = hubs.len();
        if matrix.len() != expected {
            return Err(DatasetError::RowCount {
                rows: matrix.len(),
                expected,
            });
        }

        let mut routes = Vec::new();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != expected {
                return Err(DatasetError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            for (j, &distance) in row.iter().enumerate() {
                if distance != 0 {
                    routes.push(RouteRecord {
                        from: i + 1,
                        to: j + 1,
                        distance,
                    });
                }
            }
        }

        Ok(Dataset { hubs, routes })
    }

    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> DatasetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        debug!("Loading dataset from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> DatasetResult<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

/// Outcome of [`ingest`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Ids of the inserted hubs, aligned with the dataset's hub records
    pub hub_ids: Vec<HubId>,
    pub routes_inserted: usize,
    pub routes_skipped: usize,
}

impl IngestReport {
    pub fn hubs_inserted(&self) -> usize {
        self.hub_ids.len()
    }
}

/// Insert every hub of `dataset`, then every usable route.
///
/// Route records are skipped when they pair a hub with itself, carry a
/// non-positive distance, name a position outside the hub list, or connect
/// hubs that already have a route. The whole ingestion is one undo step.
pub fn ingest(network: &mut LogisticsNetwork, dataset: &Dataset) -> NetworkResult<IngestReport> {
    network.batch(|network| -> NetworkResult<IngestReport> {
        let mut report = IngestReport::default();

        for record in &dataset.hubs {
            let id = network.add_hub(
                record.city.clone(),
                record.population,
                Coordinate::new(record.x, record.y),
            )?;
            report.hub_ids.push(id);
        }

        for record in &dataset.routes {
            let endpoints = (
                position_to_id(&report.hub_ids, record.from),
                position_to_id(&report.hub_ids, record.to),
            );
            let (Some(from), Some(to)) = endpoints else {
                debug!("Skipping route {:?}: unknown hub position", record);
                report.routes_skipped += 1;
                continue;
            };
            let Some(distance) = u32::try_from(record.distance).ok().filter(|&d| d > 0) else {
                debug!("Skipping route {:?}: distance out of range", record);
                report.routes_skipped += 1;
                continue;
            };
            if from == to || network.are_connected(from, to) {
                report.routes_skipped += 1;
                continue;
            }

            network.add_route(from, to, distance)?;
            report.routes_inserted += 1;
        }

        info!(
            "Ingested {} hubs and {} routes ({} skipped)",
            report.hubs_inserted(),
            report.routes_inserted,
            report.routes_skipped
        );
        Ok(report)
    })
}

fn position_to_id(ids: &[HubId], position: usize) -> Option<HubId> {
    position.checked_sub(1).and_then(|idx| ids.get(idx)).copied()
}
