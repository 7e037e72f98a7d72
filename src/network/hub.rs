//! Hub payload: a city in the network

use super::ids::HubId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer map coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A hub (city) in the logistics network.
///
/// Equality and hashing cover every field, so two hubs with the same id but
/// a different city are distinct elements as far as the store is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hub {
    id: HubId,
    city: String,
    population: u64,
    coordinate: Coordinate,
}

impl Hub {
    pub fn new(id: HubId, city: impl Into<String>, population: u64, coordinate: Coordinate) -> Self {
        Hub {
            id,
            city: city.into(),
            population,
            coordinate,
        }
    }

    pub fn id(&self) -> HubId {
        self.id
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.city, self.id.0)
    }
}
