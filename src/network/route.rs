//! Route payload: a weighted link between two hubs

use super::ids::RouteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A route with a distance in kilometers.
///
/// Equality covers both the id and the distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    distance: u32,
}

impl Route {
    pub fn new(id: RouteId, distance: u32) -> Self {
        Route { id, distance }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: u32) {
        self.distance = distance;
    }

    /// Copy of this route with another distance
    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }

    /// Distance for display, e.g. "1264 km"
    pub fn display_distance(&self) -> String {
        format!("{} km", self.distance)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.display_distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_distance() {
        let mut route = Route::new(RouteId(3), 1264);
        assert_eq!(route.display_distance(), "1264 km");

        route.set_distance(1300);
        assert_eq!(route.distance(), 1300);
        assert_eq!(route.with_distance(5), Route::new(RouteId(3), 5));
    }

    #[test]
    fn test_equality_includes_distance() {
        assert_eq!(Route::new(RouteId(1), 10), Route::new(RouteId(1), 10));
        assert_ne!(Route::new(RouteId(1), 10), Route::new(RouteId(1), 11));
        assert_ne!(Route::new(RouteId(1), 10), Route::new(RouteId(2), 10));
    }
}
