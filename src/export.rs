//! Export of a network back into plain data
//!
//! Hub order is the network's insertion order, so exporting and ingesting
//! again reproduces the same positions.

use crate::dataset::{Dataset, HubRecord, RouteRecord};
use crate::graph::VertexId;
use crate::network::LogisticsNetwork;

/// Pairwise distance matrix in hub order.
///
/// Cell `[i][j]` holds the distance of the route between hubs `i` and `j`,
/// 0 when they are not connected and on the diagonal.
pub fn distance_matrix(network: &LogisticsNetwork) -> Vec<Vec<u32>> {
    let graph = network.graph();
    let vertices: Vec<_> = graph.vertices().map(|vertex| vertex.id()).collect();

    vertices
        .iter()
        .map(|&u| {
            vertices
                .iter()
                .map(|&v| {
                    if u == v || !graph.are_adjacent(u, v) {
                        return 0;
                    }
                    graph
                        .incident_edges(v)
                        .unwrap_or_default()
                        .iter()
                        .find(|&&e| matches!(graph.opposite(v, e), Ok(Some(other)) if other == u))
                        .and_then(|&e| graph.edge(e))
                        .map_or(0, |edge| edge.element().distance())
                })
                .collect()
        })
        .collect()
}

/// Hub records in hub order and one route record per route
pub fn to_dataset(network: &LogisticsNetwork) -> Dataset {
    let graph = network.graph();
    let positions: Vec<_> = graph.vertices().map(|vertex| vertex.id()).collect();
    let position_of = |v: VertexId| positions.iter().position(|&p| p == v).map(|idx| idx + 1);

    let hubs = network
        .hubs()
        .map(|hub| {
            let coordinate = hub.coordinate();
            HubRecord::new(hub.city(), hub.population(), coordinate.x, coordinate.y)
        })
        .collect();

    let routes = graph
        .edges()
        .filter_map(|edge| {
            let [u, v] = edge.endpoints();
            Some(RouteRecord {
                from: position_of(u)?,
                to: position_of(v)?,
                distance: i64::from(edge.element().distance()),
            })
        })
        .collect();

    Dataset { hubs, routes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Coordinate;

    #[test]
    fn test_distance_matrix() {
        let mut network = LogisticsNetwork::new();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        let c = network.add_hub("c", 1, Coordinate::default()).unwrap();
        network.add_route(a, b, 12).unwrap();
        network.add_route(c, b, 7).unwrap();

        assert_eq!(
            distance_matrix(&network),
            vec![vec![0, 12, 0], vec![12, 0, 7], vec![0, 7, 0]]
        );
    }

    #[test]
    fn test_empty_network() {
        let network = LogisticsNetwork::new();
        assert!(distance_matrix(&network).is_empty());
        assert_eq!(to_dataset(&network), Dataset::default());
    }

    #[test]
    fn test_to_dataset_uses_positions() {
        let mut network = LogisticsNetwork::new();
        let a = network.add_hub("a", 5, Coordinate::new(1, 2)).unwrap();
        let b = network.add_hub("b", 6, Coordinate::new(3, 4)).unwrap();
        let c = network.add_hub("c", 7, Coordinate::new(5, 6)).unwrap();
        network.add_route(c, b, 9).unwrap();
        network.remove_hub(a).unwrap();

        let dataset = to_dataset(&network);
        assert_eq!(
            dataset.hubs,
            vec![HubRecord::new("b", 6, 3, 4), HubRecord::new("c", 7, 5, 6)]
        );
        assert_eq!(dataset.routes, vec![RouteRecord { from: 2, to: 1, distance: 9 }]);
    }
}
