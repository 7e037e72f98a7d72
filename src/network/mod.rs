//! Logistics network facade
//!
//! [`LogisticsNetwork`] owns a `GraphStore<Hub, Route>` and answers the
//! analysis queries by identifier:
//! - hub and route CRUD with id allocation
//! - cheapest path and most distant hubs
//! - degree centrality and connected components
//! - single-level undo and change events

pub mod error;
pub mod event;
pub mod hub;
pub mod ids;
pub mod route;

pub use error::{NetworkError, NetworkResult};
pub use event::NetworkEvent;
pub use hub::{Coordinate, Hub};
pub use ids::{HubId, IdAllocator, RouteId};
pub use route::Route;

use crate::algo::{self, AlgoPath};
use crate::config::NetworkConfig;
use crate::graph::{EdgeId, GraphError, GraphStore, VertexId};
use logistics_graph_algorithms::GraphView;
use rustc_hash::FxHashMap;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// A path through the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Hubs from origin to destination, both included
    pub hubs: Vec<HubId>,
    /// Routes taken, one fewer than `hubs`
    pub routes: Vec<EdgeId>,
    /// Sum of route distances
    pub cost: u64,
}

impl PathResult {
    pub fn origin(&self) -> Option<HubId> {
        self.hubs.first().copied()
    }

    pub fn destination(&self) -> Option<HubId> {
        self.hubs.last().copied()
    }
}

/// Hubs connected by routes
#[derive(Debug)]
pub struct LogisticsNetwork {
    graph: GraphStore<Hub, Route>,

    ids: IdAllocator,

    config: NetworkConfig,

    /// State before the last recorded mutation
    snapshot: Option<GraphStore<Hub, Route>>,

    /// Suspends per-mutation history while a batch runs
    batching: bool,

    events: Option<UnboundedSender<NetworkEvent>>,
}

impl LogisticsNetwork {
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        LogisticsNetwork {
            graph: GraphStore::new(),
            ids: IdAllocator::new(),
            config,
            snapshot: None,
            batching: false,
            events: None,
        }
    }

    /// Create a network that reports every change on the returned channel
    pub fn with_events() -> (Self, UnboundedReceiver<NetworkEvent>) {
        let mut network = Self::new();
        let rx = network.subscribe();
        (network, rx)
    }

    /// Route change events to a new channel, replacing any previous one
    pub fn subscribe(&mut self) -> UnboundedReceiver<NetworkEvent> {
        let (tx, rx) = unbounded_channel();
        self.events = Some(tx);
        rx
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Underlying graph store (read-only)
    pub fn graph(&self) -> &GraphStore<Hub, Route> {
        &self.graph
    }

    fn emit(&self, event: NetworkEvent) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }

    /// Apply a store mutation, saving the prior state on success
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut GraphStore<Hub, Route>) -> Result<T, GraphError>,
    ) -> NetworkResult<T> {
        let before = (self.config.record_history && !self.batching).then(|| self.graph.clone());
        let out = op(&mut self.graph)?;
        if before.is_some() {
            self.snapshot = before;
        }
        Ok(out)
    }

    /// Run `f` as one undo step: a single snapshot up front, none per mutation.
    ///
    /// With `record_history` on, each standalone mutation clones the whole
    /// store first; building a large network inside one batch avoids that.
    pub fn batch<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        if self.config.record_history && !self.batching {
            self.snapshot = Some(self.graph.clone());
        }
        let was_batching = std::mem::replace(&mut self.batching, true);
        let out = f(self);
        self.batching = was_batching;
        out
    }

    // ---------------------------------------------------------------
    // Hubs
    // ---------------------------------------------------------------

    /// Create a hub with a freshly allocated id
    pub fn add_hub(
        &mut self,
        city: impl Into<String>,
        population: u64,
        coordinate: Coordinate,
    ) -> NetworkResult<HubId> {
        let id = self.ids.next_hub().ok_or(NetworkError::IdSpaceExhausted)?;
        self.insert_hub(Hub::new(id, city, population, coordinate))?;
        Ok(id)
    }

    /// Insert a hub built elsewhere; its id must not be in use.
    ///
    /// `HubId(u64::MAX)` is rejected since no id could follow it.
    pub fn insert_hub(&mut self, hub: Hub) -> NetworkResult<VertexId> {
        if self.find_hub(hub.id()).is_some() {
            return Err(NetworkError::DuplicateHubId(hub.id()));
        }
        if hub.id().as_u64() == u64::MAX {
            return Err(NetworkError::IdSpaceExhausted);
        }

        let vertex = self.mutate(|graph| graph.insert_vertex(hub.clone()))?;
        self.ids.observe_hub(hub.id());
        info!("Added hub {} ({})", hub.id(), hub.city());
        self.emit(NetworkEvent::HubAdded { hub });
        Ok(vertex)
    }

    /// Remove a hub and every route touching it
    pub fn remove_hub(&mut self, id: HubId) -> NetworkResult<Hub> {
        let vertex = self.hub_vertex(id)?;
        let routes_removed = self.graph.degree(vertex)?;

        let hub = self.mutate(|graph| graph.remove_vertex(vertex))?;
        info!("Removed hub {} ({}) and {} routes", id, hub.city(), routes_removed);
        self.emit(NetworkEvent::HubRemoved {
            hub: hub.clone(),
            routes_removed,
        });
        Ok(hub)
    }

    pub fn find_hub(&self, id: HubId) -> Option<&Hub> {
        self.graph
            .vertices()
            .map(|vertex| vertex.element())
            .find(|hub| hub.id() == id)
    }

    pub fn hub(&self, id: HubId) -> NetworkResult<&Hub> {
        self.find_hub(id).ok_or(NetworkError::UnknownHub(id))
    }

    /// Store handle of a hub
    pub fn hub_vertex(&self, id: HubId) -> NetworkResult<VertexId> {
        self.graph
            .vertices()
            .find(|vertex| vertex.element().id() == id)
            .map(|vertex| vertex.id())
            .ok_or(NetworkError::UnknownHub(id))
    }

    /// All hubs, in insertion order
    pub fn hubs(&self) -> impl Iterator<Item = &Hub> + '_ {
        self.graph.vertices().map(|vertex| vertex.element())
    }

    pub fn num_hubs(&self) -> usize {
        self.graph.num_vertices()
    }

    fn vertex_index(&self) -> FxHashMap<HubId, VertexId> {
        self.graph
            .vertices()
            .map(|vertex| (vertex.element().id(), vertex.id()))
            .collect()
    }

    // ---------------------------------------------------------------
    // Routes
    // ---------------------------------------------------------------

    /// Connect two hubs with a new route
    pub fn add_route(&mut self, from: HubId, to: HubId, distance: u32) -> NetworkResult<EdgeId> {
        let u = self.hub_vertex(from)?;
        let v = self.hub_vertex(to)?;
        if distance == 0 {
            return Err(NetworkError::InvalidDistance(distance));
        }
        if u == v {
            return Err(GraphError::InvalidVertex(v).into());
        }
        if self.graph.are_adjacent(u, v) {
            return Err(GraphError::EdgeAlreadyExists(u, v).into());
        }

        let route_id = self.ids.next_route().ok_or(NetworkError::IdSpaceExhausted)?;
        let route = Route::new(route_id, distance);
        let edge = self.mutate(|graph| graph.insert_edge(u, v, route))?;
        debug!("Added route {} between {} and {}", route, from, to);
        self.emit(NetworkEvent::RouteAdded { from, to, route });
        Ok(edge)
    }

    /// Disconnect two hubs
    pub fn remove_route(&mut self, from: HubId, to: HubId) -> NetworkResult<Route> {
        let edge = self.route_edge(from, to)?;
        let route = self.mutate(|graph| graph.remove_edge(edge))?;
        debug!("Removed route {} between {} and {}", route, from, to);
        self.emit(NetworkEvent::RouteRemoved { from, to, route });
        Ok(route)
    }

    /// Change the distance of an existing route, returning the old route.
    ///
    /// Setting the distance a route already has is rejected as a duplicate.
    pub fn set_route_distance(
        &mut self,
        from: HubId,
        to: HubId,
        distance: u32,
    ) -> NetworkResult<Route> {
        let edge = self.route_edge(from, to)?;
        if distance == 0 {
            return Err(NetworkError::InvalidDistance(distance));
        }
        let current = *self
            .graph
            .edge(edge)
            .ok_or(NetworkError::RouteNotFound(from, to))?
            .element();
        let new = current.with_distance(distance);

        let old = self.mutate(|graph| graph.replace_edge(edge, new))?;
        debug!("Route {} between {} and {} is now {}", old.id(), from, to, new.display_distance());
        self.emit(NetworkEvent::RouteUpdated { from, to, old, new });
        Ok(old)
    }

    /// Store handle of the route between two hubs
    pub fn route_edge(&self, from: HubId, to: HubId) -> NetworkResult<EdgeId> {
        let u = self.hub_vertex(from)?;
        let v = self.hub_vertex(to)?;
        self.graph
            .edge_between(u, v)
            .ok_or(NetworkError::RouteNotFound(from, to))
    }

    pub fn route_between(&self, from: HubId, to: HubId) -> Option<&Route> {
        let edge = self.route_edge(from, to).ok()?;
        self.graph.edge(edge).map(|edge| edge.element())
    }

    pub fn are_connected(&self, from: HubId, to: HubId) -> bool {
        self.route_between(from, to).is_some()
    }

    pub fn num_routes(&self) -> usize {
        self.graph.num_edges()
    }

    // ---------------------------------------------------------------
    // Analysis
    // ---------------------------------------------------------------

    /// Dense view keyed by hub id and weighted by distance
    pub fn view(&self) -> GraphView {
        algo::build_view(
            &self.graph,
            |hub| hub.id().as_u64(),
            |route| u64::from(route.distance()),
        )
    }

    fn resolve_path(&self, path: AlgoPath) -> NetworkResult<PathResult> {
        let index = self.vertex_index();
        let hubs: Vec<HubId> = path.path.iter().map(|&node| HubId(node)).collect();

        let routes = hubs
            .windows(2)
            .map(|pair| {
                let u = index.get(&pair[0])?;
                let v = index.get(&pair[1])?;
                self.graph.edge_between(*u, *v)
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(NetworkError::NoPathFound)?;

        Ok(PathResult {
            hubs,
            routes,
            cost: path.cost,
        })
    }

    /// Cheapest path between two hubs.
    ///
    /// A hub to itself is a zero-cost path; an unreachable destination is
    /// `NoPathFound`.
    pub fn shortest_path(&self, from: HubId, to: HubId) -> NetworkResult<PathResult> {
        self.hub_vertex(from)?;
        self.hub_vertex(to)?;

        let view = self.view();
        let Some(path) = algo::dijkstra(&view, from.as_u64(), to.as_u64()) else {
            debug!("No path from {} to {}", from, to);
            return Err(NetworkError::NoPathFound);
        };
        self.resolve_path(path)
    }

    /// The pair of hubs with the largest probed path cost.
    ///
    /// Uses the configured [`SpanProbe`](crate::algo::SpanProbe). Fails with
    /// `NoPathFound` when no two hubs are connected.
    pub fn most_distant_hubs(&self) -> NetworkResult<PathResult> {
        let view = self.view();
        let span = algo::network_span(&view, self.config.span_probe)
            .ok_or(NetworkError::NoPathFound)?;
        debug!(
            "Most distant hubs: {} to {} ({})",
            span.source, span.target, span.cost
        );
        self.resolve_path(span)
    }

    /// Every hub ranked by degree, highest first; ties by ascending hub id
    pub fn centrality(&self) -> Vec<(HubId, usize)> {
        algo::degree_centrality(&self.view())
            .sorted()
            .iter()
            .map(|&(node, degree)| (HubId(node), degree))
            .collect()
    }

    /// The `k` most central hubs, or all of them when fewer exist
    pub fn top_central_hubs(&self, k: usize) -> Vec<(HubId, usize)> {
        algo::degree_centrality(&self.view())
            .top_n(k)
            .into_iter()
            .map(|(node, degree)| (HubId(node), degree))
            .collect()
    }

    /// [`top_central_hubs`](Self::top_central_hubs) with the configured `top_k`
    pub fn default_top_central_hubs(&self) -> Vec<(HubId, usize)> {
        self.top_central_hubs(self.config.top_k)
    }

    /// Number of connected components; an isolated hub counts as one
    pub fn component_count(&self) -> usize {
        algo::weakly_connected_components(&self.view()).component_count()
    }

    /// Members of each component, in discovery order
    pub fn components(&self) -> Vec<Vec<HubId>> {
        algo::weakly_connected_components(&self.view())
            .components
            .into_iter()
            .map(|members| members.into_iter().map(HubId).collect())
            .collect()
    }

    // ---------------------------------------------------------------
    // History
    // ---------------------------------------------------------------

    /// Save the current state in the undo slot, replacing what it held
    pub fn save_snapshot(&mut self) {
        self.snapshot = Some(self.graph.clone());
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replace the current state with the saved one and empty the slot.
    ///
    /// Id sequences are not rewound.
    pub fn restore_snapshot(&mut self) -> NetworkResult<()> {
        let snapshot = self.snapshot.take().ok_or(NetworkError::NoSnapshot)?;
        self.graph = snapshot;
        info!(
            "Restored snapshot: {} hubs, {} routes",
            self.graph.num_vertices(),
            self.graph.num_edges()
        );
        self.emit(NetworkEvent::Restored);
        Ok(())
    }
}

impl Default for LogisticsNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_without_history() -> LogisticsNetwork {
        LogisticsNetwork::with_config(NetworkConfig {
            record_history: false,
            ..NetworkConfig::default()
        })
    }

    #[test]
    fn test_add_hub_allocates_ids() {
        let mut network = LogisticsNetwork::new();
        let a = network.add_hub("lisboa", 1000, Coordinate::new(1000, 500)).unwrap();
        let b = network.add_hub("porto", 900, Coordinate::new(950, 800)).unwrap();

        assert_eq!(a, HubId(1));
        assert_eq!(b, HubId(2));
        assert_eq!(network.num_hubs(), 2);
        assert_eq!(network.hub(b).unwrap().city(), "porto");
        assert_eq!(network.hub(HubId(9)), Err(NetworkError::UnknownHub(HubId(9))));
    }

    #[test]
    fn test_insert_hub_with_taken_id() {
        let mut network = LogisticsNetwork::new();
        let id = network.add_hub("faro", 600, Coordinate::new(750, 200)).unwrap();

        let clash = Hub::new(id, "elvas", 10, Coordinate::default());
        assert_eq!(network.insert_hub(clash), Err(NetworkError::DuplicateHubId(id)));

        // An external id moves the sequence forward
        network
            .insert_hub(Hub::new(HubId(40), "elvas", 10, Coordinate::default()))
            .unwrap();
        let next = network.add_hub("beja", 20, Coordinate::default()).unwrap();
        assert_eq!(next, HubId(41));
    }

    #[test]
    fn test_insert_hub_at_end_of_id_space() {
        let mut network = LogisticsNetwork::new();

        let last = Hub::new(HubId(u64::MAX), "edge", 1, Coordinate::default());
        assert_eq!(network.insert_hub(last), Err(NetworkError::IdSpaceExhausted));
        assert_eq!(network.num_hubs(), 0);
        assert!(!network.has_snapshot());

        // The sequence was not disturbed
        assert_eq!(network.add_hub("a", 1, Coordinate::default()).unwrap(), HubId(1));

        let near_end = Hub::new(HubId(u64::MAX - 1), "edge", 1, Coordinate::default());
        network.insert_hub(near_end).unwrap();
        assert_eq!(
            network.add_hub("b", 1, Coordinate::default()),
            Err(NetworkError::IdSpaceExhausted)
        );
        assert_eq!(network.num_hubs(), 2);
    }

    #[test]
    fn test_batch_is_one_undo_step() {
        let mut network = LogisticsNetwork::new();
        network.add_hub("a", 1, Coordinate::default()).unwrap();

        let hubs = network.batch(|network| {
            let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
            let c = network.add_hub("c", 1, Coordinate::default()).unwrap();
            network.add_route(b, c, 3).unwrap();
            vec![b, c]
        });
        assert_eq!(hubs.len(), 2);
        assert_eq!(network.num_routes(), 1);

        network.restore_snapshot().unwrap();
        assert_eq!(network.num_hubs(), 1);
        assert_eq!(network.num_routes(), 0);
    }

    #[test]
    fn test_add_route_validation() {
        let mut network = network_without_history();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();

        assert_eq!(network.add_route(a, b, 0), Err(NetworkError::InvalidDistance(0)));
        assert_eq!(
            network.add_route(a, HubId(77), 5),
            Err(NetworkError::UnknownHub(HubId(77)))
        );
        assert!(matches!(
            network.add_route(a, a, 5),
            Err(NetworkError::Graph(GraphError::InvalidVertex(_)))
        ));

        network.add_route(a, b, 5).unwrap();
        assert!(matches!(
            network.add_route(b, a, 6),
            Err(NetworkError::Graph(GraphError::EdgeAlreadyExists(_, _)))
        ));
        assert_eq!(network.num_routes(), 1);
        assert_eq!(network.route_between(b, a).unwrap().distance(), 5);
    }

    #[test]
    fn test_route_ids_skip_rejected_routes() {
        let mut network = network_without_history();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        let c = network.add_hub("c", 1, Coordinate::default()).unwrap();

        network.add_route(a, b, 5).unwrap();
        let _ = network.add_route(a, b, 5);
        network.add_route(b, c, 5).unwrap();

        assert_eq!(network.route_between(a, b).unwrap().id(), RouteId(1));
        assert_eq!(network.route_between(b, c).unwrap().id(), RouteId(2));
    }

    #[test]
    fn test_remove_and_update_route() {
        let mut network = network_without_history();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        let c = network.add_hub("c", 1, Coordinate::default()).unwrap();
        network.add_route(a, b, 5).unwrap();

        let old = network.set_route_distance(a, b, 8).unwrap();
        assert_eq!(old.distance(), 5);
        assert_eq!(network.route_between(a, b).unwrap().distance(), 8);
        assert!(matches!(
            network.set_route_distance(a, b, 8),
            Err(NetworkError::Graph(GraphError::DuplicateEdge(_)))
        ));

        assert_eq!(network.remove_route(a, c), Err(NetworkError::RouteNotFound(a, c)));
        assert_eq!(network.remove_route(b, a).unwrap().distance(), 8);
        assert!(!network.are_connected(a, b));
    }

    #[test]
    fn test_remove_hub_cascades() {
        let mut network = network_without_history();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        let c = network.add_hub("c", 1, Coordinate::default()).unwrap();
        network.add_route(a, b, 1).unwrap();
        network.add_route(a, c, 1).unwrap();
        network.add_route(b, c, 1).unwrap();

        let hub = network.remove_hub(a).unwrap();
        assert_eq!(hub.city(), "a");
        assert_eq!(network.num_hubs(), 2);
        assert_eq!(network.num_routes(), 1);
        assert_eq!(network.remove_hub(a), Err(NetworkError::UnknownHub(a)));
    }

    #[test]
    fn test_zero_cost_path_to_self() {
        let mut network = LogisticsNetwork::new();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();

        let path = network.shortest_path(a, a).unwrap();
        assert_eq!(path.cost, 0);
        assert_eq!(path.hubs, vec![a]);
        assert!(path.routes.is_empty());
    }

    #[test]
    fn test_path_lists_routes() {
        let mut network = LogisticsNetwork::new();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        let c = network.add_hub("c", 1, Coordinate::default()).unwrap();
        let ab = network.add_route(a, b, 2).unwrap();
        let bc = network.add_route(b, c, 3).unwrap();
        network.add_route(a, c, 9).unwrap();

        let path = network.shortest_path(a, c).unwrap();
        assert_eq!(path.hubs, vec![a, b, c]);
        assert_eq!(path.routes, vec![ab, bc]);
        assert_eq!(path.cost, 5);
        assert_eq!(path.origin(), Some(a));
        assert_eq!(path.destination(), Some(c));
    }

    #[test]
    fn test_mutations_record_history() {
        let mut network = LogisticsNetwork::new();
        assert!(!network.has_snapshot());

        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        network.add_route(a, b, 4).unwrap();

        // Failed mutations leave the slot alone
        let _ = network.add_route(a, b, 4);
        network.restore_snapshot().unwrap();
        assert_eq!(network.num_hubs(), 2);
        assert_eq!(network.num_routes(), 0);

        assert_eq!(network.restore_snapshot(), Err(NetworkError::NoSnapshot));
    }

    #[test]
    fn test_history_disabled() {
        let mut network = network_without_history();
        network.add_hub("a", 1, Coordinate::default()).unwrap();
        assert!(!network.has_snapshot());

        network.save_snapshot();
        network.add_hub("b", 1, Coordinate::default()).unwrap();
        network.restore_snapshot().unwrap();
        assert_eq!(network.num_hubs(), 1);
    }

    #[test]
    fn test_events() {
        let (mut network, mut rx) = LogisticsNetwork::with_events();
        let a = network.add_hub("a", 1, Coordinate::default()).unwrap();
        let b = network.add_hub("b", 1, Coordinate::default()).unwrap();
        network.add_route(a, b, 3).unwrap();
        network.set_route_distance(a, b, 4).unwrap();
        network.restore_snapshot().unwrap();

        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::HubAdded { .. })));
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::HubAdded { .. })));
        match rx.try_recv() {
            Ok(NetworkEvent::RouteAdded { from, to, route }) => {
                assert_eq!((from, to), (a, b));
                assert_eq!(route.distance(), 3);
            }
            other => panic!("unexpected event {:?}", other),
        }
        match rx.try_recv() {
            Ok(NetworkEvent::RouteUpdated { old, new, .. }) => {
                assert_eq!(old.distance(), 3);
                assert_eq!(new.distance(), 4);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::Restored)));
        assert!(rx.try_recv().is_err());

        // Undo does not rewind ids
        let c = network.add_hub("c", 1, Coordinate::default()).unwrap();
        assert_eq!(c, HubId(3));
    }
}
