//! Network change events
//!
//! Emitted on the channel returned by [`LogisticsNetwork::with_events`](super::LogisticsNetwork::with_events)
//! so a front end can refresh without the network knowing about it.

use super::hub::Hub;
use super::ids::HubId;
use super::route::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkEvent {
    HubAdded {
        hub: Hub,
    },
    HubRemoved {
        hub: Hub,
        /// Routes dropped together with the hub
        routes_removed: usize,
    },
    RouteAdded {
        from: HubId,
        to: HubId,
        route: Route,
    },
    RouteRemoved {
        from: HubId,
        to: HubId,
        route: Route,
    },
    RouteUpdated {
        from: HubId,
        to: HubId,
        old: Route,
        new: Route,
    },
    /// The whole network was replaced by the saved snapshot
    Restored,
}
