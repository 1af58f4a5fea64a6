//! Route planning over a loaded [`Campus`].
//!
//! This module provides:
//! - [`RouteOrigin`] / [`RouteDestination`] - where a request starts and ends
//! - [`RouteRequest`] - a complete query, including the accessibility filter
//! - [`RoutePlan`] - the resolved start node plus the search outcome
//! - [`plan_route`] - main entry point combining snapping, search and gate selection
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{load_campus, plan_route, Coordinate, RouteRequest};
//!
//! let campus = load_campus("path/to/data".as_ref())?;
//! let request = RouteRequest::from_position(Coordinate::new(37.6195, 127.0594), "BimaHall")
//!     .avoiding_stairs();
//! let plan = plan_route(&campus, &request)?;
//! ```

use serde::Serialize;
use tracing::debug;

use crate::dataset::Campus;
use crate::error::Result;
use crate::gates::{resolve_gates, GateOutcome};
use crate::geo::{haversine_distance, Coordinate};
use crate::path::{shortest_path_indexed, AccessibilityFilter, RouteResult};
use crate::spatial::nearest_index;

/// Where a route starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOrigin {
    /// A node id.
    Node(String),
    /// A raw GPS fix, snapped to the nearest located node.
    Position(Coordinate),
}

/// Where a route ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDestination {
    /// A node id.
    Node(String),
    /// A building id; the best admissible gate is chosen.
    Building(String),
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub origin: RouteOrigin,
    pub destination: RouteDestination,
    pub filter: AccessibilityFilter,
}

impl RouteRequest {
    /// Node-to-node request without constraints.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            origin: RouteOrigin::Node(from.into()),
            destination: RouteDestination::Node(to.into()),
            filter: AccessibilityFilter::none(),
        }
    }

    /// GPS-to-building request without constraints.
    pub fn from_position(position: Coordinate, building: impl Into<String>) -> Self {
        Self {
            origin: RouteOrigin::Position(position),
            destination: RouteDestination::Building(building.into()),
            filter: AccessibilityFilter::none(),
        }
    }

    pub fn with_filter(mut self, filter: AccessibilityFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn avoiding_stairs(mut self) -> Self {
        self.filter.avoid_stair = true;
        self
    }

    pub fn avoiding_curbs(mut self) -> Self {
        self.filter.avoid_curb = true;
        self
    }
}

/// Outcome of a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(RouteResult),
    /// The destination exists but cannot be reached under the filter.
    NoRoute,
    /// The destination building has no gate that satisfies the filter.
    NoValidGate,
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&RouteResult> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoRoute | RouteOutcome::NoValidGate => None,
        }
    }
}

impl From<GateOutcome> for RouteOutcome {
    fn from(outcome: GateOutcome) -> Self {
        match outcome {
            GateOutcome::Route(route) => RouteOutcome::Found(route),
            GateOutcome::NoValidGate => RouteOutcome::NoValidGate,
            GateOutcome::NoRoute => RouteOutcome::NoRoute,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Node the search started from.
    pub start: String,
    /// Meters between a GPS origin and the node it snapped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_distance: Option<f64>,
    pub outcome: RouteOutcome,
}

/// Compute a route for the request.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves the origin, snapping GPS positions to the nearest node
/// 2. Resolves the destination node or building
/// 3. Runs the constrained search, or gate selection for buildings
pub fn plan_route(campus: &Campus, request: &RouteRequest) -> Result<RoutePlan> {
    let graph = &campus.graph;

    let (start, snap_distance) = match &request.origin {
        RouteOrigin::Node(id) => (graph.resolve(id)?, None),
        RouteOrigin::Position(position) => {
            let index = nearest_index(graph, *position)?;
            // Snapping only considers located nodes.
            let snapped = graph
                .node(index)
                .location
                .map(|location| haversine_distance(*position, location));
            debug!(
                lat = position.lat,
                lng = position.lng,
                node = %graph.node(index).id,
                "snapped position to nearest node"
            );
            (index, snapped)
        }
    };

    let outcome = match &request.destination {
        RouteDestination::Node(id) => {
            let goal = graph.resolve(id)?;
            match shortest_path_indexed(graph, start, goal, request.filter) {
                Some(route) => RouteOutcome::Found(route),
                None => RouteOutcome::NoRoute,
            }
        }
        RouteDestination::Building(id) => {
            let building = campus.buildings.resolve(id)?;
            resolve_gates(graph, building, start, request.filter)?.into()
        }
    };

    Ok(RoutePlan {
        start: graph.node(start).id.clone(),
        snap_distance,
        outcome,
    })
}
