//! campusnav library entry points.
//!
//! This crate loads a campus pedestrian graph from typed node/edge/building
//! records, validates it once, and answers accessibility-constrained
//! shortest-path queries over it: node to node, GPS position to node, and
//! either of those to the best gate of a building. Higher-level consumers
//! (the CLI, or a service layer) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod gates;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod records;
pub mod routing;
pub mod spatial;

pub use dataset::{ensure_campus, load_campus, resolve_data_dir, Campus, DATA_DIR_ENV};
pub use error::{Error, Result};
pub use gates::{resolve_to_building, BuildingDirectory, BuildingInfo, GateOutcome};
pub use geo::{haversine_distance, Coordinate, EARTH_RADIUS_METERS};
pub use graph::{load_graph, Edge, Graph, GraphMeta, Hazards, Node, NodeIndex};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{shortest_path, AccessibilityFilter, RouteResult};
pub use records::{BuildingRecord, EdgeRecord, MetaRecord, NodeRecord};
pub use routing::{
    plan_route, RouteDestination, RouteOrigin, RouteOutcome, RoutePlan, RouteRequest,
};
pub use spatial::nearest_node;
