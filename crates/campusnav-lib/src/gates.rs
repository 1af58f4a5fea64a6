//! Building lookup and best-gate selection.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{fuzzy_matches, Graph, NodeIndex};
use crate::path::{shortest_path_indexed, AccessibilityFilter, RouteResult};
use crate::records::BuildingRecord;

/// Campus building and the gate nodes it can be entered through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingInfo {
    pub id: String,
    pub name: String,
    pub location: Option<Coordinate>,
    /// Gate node ids in preference order. Not checked against the graph
    /// until a query uses them.
    pub gates: Vec<String>,
}

impl From<BuildingRecord> for BuildingInfo {
    fn from(record: BuildingRecord) -> Self {
        let location = record.location();
        Self {
            id: record.id,
            name: record.name,
            location,
            gates: record.gates,
        }
    }
}

/// Ordered set of buildings with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct BuildingDirectory {
    buildings: Vec<BuildingInfo>,
    by_id: HashMap<String, usize>,
}

impl BuildingDirectory {
    /// Build a directory; when ids repeat, the later record wins.
    pub fn new(buildings: Vec<BuildingInfo>) -> Self {
        let by_id = buildings
            .iter()
            .enumerate()
            .map(|(position, building)| (building.id.clone(), position))
            .collect();
        Self { buildings, by_id }
    }

    pub fn from_records(records: Vec<BuildingRecord>) -> Self {
        Self::new(records.into_iter().map(BuildingInfo::from).collect())
    }

    pub fn get(&self, id: &str) -> Option<&BuildingInfo> {
        self.by_id.get(id).map(|&position| &self.buildings[position])
    }

    /// Look up a building, suggesting close ids on failure.
    pub fn resolve(&self, id: &str) -> Result<&BuildingInfo> {
        self.get(id).ok_or_else(|| Error::UnknownBuilding {
            id: id.to_string(),
            suggestions: fuzzy_matches(
                id,
                self.buildings.iter().map(|building| building.id.as_str()),
                3,
            ),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingInfo> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

/// Result of routing to a building.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Cheapest admissible route; the path ends at the chosen gate.
    Route(RouteResult),
    /// No gate passed the filter, so no search was run.
    NoValidGate,
    /// Admissible gates exist but none is reachable.
    NoRoute,
}

/// Route from `start` to the cheapest reachable gate of `building`.
///
/// Gates whose own node violates the filter are dropped before any search so
/// that "nothing admissible to aim for" is reported as
/// [`GateOutcome::NoValidGate`] and kept apart from "admissible but
/// unreachable". The engine repeats the same arrival-node check during the
/// search; the up-front pass only exists to tell the two outcomes apart.
pub fn resolve_to_building(
    graph: &Graph,
    buildings: &BuildingDirectory,
    start: &str,
    building: &str,
    filter: AccessibilityFilter,
) -> Result<GateOutcome> {
    let info = buildings.resolve(building)?;
    let start_index = graph.resolve(start)?;
    resolve_gates(graph, info, start_index, filter)
}

pub(crate) fn resolve_gates(
    graph: &Graph,
    building: &BuildingInfo,
    start: NodeIndex,
    filter: AccessibilityFilter,
) -> Result<GateOutcome> {
    let candidates = admissible_gates(graph, building, filter);
    if candidates.is_empty() {
        debug!(building = %building.id, ?filter, "no gate satisfies the filter");
        return Ok(GateOutcome::NoValidGate);
    }

    let mut best: Option<RouteResult> = None;
    for gate in candidates {
        let Some(route) = shortest_path_indexed(graph, start, gate, filter) else {
            continue;
        };
        match &best {
            Some(current) if route.cost >= current.cost => {}
            _ => best = Some(route),
        }
    }

    Ok(match best {
        Some(route) => {
            debug!(
                building = %building.id,
                gate = route.destination().unwrap_or_default(),
                cost = route.cost,
                "selected gate"
            );
            GateOutcome::Route(route)
        }
        None => GateOutcome::NoRoute,
    })
}

fn admissible_gates(
    graph: &Graph,
    building: &BuildingInfo,
    filter: AccessibilityFilter,
) -> Vec<NodeIndex> {
    building
        .gates
        .iter()
        .filter_map(|gate| {
            let Some(index) = graph.index_of(gate) else {
                warn!(building = %building.id, gate = %gate, "gate references unknown node");
                return None;
            };
            if !filter.admits(graph.node(index)) {
                debug!(building = %building.id, gate = %gate, "gate rejected by filter");
                return None;
            }
            Some(index)
        })
        .collect()
}
