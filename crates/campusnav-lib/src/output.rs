use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::Graph;
use crate::path::RouteResult;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    #[default]
    PlainText,
    Json,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    /// Length of the arc that led into this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Structured representation of a route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub hops: usize,
    /// Total length in meters.
    pub cost: f64,
    pub has_stair_on_path: bool,
    pub has_curb_on_path: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_distance: Option<f64>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a route into a summary with resolved node names and leg lengths.
    pub fn from_route(graph: &Graph, route: &RouteResult) -> Result<Self> {
        if route.path.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let mut steps = Vec::with_capacity(route.path.len());
        for (index, id) in route.path.iter().enumerate() {
            let node = graph.node_by_id(id);
            let distance = if index == 0 {
                None
            } else {
                leg_distance(graph, &route.path[index - 1], id)
            };
            steps.push(RouteStep {
                index,
                id: id.clone(),
                name: node
                    .map(|node| node.name.clone())
                    .filter(|name| !name.is_empty()),
                location: node.and_then(|node| node.location),
                distance,
            });
        }

        Ok(Self {
            hops: route.hop_count(),
            cost: route.cost,
            has_stair_on_path: route.has_stair_on_path,
            has_curb_on_path: route.has_curb_on_path,
            snap_distance: None,
            steps,
        })
    }

    /// Summarise a plan; `None` when the plan found no route.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Option<Self>> {
        let Some(route) = plan.outcome.route() else {
            return Ok(None);
        };
        let mut summary = Self::from_route(graph, route)?;
        summary.snap_distance = plan.snap_distance;
        Ok(Some(summary))
    }

    /// Render the summary using the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> Result<String> {
        match mode {
            RouteRenderMode::PlainText => Ok(self.render_plain()),
            RouteRenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) else {
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "Route: {} ({}) -> {} ({}) ({} hops, {:.1} m)",
            first.display_name(),
            first.id,
            last.display_name(),
            last.id,
            self.hops,
            self.cost
        );
        if let Some(snap) = self.snap_distance {
            let _ = writeln!(buffer, "Start snapped to {} ({:.1} m away)", first.id, snap);
        }
        for step in &self.steps {
            match step.distance {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({}) +{:.1} m",
                        step.index,
                        step.display_name(),
                        step.id,
                        distance
                    );
                }
                None => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({})",
                        step.index,
                        step.display_name(),
                        step.id
                    );
                }
            }
        }
        let _ = writeln!(
            buffer,
            "Hazards on path: stairs={}, curbs={}",
            yes_no(self.has_stair_on_path),
            yes_no(self.has_curb_on_path)
        );

        buffer
    }
}

fn leg_distance(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    graph
        .outgoing_by_id(from)
        .iter()
        .filter(|edge| edge.to == to)
        .map(|edge| edge.weight)
        .min_by(|a, b| a.total_cmp(b))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
