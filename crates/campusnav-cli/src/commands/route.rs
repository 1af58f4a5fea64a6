//! Route command handler for computing accessible paths across the campus.

use anyhow::{anyhow, Context, Result};
use clap::{ArgGroup, Args};

use campusnav_lib::{
    plan_route, AccessibilityFilter, Campus, Coordinate, Error as RouteError, RouteDestination,
    RouteOrigin, RouteOutcome, RouteRequest, RouteSummary,
};

use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("origin").required(true).args(["from", "lat"])))]
#[command(group(ArgGroup::new("destination").required(true).args(["to", "building"])))]
pub struct RouteCommandArgs {
    /// Starting node id.
    #[arg(long = "from")]
    pub from: Option<String>,
    /// Starting latitude; snapped to the nearest node.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Starting longitude; snapped to the nearest node.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
    /// Destination node id.
    #[arg(long = "to")]
    pub to: Option<String>,
    /// Destination building id; the best reachable gate is chosen.
    #[arg(long)]
    pub building: Option<String>,
    /// Refuse stairs on edges and nodes.
    #[arg(long)]
    pub avoid_stair: bool,
    /// Refuse curbs on edges and nodes.
    #[arg(long)]
    pub avoid_curb: bool,
}

impl RouteCommandArgs {
    pub fn filter(&self) -> AccessibilityFilter {
        AccessibilityFilter::new(self.avoid_stair, self.avoid_curb)
    }

    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> Result<RouteRequest> {
        let origin = match (&self.from, self.lat, self.lng) {
            (Some(id), _, _) => RouteOrigin::Node(id.clone()),
            (None, Some(lat), Some(lng)) => RouteOrigin::Position(Coordinate::new(lat, lng)),
            _ => return Err(anyhow!("either --from or both --lat and --lng are required")),
        };
        let destination = match (&self.to, &self.building) {
            (Some(id), _) => RouteDestination::Node(id.clone()),
            (None, Some(building)) => RouteDestination::Building(building.clone()),
            (None, None) => return Err(anyhow!("either --to or --building is required")),
        };

        Ok(RouteRequest {
            origin,
            destination,
            filter: self.filter(),
        })
    }
}

/// Handle the route subcommand.
///
/// Plans the route and prints it. "No route" and "no valid gate" outcomes are
/// reported as errors so the process exits with a non-zero status.
pub fn handle_route_command(
    campus: &Campus,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request()?;
    let plan = plan_route(campus, &request).map_err(handle_route_failure)?;

    match &plan.outcome {
        RouteOutcome::Found(_) => {
            let summary = RouteSummary::from_plan(&campus.graph, &plan)
                .context("failed to build route summary for display")?
                .ok_or_else(|| anyhow!("route summary missing for a found route"))?;
            format.render_route(&summary)
        }
        RouteOutcome::NoRoute => Err(anyhow!(format_no_route_message(
            &plan.start,
            &request.destination,
            request.filter
        ))),
        RouteOutcome::NoValidGate => Err(anyhow!(format_no_valid_gate_message(
            &request.destination,
            request.filter
        ))),
    }
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownNode { id, suggestions } => {
            anyhow!(format_unknown_message("node", &id, &suggestions))
        }
        RouteError::UnknownBuilding { id, suggestions } => {
            anyhow!(format_unknown_message("building", &id, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_message(kind: &str, id: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown {} '{}'.", kind, id);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{}'?", only)),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn destination_label(destination: &RouteDestination) -> String {
    match destination {
        RouteDestination::Node(id) => id.clone(),
        RouteDestination::Building(id) => format!("building '{}'", id),
    }
}

fn relax_tips(filter: AccessibilityFilter) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if filter.avoid_stair {
        tips.push("dropping --avoid-stair");
    }
    if filter.avoid_curb {
        tips.push("dropping --avoid-curb");
    }
    tips
}

fn format_no_route_message(
    start: &str,
    destination: &RouteDestination,
    filter: AccessibilityFilter,
) -> String {
    let mut message = format!(
        "No route found from {} to {}.",
        start,
        destination_label(destination)
    );
    let tips = relax_tips(filter);
    if tips.is_empty() {
        message.push_str(" The destination is not connected to the start.");
    } else {
        message.push_str(&format!(" Try {}.", tips.join(", ")));
    }
    message
}

fn format_no_valid_gate_message(
    destination: &RouteDestination,
    filter: AccessibilityFilter,
) -> String {
    let mut message = format!(
        "No usable gate for {} under the current accessibility filter.",
        destination_label(destination)
    );
    let tips = relax_tips(filter);
    if !tips.is_empty() {
        message.push_str(&format!(" Try {}.", tips.join(", ")));
    }
    message
}
