//! Output formatting for command results.
//!
//! Every subcommand renders either a human-oriented text view or pretty JSON
//! on stdout. Logs and errors go to stderr so JSON output stays parseable.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{BuildingInfo, Edge, Graph, Node, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Graph statistics printed by the `summary` command.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput {
    pub nodes: usize,
    pub arcs: usize,
    pub directed: bool,
    pub unit: String,
    pub schema_version: String,
    pub buildings: usize,
}

impl SummaryOutput {
    pub fn new(graph: &Graph, buildings: usize) -> Self {
        let meta = graph.meta();
        Self {
            nodes: graph.node_count(),
            arcs: graph.arc_count(),
            directed: meta.directed,
            unit: meta.unit.clone(),
            schema_version: meta.schema_version.clone(),
            buildings,
        }
    }
}

impl OutputFormat {
    /// Matching render mode for library route summaries.
    pub fn route_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Text => RouteRenderMode::PlainText,
            OutputFormat::Json => RouteRenderMode::Json,
        }
    }

    pub fn render_summary(self, graph: &Graph, output: &SummaryOutput) -> Result<()> {
        match self {
            OutputFormat::Json => print_json(output),
            OutputFormat::Text => {
                println!("{}", graph.summary());
                println!("Buildings: {}", output.buildings);
                Ok(())
            }
        }
    }

    pub fn render_nodes(self, nodes: &[Node]) -> Result<()> {
        match self {
            OutputFormat::Json => print_json(&nodes),
            OutputFormat::Text => {
                println!("Nodes ({}):", nodes.len());
                for node in nodes {
                    println!("{}", format_node_line(node));
                }
                Ok(())
            }
        }
    }

    pub fn render_edges(self, edges: &[&Edge]) -> Result<()> {
        match self {
            OutputFormat::Json => print_json(&edges),
            OutputFormat::Text => {
                println!("Arcs ({}):", edges.len());
                for edge in edges {
                    println!("{}", format_edge_line(edge));
                }
                Ok(())
            }
        }
    }

    pub fn render_buildings(self, buildings: &[&BuildingInfo]) -> Result<()> {
        match self {
            OutputFormat::Json => print_json(&buildings),
            OutputFormat::Text => {
                if buildings.is_empty() {
                    println!("No buildings in dataset.");
                    return Ok(());
                }
                println!("Buildings ({}):", buildings.len());
                for building in buildings {
                    println!("{}", format_building_line(building));
                }
                Ok(())
            }
        }
    }

    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        let rendered = summary
            .render(self.route_mode())
            .context("failed to render route summary")?;
        print!("{}", rendered);
        if self == OutputFormat::Json {
            println!();
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{}", json);
    Ok(())
}

fn format_node_line(node: &Node) -> String {
    let mut flags = Vec::new();
    if node.has_stair {
        flags.push("stair");
    }
    if node.has_curb {
        flags.push("curb");
    }
    if node.location.is_none() {
        flags.push("no location");
    }

    let name = if node.name.is_empty() {
        "<unnamed>"
    } else {
        node.name.as_str()
    };
    if flags.is_empty() {
        format!("  {:<12} {}", node.id, name)
    } else {
        format!("  {:<12} {} [{}]", node.id, name, flags.join(", "))
    }
}

fn format_edge_line(edge: &Edge) -> String {
    let mut flags = Vec::new();
    if edge.has_stair {
        flags.push("stair");
    }
    if edge.has_curb {
        flags.push("curb");
    }

    let mut line = format!("  {} -> {}  {:.1} m", edge.from, edge.to, edge.weight);
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    if !edge.geometry.is_empty() {
        line.push_str(&format!(" (geometry: {} points)", edge.geometry.len()));
    }
    line
}

fn format_building_line(building: &BuildingInfo) -> String {
    let gates = if building.gates.is_empty() {
        "none".to_string()
    } else {
        building.gates.join(", ")
    };
    format!("  {:<12} {} (gates: {})", building.id, building.name, gates)
}
