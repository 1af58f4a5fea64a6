//! Edges command handler.

use anyhow::Result;

use campusnav_lib::{Campus, Edge};

use crate::output::OutputFormat;

/// List every stored arc, including the reverse arcs of an undirected graph.
pub fn handle_edges(campus: &Campus, format: OutputFormat) -> Result<()> {
    let arcs: Vec<&Edge> = campus.graph.arcs().collect();
    format.render_edges(&arcs)
}
