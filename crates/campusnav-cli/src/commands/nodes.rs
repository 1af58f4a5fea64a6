//! Nodes command handler.

use anyhow::Result;

use campusnav_lib::Campus;

use crate::output::OutputFormat;

/// List every node in insertion order with its hazard flags.
pub fn handle_nodes(campus: &Campus, format: OutputFormat) -> Result<()> {
    format.render_nodes(campus.graph.nodes())
}
