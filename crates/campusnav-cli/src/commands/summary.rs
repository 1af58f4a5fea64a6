//! Summary command handler.

use anyhow::Result;

use campusnav_lib::Campus;

use crate::output::{OutputFormat, SummaryOutput};

/// Print graph statistics and the building count.
pub fn handle_summary(campus: &Campus, format: OutputFormat) -> Result<()> {
    let output = SummaryOutput::new(&campus.graph, campus.buildings.len());
    format.render_summary(&campus.graph, &output)
}
