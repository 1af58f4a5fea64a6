//! Buildings command handler.

use anyhow::Result;

use campusnav_lib::{BuildingInfo, Campus};

use crate::output::OutputFormat;

/// List buildings and the gate ids they declare.
pub fn handle_buildings(campus: &Campus, format: OutputFormat) -> Result<()> {
    let buildings: Vec<&BuildingInfo> = campus.buildings.iter().collect();
    format.render_buildings(&buildings)
}
