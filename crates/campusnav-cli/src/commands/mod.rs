// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// loads the campus once and dispatches to these handlers.

pub mod buildings;
pub mod edges;
pub mod nodes;
pub mod route;
pub mod summary;

use std::path::Path;

use anyhow::{Context, Result};

use campusnav_lib::{load_campus, resolve_data_dir, Campus};

/// Resolve the data directory and load the campus, with a user-facing context.
pub fn load_dataset(target: Option<&Path>) -> Result<Campus> {
    let dir = resolve_data_dir(target).context("failed to resolve the campus data directory")?;
    load_campus(&dir)
        .with_context(|| format!("failed to load campus dataset from {}", dir.display()))
}
