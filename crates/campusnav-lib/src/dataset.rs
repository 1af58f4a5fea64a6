use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::gates::BuildingDirectory;
use crate::graph::{load_graph, Graph};
use crate::records::{decode_buildings, decode_edges, decode_meta, decode_nodes};

/// Environment variable overriding the campus data directory.
pub const DATA_DIR_ENV: &str = "CAMPUSNAV_DATA_DIR";

pub const META_FILENAME: &str = "meta.json";
pub const NODES_FILENAME: &str = "node.json";
pub const EDGES_FILENAME: &str = "edge.json";
pub const BUILDINGS_FILENAME: &str = "building.json";

/// Loaded campus: the routing graph plus the building directory.
#[derive(Debug, Clone, Default)]
pub struct Campus {
    pub graph: Graph,
    pub buildings: BuildingDirectory,
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Pick the data directory to load from.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CAMPUSNAV_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

/// Resolve the data directory and load the campus found there.
pub fn ensure_campus(target: Option<&Path>) -> Result<Campus> {
    let dir = resolve_data_dir(target)?;
    load_campus(&dir)
}

/// Load and validate every campus file in `dir`.
///
/// `node.json` and `edge.json` are required. A missing `meta.json` means an
/// undirected graph in meters; a missing `building.json` means no buildings.
/// Any decode or validation failure aborts the load.
pub fn load_campus(dir: &Path) -> Result<Campus> {
    let nodes_path = dir.join(NODES_FILENAME);
    if !nodes_path.is_file() {
        return Err(Error::DatasetNotFound {
            path: dir.to_path_buf(),
        });
    }

    let meta = match read_optional(&dir.join(META_FILENAME))? {
        Some(contents) => Some(decode_meta(&contents)?),
        None => {
            debug!(dir = %dir.display(), "no meta file; using defaults");
            None
        }
    };
    let nodes = decode_nodes(&fs::read_to_string(&nodes_path)?)?;
    let edges = decode_edges(&fs::read_to_string(dir.join(EDGES_FILENAME))?)?;

    let graph = load_graph(nodes, edges, meta)?;

    let buildings = match read_optional(&dir.join(BUILDINGS_FILENAME))? {
        Some(contents) => BuildingDirectory::from_records(decode_buildings(&contents)?),
        None => BuildingDirectory::default(),
    };

    info!(
        path = %dir.display(),
        buildings = buildings.len(),
        "{}",
        graph.summary()
    );

    Ok(Campus { graph, buildings })
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_target_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/campus"))).expect("resolves");
        assert_eq!(dir, PathBuf::from("/tmp/campus"));
    }

    #[test]
    fn missing_directory_is_dataset_not_found() {
        let err = load_campus(Path::new("/definitely/not/a/campus")).expect_err("missing");
        assert!(matches!(err, Error::DatasetNotFound { .. }));
        assert!(err.is_load_error());
    }
}
