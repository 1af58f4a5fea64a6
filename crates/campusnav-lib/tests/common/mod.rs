//! Common test utilities and fixture helpers.
//!
//! Provides the checked-in campus fixture plus small in-memory graphs built
//! straight from records.

use std::path::PathBuf;

use campusnav_lib::{load_campus, load_graph, Campus, EdgeRecord, Graph, MetaRecord, NodeRecord};

/// Path to the campus fixture directory.
#[allow(dead_code)]
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus")
}

/// Load the fixture campus, panicking on failure.
#[allow(dead_code)]
pub fn fixture_campus() -> Campus {
    load_campus(&fixture_dir()).expect("fixture campus loads")
}

/// Node record with coordinates and no hazards.
#[allow(dead_code)]
pub fn node(id: &str, lat: f64, lng: f64) -> NodeRecord {
    NodeRecord {
        id: Some(id.to_string()),
        name: id.to_string(),
        lat: Some(lat),
        lng: Some(lng),
        stair: false,
        curb: false,
    }
}

/// Node record with explicit hazard flags.
#[allow(dead_code)]
pub fn hazard_node(id: &str, lat: f64, lng: f64, stair: bool, curb: bool) -> NodeRecord {
    NodeRecord {
        stair,
        curb,
        ..node(id, lat, lng)
    }
}

/// Edge record with explicit hazard flags.
#[allow(dead_code)]
pub fn edge(from: &str, to: &str, stair: bool, curb: bool) -> EdgeRecord {
    EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        weight: None,
        stair,
        curb,
        geometry: None,
    }
}

/// The ~11 m square: A(0,0), B(0,0.0001), C(0.0001,0), D(0.0001,0.0001) with
/// undirected edges A-B (stair), A-C, C-B and B-D.
#[allow(dead_code)]
pub fn square_graph() -> Graph {
    load_graph(
        vec![
            node("A", 0.0, 0.0),
            node("B", 0.0, 0.0001),
            node("C", 0.0001, 0.0),
            node("D", 0.0001, 0.0001),
        ],
        vec![
            edge("A", "B", true, false),
            edge("A", "C", false, false),
            edge("C", "B", false, false),
            edge("B", "D", false, false),
        ],
        None,
    )
    .expect("square graph loads")
}

/// Meta record for a directed graph.
#[allow(dead_code)]
pub fn directed_meta() -> MetaRecord {
    MetaRecord {
        directed: true,
        ..MetaRecord::default()
    }
}
