//! Raw input records and their JSON decode contract.
//!
//! Records are the boundary between whatever produced the campus data and
//! the loader. They are decoded leniently (unknown keys ignored, flags
//! default to `false`) but each array element is decoded on its own so a
//! failure points at the exact record that broke.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Node as it appears in `node.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub stair: bool,
    #[serde(default, alias = "crub")]
    pub curb: bool,
}

impl NodeRecord {
    /// Location when both coordinates are present.
    pub fn location(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }),
            _ => None,
        }
    }
}

/// Edge as it appears in `edge.json`.
///
/// `weight` is accepted so existing data files decode, but the loader never
/// reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub stair: bool,
    #[serde(default, alias = "crub")]
    pub curb: bool,
    #[serde(default)]
    pub geometry: Option<Vec<Coordinate>>,
}

/// Graph-wide settings from `meta.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRecord {
    #[serde(default)]
    pub directed: bool,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
}

impl Default for MetaRecord {
    fn default() -> Self {
        Self {
            directed: false,
            unit: default_unit(),
            schema_version: default_schema_version(),
        }
    }
}

fn default_unit() -> String {
    "meter".to_string()
}

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

/// Building as it appears in `building.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub gates: Vec<String>,
}

impl BuildingRecord {
    pub fn location(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }),
            _ => None,
        }
    }
}

/// Decode a JSON array of node records.
pub fn decode_nodes(input: &str) -> Result<Vec<NodeRecord>> {
    decode_array("node", input)
}

/// Decode a JSON array of edge records.
pub fn decode_edges(input: &str) -> Result<Vec<EdgeRecord>> {
    decode_array("edge", input)
}

/// Decode a JSON array of building records.
pub fn decode_buildings(input: &str) -> Result<Vec<BuildingRecord>> {
    decode_array("building", input)
}

/// Decode the meta object.
pub fn decode_meta(input: &str) -> Result<MetaRecord> {
    serde_json::from_str(input).map_err(|source| Error::DecodeRecord {
        kind: "meta",
        index: 0,
        source,
    })
}

fn decode_array<T: DeserializeOwned>(kind: &'static str, input: &str) -> Result<Vec<T>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(input)
        .map_err(|source| Error::DecodeDocument { kind, source })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| Error::DecodeRecord {
                kind,
                index,
                source,
            })
        })
        .collect()
}
