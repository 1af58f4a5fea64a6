use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campusnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Load-time variants (decode and validation failures) abort graph
/// construction. Query-time variants only affect the call that raised them.
/// "No route" and "no valid gate" are not errors; see
/// [`RouteOutcome`](crate::RouteOutcome) and [`GateOutcome`](crate::GateOutcome).
#[derive(Debug, Error)]
pub enum Error {
    /// Data directory could not be located at the resolved path.
    #[error("campus dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the campus dataset")]
    ProjectDirsUnavailable,

    /// A JSON document was not an array of records.
    #[error("failed to decode {kind} records: {source}")]
    DecodeDocument {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A single input record could not be decoded.
    #[error("failed to decode {kind} record #{index}: {source}")]
    DecodeRecord {
        kind: &'static str,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A node record had no id, or an id made only of whitespace.
    #[error("node record #{index} is missing an id")]
    MissingNodeId { index: usize },

    /// Two node records shared the same id.
    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    /// An edge referenced a node that does not exist.
    #[error("edge {field} references unknown node: {id}")]
    UnknownEdgeEndpoint { field: &'static str, id: String },

    /// A node used as an edge endpoint has no coordinates.
    #[error("location missing for node {node}; edge weight cannot be computed")]
    MissingCoordinate { node: String },

    /// The computed edge weight was zero, negative, or not a finite number.
    #[error("computed weight for edge {from} -> {to} must be > 0 (got {weight}); check coordinates")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when a node id could not be found in the graph.
    #[error("unknown node id: {id}{}", format_suggestions(.suggestions))]
    UnknownNode {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when a building id could not be found in the directory.
    #[error("unknown building id: {id}{}", format_suggestions(.suggestions))]
    UnknownBuilding {
        id: String,
        suggestions: Vec<String>,
    },

    /// A query position was NaN, infinite, or outside degree ranges.
    #[error("invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Raised when a coordinate lookup runs against a graph without located nodes.
    #[error("graph has no nodes with coordinates")]
    NoLocatedNodes,

    /// Raised when a route summary is built from an empty path.
    #[error("route path was empty")]
    EmptyRoute,

    /// Raised when serializing output fails.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error prevents a graph from being built at all.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::DatasetNotFound { .. }
                | Error::ProjectDirsUnavailable
                | Error::DecodeDocument { .. }
                | Error::DecodeRecord { .. }
                | Error::MissingNodeId { .. }
                | Error::DuplicateNodeId { .. }
                | Error::UnknownEdgeEndpoint { .. }
                | Error::MissingCoordinate { .. }
                | Error::InvalidEdgeWeight { .. }
                | Error::Io(_)
        )
    }

    /// Whether this error was caused by malformed query input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidCoordinate { .. })
    }

    /// Whether this error is a per-request lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::UnknownNode { .. } | Error::UnknownBuilding { .. } | Error::NoLocatedNodes
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
