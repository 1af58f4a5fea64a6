use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{edge_length, Coordinate};
use crate::records::{EdgeRecord, MetaRecord, NodeRecord};

/// Dense position of a node inside the graph's node arena.
pub type NodeIndex = usize;

/// Minimum Jaro-Winkler similarity for an id to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Anything that can carry a stair or curb hazard.
pub trait Hazards {
    fn has_stair(&self) -> bool;
    fn has_curb(&self) -> bool;
}

/// Location on the campus graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub location: Option<Coordinate>,
    pub has_stair: bool,
    pub has_curb: bool,
}

impl Hazards for Node {
    fn has_stair(&self) -> bool {
        self.has_stair
    }

    fn has_curb(&self) -> bool {
        self.has_curb
    }
}

/// Directed arc within the campus graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Great-circle length in meters, computed at load time.
    pub weight: f64,
    pub has_stair: bool,
    pub has_curb: bool,
    pub geometry: Vec<Coordinate>,
    /// Arena index of `to`.
    #[serde(skip)]
    pub target: NodeIndex,
}

impl Hazards for Edge {
    fn has_stair(&self) -> bool {
        self.has_stair
    }

    fn has_curb(&self) -> bool {
        self.has_curb
    }
}

/// Graph-wide settings carried through from the meta record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphMeta {
    pub directed: bool,
    pub unit: String,
    pub schema_version: String,
}

impl From<MetaRecord> for GraphMeta {
    fn from(meta: MetaRecord) -> Self {
        Self {
            directed: meta.directed,
            unit: meta.unit,
            schema_version: meta.schema_version,
        }
    }
}

impl Default for GraphMeta {
    fn default() -> Self {
        MetaRecord::default().into()
    }
}

/// Immutable campus graph.
///
/// Storage is shared behind `Arc`s so clones are cheap and the graph can be
/// handed to any number of concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    meta: GraphMeta,
    nodes: Arc<Vec<Node>>,
    index: Arc<HashMap<String, NodeIndex>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    pub fn meta(&self) -> &GraphMeta {
        &self.meta
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored arcs, including synthesized reverse arcs.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Node at an arena index taken from this graph.
    pub(crate) fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|index| self.node(index))
    }

    /// Resolve an id to its arena index, suggesting close matches on failure.
    pub fn resolve(&self, id: &str) -> Result<NodeIndex> {
        self.index_of(id).ok_or_else(|| Error::UnknownNode {
            id: id.to_string(),
            suggestions: self.fuzzy_node_matches(id, 3),
        })
    }

    /// Outgoing arcs of a node in the order they were stored.
    pub fn outgoing(&self, index: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Outgoing arcs of a node looked up by id; unknown ids have none.
    pub fn outgoing_by_id(&self, id: &str) -> &[Edge] {
        self.index_of(id)
            .map(|index| self.outgoing(index))
            .unwrap_or(&[])
    }

    /// Every stored arc, grouped by source node in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    /// Node ids most similar to `id`, best first.
    pub fn fuzzy_node_matches(&self, id: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(id, self.nodes.iter().map(|node| node.id.as_str()), limit)
    }

    /// One-line description used in logs and the CLI.
    pub fn summary(&self) -> String {
        format!(
            "Graph: nodes={}, arcs={} (directed={}, unit={}, schema={})",
            self.node_count(),
            self.arc_count(),
            self.meta.directed,
            self.meta.unit,
            self.meta.schema_version
        )
    }
}

/// Build a validated graph from decoded records.
///
/// Edge weights are always recomputed from node coordinates; any weight in
/// the input is ignored. When the meta record is absent or undirected, every
/// edge gets a mirrored arc with the same weight and flags and reversed
/// geometry. Any violation aborts the build.
pub fn load_graph(
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    meta: Option<MetaRecord>,
) -> Result<Graph> {
    let meta: GraphMeta = meta.unwrap_or_default().into();

    let mut arena: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut index: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());
    for (position, record) in nodes.into_iter().enumerate() {
        let location = record.location();
        let id = match record.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(Error::MissingNodeId { index: position }),
        };
        if index.contains_key(&id) {
            return Err(Error::DuplicateNodeId { id });
        }
        index.insert(id.clone(), arena.len());
        arena.push(Node {
            id,
            name: record.name,
            location,
            has_stair: record.stair,
            has_curb: record.curb,
        });
    }

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); arena.len()];
    let mut reverse_arcs = 0usize;
    for record in edges {
        let source = *index.get(&record.from).ok_or_else(|| Error::UnknownEdgeEndpoint {
            field: "from",
            id: record.from.clone(),
        })?;
        let target = *index.get(&record.to).ok_or_else(|| Error::UnknownEdgeEndpoint {
            field: "to",
            id: record.to.clone(),
        })?;

        let weight = edge_length(&arena[source], &arena[target])?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidEdgeWeight {
                from: record.from,
                to: record.to,
                weight,
            });
        }

        let geometry = record.geometry.unwrap_or_default();
        let forward = Edge {
            from: record.from,
            to: record.to,
            weight,
            has_stair: record.stair,
            has_curb: record.curb,
            geometry,
            target,
        };

        if !meta.directed {
            let reverse = Edge {
                from: forward.to.clone(),
                to: forward.from.clone(),
                weight,
                has_stair: forward.has_stair,
                has_curb: forward.has_curb,
                geometry: forward.geometry.iter().rev().copied().collect(),
                target: source,
            };
            adjacency[source].push(forward);
            adjacency[target].push(reverse);
            reverse_arcs += 1;
        } else {
            adjacency[source].push(forward);
        }
    }

    let graph = Graph {
        meta,
        nodes: Arc::new(arena),
        index: Arc::new(index),
        adjacency: Arc::new(adjacency),
    };
    debug!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        reverse_arcs,
        directed = graph.meta.directed,
        "campus graph loaded"
    );
    Ok(graph)
}

pub(crate) fn fuzzy_matches<'a>(
    needle: &str,
    candidates: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let needle = needle.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            (
                strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                candidate,
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
