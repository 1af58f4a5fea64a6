//! Coordinate to node snapping.
//!
//! Campus graphs hold tens to a few hundred nodes, so a linear scan is used
//! instead of a spatial index. Candidates are ranked by squared difference in
//! raw degrees, which orders points correctly only over a small area.

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{Graph, Node, NodeIndex};

/// Node closest to `position`, skipping nodes without coordinates.
///
/// Fails with [`Error::InvalidCoordinate`] when `position` is not finite or
/// lies outside degree ranges.
///
/// When several nodes are equally close the first one in insertion order is
/// returned, so the answer is stable across calls.
pub fn nearest_node(graph: &Graph, position: Coordinate) -> Result<&Node> {
    nearest_index(graph, position).map(|index| graph.node(index))
}

pub(crate) fn nearest_index(graph: &Graph, position: Coordinate) -> Result<NodeIndex> {
    if !position.is_valid() {
        return Err(Error::InvalidCoordinate {
            lat: position.lat,
            lng: position.lng,
        });
    }

    let mut best: Option<(NodeIndex, f64)> = None;
    for (index, node) in graph.nodes().iter().enumerate() {
        let Some(location) = node.location else {
            continue;
        };
        let distance_sq = position.planar_distance_sq(&location);
        let closer = match best {
            Some((_, current)) => distance_sq < current,
            None => true,
        };
        if closer {
            best = Some((index, distance_sq));
        }
    }

    best.map(|(index, _)| index).ok_or(Error::NoLocatedNodes)
}
