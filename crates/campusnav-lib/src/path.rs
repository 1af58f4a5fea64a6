use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Hazards, NodeIndex};

/// Accessibility constraints applied during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccessibilityFilter {
    /// Refuse any arc or arrival node marked with a stair.
    pub avoid_stair: bool,
    /// Refuse any arc or arrival node marked with a curb.
    pub avoid_curb: bool,
}

impl AccessibilityFilter {
    pub fn new(avoid_stair: bool, avoid_curb: bool) -> Self {
        Self {
            avoid_stair,
            avoid_curb,
        }
    }

    /// Filter that admits everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a node or arc is usable under this filter.
    pub fn admits(&self, item: &impl Hazards) -> bool {
        !(self.avoid_stair && item.has_stair()) && !(self.avoid_curb && item.has_curb())
    }
}

/// Lowest-cost path found by [`shortest_path`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Node ids from source to destination, both inclusive.
    pub path: Vec<String>,
    /// Total length in meters.
    pub cost: f64,
    /// Whether any traversed arc or entered node carries a stair.
    pub has_stair_on_path: bool,
    /// Whether any traversed arc or entered node carries a curb.
    pub has_curb_on_path: bool,
}

impl RouteResult {
    /// Id of the last node on the path.
    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run Dijkstra from `source` to `target` honouring `filter`.
///
/// Returns `Ok(None)` when the target exists but cannot be reached under the
/// filter, and an error when either id is unknown. A request where source and
/// target coincide always succeeds with a single-node, zero-cost path.
///
/// An arc is skipped when it, or the node it enters, violates the filter.
/// Ties are broken deterministically: the frontier pops the lowest cost and
/// then the lowest arena index, and an arrival is only replaced by a strictly
/// cheaper one, so the first predecessor found in adjacency order wins.
pub fn shortest_path(
    graph: &Graph,
    source: &str,
    target: &str,
    filter: AccessibilityFilter,
) -> Result<Option<RouteResult>> {
    let start = graph.resolve(source)?;
    let goal = graph.resolve(target)?;
    Ok(shortest_path_indexed(graph, start, goal, filter))
}

pub(crate) fn shortest_path_indexed(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    filter: AccessibilityFilter,
) -> Option<RouteResult> {
    if start == goal {
        return Some(RouteResult {
            path: vec![graph.node(start).id.clone()],
            cost: 0.0,
            has_stair_on_path: false,
            has_curb_on_path: false,
        });
    }

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<Arrival>> = vec![None; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if entry.cost.0 > distances[entry.node] {
            continue;
        }

        if entry.node == goal {
            break;
        }

        for (slot, edge) in graph.outgoing(entry.node).iter().enumerate() {
            let next = edge.target;
            if !filter.admits(edge) || !filter.admits(graph.node(next)) {
                continue;
            }

            let next_cost = entry.cost.0 + edge.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(Arrival {
                    from: entry.node,
                    slot,
                });
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if parents[goal].is_none() {
        debug!(
            source = %graph.node(start).id,
            target = %graph.node(goal).id,
            ?filter,
            "no admissible route"
        );
        return None;
    }

    Some(reconstruct_route(graph, &parents, start, goal, distances[goal]))
}

/// Arc used to reach a node: the predecessor and the arc's position in its
/// adjacency list.
#[derive(Debug, Clone, Copy)]
struct Arrival {
    from: NodeIndex,
    slot: usize,
}

fn reconstruct_route(
    graph: &Graph,
    parents: &[Option<Arrival>],
    start: NodeIndex,
    goal: NodeIndex,
    cost: f64,
) -> RouteResult {
    let mut arrivals = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(arrival) = parents[current] else {
            break;
        };
        arrivals.push(arrival);
        current = arrival.from;
    }
    arrivals.reverse();

    let mut path = Vec::with_capacity(arrivals.len() + 1);
    path.push(graph.node(start).id.clone());
    let mut has_stair_on_path = false;
    let mut has_curb_on_path = false;
    for arrival in arrivals {
        let edge = &graph.outgoing(arrival.from)[arrival.slot];
        let entered = graph.node(edge.target);
        has_stair_on_path |= edge.has_stair || entered.has_stair;
        has_curb_on_path |= edge.has_curb || entered.has_curb;
        path.push(entered.id.clone());
    }

    RouteResult {
        path,
        cost,
        has_stair_on_path,
        has_curb_on_path,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn node(stair: bool, curb: bool) -> Node {
        Node {
            id: "N".to_string(),
            name: String::new(),
            location: None,
            has_stair: stair,
            has_curb: curb,
        }
    }

    #[test]
    fn filter_admission_matrix() {
        let clean = node(false, false);
        let stair = node(true, false);
        let curb = node(false, true);

        let none = AccessibilityFilter::none();
        assert!(none.admits(&clean) && none.admits(&stair) && none.admits(&curb));

        let no_stairs = AccessibilityFilter::new(true, false);
        assert!(no_stairs.admits(&clean));
        assert!(!no_stairs.admits(&stair));
        assert!(no_stairs.admits(&curb));

        let no_curbs = AccessibilityFilter::new(false, true);
        assert!(no_curbs.admits(&stair));
        assert!(!no_curbs.admits(&curb));
    }

    #[test]
    fn queue_pops_lowest_cost_then_lowest_index() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(3, 5.0));
        queue.push(QueueEntry::new(2, 1.0));
        queue.push(QueueEntry::new(1, 1.0));
        queue.push(QueueEntry::new(0, 9.0));

        let order: Vec<NodeIndex> = std::iter::from_fn(|| queue.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn route_result_helpers() {
        let result = RouteResult {
            path: vec!["A".into(), "B".into(), "C".into()],
            cost: 12.0,
            has_stair_on_path: false,
            has_curb_on_path: false,
        };
        assert_eq!(result.destination(), Some("C"));
        assert_eq!(result.hop_count(), 2);
    }
}
