use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::graph::Graph;
use crate::network::StationId;

/// Raw output of a single-source search: tentative distances and predecessors.
///
/// Stations the search never reached keep an infinite distance and no
/// predecessor. The search stops as soon as the destination is settled, so
/// distances of stations settled later are not final.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    source: StationId,
    distances: HashMap<StationId, f64>,
    predecessors: HashMap<StationId, StationId>,
    settled: usize,
}

impl SearchOutcome {
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Tentative distance to `station`; infinite when it was never reached.
    pub fn distance_to(&self, station: StationId) -> f64 {
        self.distances
            .get(&station)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Predecessor of `station` on the best known path, if any.
    pub fn predecessor(&self, station: StationId) -> Option<StationId> {
        self.predecessors.get(&station).copied()
    }

    /// Number of stations settled before the search stopped.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Whether `destination` was reached from the source.
    pub fn reaches(&self, destination: StationId) -> bool {
        destination == self.source || self.predecessors.contains_key(&destination)
    }

    /// Walk predecessor links back from `destination`.
    ///
    /// Returns `None` when the destination was not reached; never a partial
    /// path or a single-element path holding only the destination.
    pub fn reconstruct_path(&self, destination: StationId) -> Option<Vec<StationId>> {
        if !self.reaches(destination) {
            return None;
        }

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        if current != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }
}

/// Minimum-weight path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub stations: Vec<StationId>,
    pub total_weight: f64,
}

/// Run Dijkstra's algorithm from `source`, stopping once `destination` is settled.
///
/// Weights must be non-negative. When two frontier entries carry equal
/// tentative distances the lower station id is settled first; callers should
/// not rely on this, because different tie orders yield different but equally
/// short paths.
pub fn find_path(graph: &Graph, source: StationId, destination: StationId) -> SearchOutcome {
    let mut distances: HashMap<StationId, f64> = graph
        .station_ids()
        .map(|station| (station, f64::INFINITY))
        .collect();
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut settled: HashSet<StationId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0.0);
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.node) {
            continue;
        }

        if entry.node == destination {
            break;
        }

        let current_distance = entry.cost.0;
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let candidate = current_distance + edge.weight;
            let known = distances.get(&next).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(next, candidate);
                predecessors.insert(next, entry.node);
                queue.push(QueueEntry::new(next, candidate));
            }
        }
    }

    trace!(
        source,
        destination,
        settled = settled.len(),
        metric = %graph.metric(),
        "dijkstra search finished"
    );

    SearchOutcome {
        source,
        distances,
        predecessors,
        settled: settled.len(),
    }
}

/// Find the minimum-weight path between two distinct stations.
///
/// Returns `None` when the destination is unreachable.
pub fn shortest_path(
    graph: &Graph,
    source: StationId,
    destination: StationId,
) -> Option<ShortestPath> {
    let outcome = find_path(graph, source, destination);
    let stations = outcome.reconstruct_path(destination)?;
    Some(ShortestPath {
        stations,
        total_weight: outcome.distance_to(destination),
    })
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
    node: StationId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: StationId, cost: f64) -> Self {
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
