use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Connection, Station, StationId};

/// Edge-weight dimension selected for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMetric {
    /// Minimise track distance (kilometres).
    #[default]
    Distance,
    /// Minimise travel time (minutes).
    Time,
}

impl RouteMetric {
    pub const ALL: [RouteMetric; 2] = [RouteMetric::Distance, RouteMetric::Time];

    /// Label shown to riders for this optimisation target.
    pub fn route_type_label(self) -> &'static str {
        match self {
            RouteMetric::Distance => "Shortest Distance",
            RouteMetric::Time => "Shortest Time",
        }
    }
}

impl fmt::Display for RouteMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMetric::Distance => "distance",
            RouteMetric::Time => "time",
        };
        f.write_str(value)
    }
}

/// Directed half of a connection within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: StationId,
    pub weight: f64,
}

/// Adjacency structure used by the shortest-path engine.
#[derive(Debug, Clone)]
pub struct Graph {
    metric: RouteMetric,
    adjacency: Arc<HashMap<StationId, Vec<Edge>>>,
}

impl Graph {
    /// Metric whose weights this graph carries.
    pub fn metric(&self) -> RouteMetric {
        self.metric
    }

    /// Return the neighbours for a given station identifier.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the station has an entry (possibly with no neighbours).
    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Every station identifier known to the graph, in no particular order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Cheapest direct edge weight between two stations, if they are adjacent.
    pub fn edge_weight(&self, from: StationId, to: StationId) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
    }

    /// Sum of edge weights along consecutive stations of `path`.
    ///
    /// Returns `None` when two consecutive stations are not adjacent.
    pub fn path_weight(&self, path: &[StationId]) -> Option<f64> {
        path.windows(2)
            .map(|pair| self.edge_weight(pair[0], pair[1]))
            .sum()
    }
}

/// Build the adjacency for `metric` from the full station and connection lists.
///
/// Every station gets an entry, including isolated ones. Each connection adds
/// one entry in both directions with the same weight. Dangling endpoints,
/// duplicate station ids, and weights that are not strictly positive are
/// reported as data-integrity errors.
pub fn build_graph(
    stations: &[Station],
    connections: &[Connection],
    metric: RouteMetric,
) -> Result<Graph> {
    let mut adjacency: HashMap<StationId, Vec<Edge>> = HashMap::with_capacity(stations.len());
    for station in stations {
        if adjacency.insert(station.id, Vec::new()).is_some() {
            return Err(Error::DuplicateStation { id: station.id });
        }
    }

    for connection in connections {
        for endpoint in [connection.from, connection.to] {
            if !adjacency.contains_key(&endpoint) {
                return Err(Error::DanglingConnection {
                    from: connection.from,
                    to: connection.to,
                    missing: endpoint,
                });
            }
        }

        let weight = connection.weight(metric);
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight {
                from: connection.from,
                to: connection.to,
                metric,
                value: weight,
            });
        }

        if let Some(edges) = adjacency.get_mut(&connection.from) {
            edges.push(Edge {
                target: connection.to,
                weight,
            });
        }
        if let Some(edges) = adjacency.get_mut(&connection.to) {
            edges.push(Edge {
                target: connection.from,
                weight,
            });
        }
    }

    debug!(
        %metric,
        stations = adjacency.len(),
        connections = connections.len(),
        "built routing graph"
    );

    Ok(Graph {
        metric,
        adjacency: Arc::new(adjacency),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::LineCode;

    fn station(id: StationId) -> Station {
        Station {
            id,
            name: format!("S{id}"),
            line: LineCode::Red,
        }
    }

    fn connection(from: StationId, to: StationId, distance: f64, time: f64) -> Connection {
        Connection {
            from,
            to,
            distance,
            time,
        }
    }

    #[test]
    fn edges_are_symmetric_with_selected_weight() {
        let stations = vec![station(1), station(2)];
        let connections = vec![connection(1, 2, 2.5, 4.0)];

        let distance = build_graph(&stations, &connections, RouteMetric::Distance).unwrap();
        assert_eq!(distance.metric(), RouteMetric::Distance);
        assert_eq!(distance.edge_weight(1, 2), Some(2.5));
        assert_eq!(distance.edge_weight(2, 1), Some(2.5));

        let time = build_graph(&stations, &connections, RouteMetric::Time).unwrap();
        assert_eq!(time.edge_weight(1, 2), Some(4.0));
        assert_eq!(time.edge_weight(2, 1), Some(4.0));
    }

    #[test]
    fn isolated_stations_have_empty_entries() {
        let stations = vec![station(1), station(2), station(3)];
        let connections = vec![connection(1, 2, 1.0, 1.0)];
        let graph = build_graph(&stations, &connections, RouteMetric::Distance).unwrap();

        assert_eq!(graph.len(), 3);
        assert!(graph.contains(3));
        assert!(graph.neighbours(3).is_empty());
        assert!(graph.neighbours(42).is_empty());
    }

    #[test]
    fn dangling_endpoint_is_rejected() {
        let stations = vec![station(1)];
        let connections = vec![connection(1, 9, 1.0, 1.0)];
        let err = build_graph(&stations, &connections, RouteMetric::Time).unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingConnection {
                from: 1,
                to: 9,
                missing: 9
            }
        ));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn non_positive_weights_are_rejected() {
        let stations = vec![station(1), station(2)];
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let connections = vec![connection(1, 2, bad, 1.0)];
            let err = build_graph(&stations, &connections, RouteMetric::Distance).unwrap_err();
            assert!(matches!(err, Error::InvalidWeight { .. }), "weight {bad}");
        }

        // Only the selected metric is inspected.
        let connections = vec![connection(1, 2, 0.0, 1.0)];
        assert!(build_graph(&stations, &connections, RouteMetric::Time).is_ok());
    }

    #[test]
    fn duplicate_station_ids_are_rejected() {
        let stations = vec![station(1), station(1)];
        let err = build_graph(&stations, &[], RouteMetric::Distance).unwrap_err();
        assert!(matches!(err, Error::DuplicateStation { id: 1 }));
    }

    #[test]
    fn path_weight_sums_consecutive_edges() {
        let stations = vec![station(1), station(2), station(3)];
        let connections = vec![connection(1, 2, 1.5, 2.0), connection(2, 3, 2.0, 3.0)];
        let graph = build_graph(&stations, &connections, RouteMetric::Distance).unwrap();

        assert_eq!(graph.path_weight(&[1, 2, 3]), Some(3.5));
        assert_eq!(graph.path_weight(&[1, 3]), None);
        assert_eq!(graph.path_weight(&[1]), Some(0.0));
    }

    #[test]
    fn parallel_connections_keep_cheapest_weight_lookup() {
        let stations = vec![station(1), station(2)];
        let connections = vec![connection(1, 2, 3.0, 1.0), connection(2, 1, 2.0, 1.0)];
        let graph = build_graph(&stations, &connections, RouteMetric::Distance).unwrap();
        assert_eq!(graph.neighbours(1).len(), 2);
        assert_eq!(graph.edge_weight(1, 2), Some(2.0));
    }
}
