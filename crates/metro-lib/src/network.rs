use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, RouteMetric};

/// Numeric identifier for a station.
pub type StationId = i64;

/// Minimum similarity score for a station name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Score assigned when the query appears verbatim inside a station name.
const FUZZY_SUBSTRING_SCORE: f64 = 0.9;

/// Line tag carried by every station.
///
/// The dataset uses single-letter codes (`R`, `B`, `G`, `I`); full names are
/// accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LineCode {
    #[serde(rename = "R", alias = "Red", alias = "red")]
    Red,
    #[serde(rename = "B", alias = "Blue", alias = "blue")]
    Blue,
    #[serde(rename = "G", alias = "Green", alias = "green")]
    Green,
    #[serde(rename = "I", alias = "Interchange", alias = "interchange")]
    Interchange,
}

impl LineCode {
    pub const ALL: [LineCode; 4] = [
        LineCode::Red,
        LineCode::Blue,
        LineCode::Green,
        LineCode::Interchange,
    ];

    /// Human-readable line name.
    pub fn name(self) -> &'static str {
        match self {
            LineCode::Red => "Red",
            LineCode::Blue => "Blue",
            LineCode::Green => "Green",
            LineCode::Interchange => "Interchange",
        }
    }

    /// Single-letter code used by the dataset.
    pub fn code(self) -> char {
        match self {
            LineCode::Red => 'R',
            LineCode::Blue => 'B',
            LineCode::Green => 'G',
            LineCode::Interchange => 'I',
        }
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the transit network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub line: LineCode,
}

/// Undirected edge between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    /// Track distance in kilometres.
    pub distance: f64,
    /// Travel time in minutes.
    pub time: f64,
}

impl Connection {
    /// Weight of this connection under the given metric.
    pub fn weight(&self, metric: RouteMetric) -> f64 {
        match metric {
            RouteMetric::Distance => self.distance,
            RouteMetric::Time => self.time,
        }
    }
}

/// Raw dataset shape as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Validated, immutable view of a metro network.
///
/// Construction rejects duplicate station ids, dangling connection endpoints,
/// and non-positive weights, and builds one graph per [`RouteMetric`] up front.
/// The value is read-only afterwards and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    name_to_id: HashMap<String, StationId>,
    connections: Vec<Connection>,
    distance_graph: Graph,
    time_graph: Graph,
}

impl MetroNetwork {
    /// Validate the dataset and build the per-metric graphs.
    pub fn new(stations: Vec<Station>, connections: Vec<Connection>) -> Result<Self> {
        let distance_graph = build_graph(&stations, &connections, RouteMetric::Distance)?;
        let time_graph = build_graph(&stations, &connections, RouteMetric::Time)?;

        let index = stations
            .iter()
            .enumerate()
            .map(|(position, station)| (station.id, position))
            .collect();

        let mut name_to_id = HashMap::new();
        for station in &stations {
            if let Some(existing) = name_to_id.insert(station.name.clone(), station.id) {
                warn!(
                    name = %station.name,
                    first = existing,
                    second = station.id,
                    "duplicate station name; lookups resolve to the first entry"
                );
                name_to_id.insert(station.name.clone(), existing);
            }
        }

        debug!(
            stations = stations.len(),
            connections = connections.len(),
            "metro network validated"
        );

        Ok(Self {
            stations,
            index,
            name_to_id,
            connections,
            distance_graph,
            time_graph,
        })
    }

    /// Build a network from the raw dataset shape.
    pub fn from_data(data: NetworkData) -> Result<Self> {
        Self::new(data.stations, data.connections)
    }

    /// Parse and validate a JSON dataset.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: NetworkData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Stations in dataset order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Stations tagged with the given line, in dataset order.
    pub fn stations_on_line(&self, line: LineCode) -> impl Iterator<Item = &Station> {
        self.stations
            .iter()
            .filter(move |station| station.line == line)
    }

    /// Lookup a station by identifier.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.index.get(&id).map(|&position| &self.stations[position])
    }

    /// Lookup a station by identifier, failing with [`Error::UnknownStation`].
    pub fn require_station(&self, id: StationId) -> Result<&Station> {
        self.station(id).ok_or(Error::UnknownStation { id })
    }

    /// Lookup a station name by identifier.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.station(id).map(|station| station.name.as_str())
    }

    /// Lookup a station identifier by name.
    ///
    /// Exact matches win; otherwise the first case-insensitive match in
    /// dataset order is returned.
    pub fn station_id_by_name(&self, name: &str) -> Option<StationId> {
        if let Some(id) = self.name_to_id.get(name) {
            return Some(*id);
        }
        self.stations
            .iter()
            .find(|station| station.name.eq_ignore_ascii_case(name))
            .map(|station| station.id)
    }

    /// Station names that look similar to `name`, best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .map(|station| {
                let candidate = station.name.to_lowercase();
                let mut score = strsim::jaro_winkler(&needle, &candidate);
                if candidate.contains(&needle) {
                    score = score.max(FUZZY_SUBSTRING_SCORE);
                }
                (score, station.name.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Prebuilt adjacency for the given metric.
    pub fn graph(&self, metric: RouteMetric) -> &Graph {
        match metric {
            RouteMetric::Distance => &self.distance_graph,
            RouteMetric::Time => &self.time_graph,
        }
    }
}

/// Load and validate a JSON dataset from disk.
pub fn load_network(path: &Path) -> Result<MetroNetwork> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading metro network");
    let contents = fs::read_to_string(path)?;
    MetroNetwork::from_json_str(&contents)
}
