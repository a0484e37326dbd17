//! Derive distance, time, and fare figures from a computed path.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fare::calculate_fare;
use crate::graph::RouteMetric;
use crate::network::{MetroNetwork, Station, StationId};
use crate::path::ShortestPath;

/// Minutes assumed per station when time was not the searched metric.
pub const MINUTES_PER_STATION: f64 = 2.0;

/// Kilometres assumed per station when distance was not the searched metric.
pub const KM_PER_STATION: f64 = 1.5;

/// How the metric that was *not* searched gets filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDerivation {
    /// Station count times a fixed per-station figure.
    #[default]
    HopEstimate,
    /// Sum of the other metric's connection weights along the chosen path.
    PathWeights,
}

/// Outcome of a successful route query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub source_name: String,
    pub destination_name: String,
    pub metric: RouteMetric,
    /// Kilometres, rounded to one decimal place.
    pub distance: f64,
    /// Whole minutes.
    pub time: u32,
    pub fare: u32,
    pub path: Vec<StationId>,
}

impl RouteResult {
    /// Number of stations on the path, endpoints included.
    pub fn station_count(&self) -> usize {
        self.path.len()
    }

    /// Number of connections travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Turns shortest paths into [`RouteResult`] records.
#[derive(Debug, Clone, Copy)]
pub struct RouteSummarizer<'a> {
    network: &'a MetroNetwork,
    derivation: MetricDerivation,
}

impl<'a> RouteSummarizer<'a> {
    pub fn new(network: &'a MetroNetwork, derivation: MetricDerivation) -> Self {
        Self {
            network,
            derivation,
        }
    }

    /// Build the result for `path`, found by searching under `metric`.
    ///
    /// The searched metric is reported exactly. The other one comes from the
    /// configured [`MetricDerivation`]. The fare is always taken from the
    /// unrounded distance figure.
    pub fn summarize(
        &self,
        source: &Station,
        destination: &Station,
        path: ShortestPath,
        metric: RouteMetric,
    ) -> RouteResult {
        let (distance, time) = match metric {
            RouteMetric::Distance => (
                path.total_weight,
                self.secondary(&path.stations, RouteMetric::Time),
            ),
            RouteMetric::Time => (
                self.secondary(&path.stations, RouteMetric::Distance),
                path.total_weight,
            ),
        };

        RouteResult {
            source_name: source.name.clone(),
            destination_name: destination.name.clone(),
            metric,
            distance: round_to_tenth(distance),
            time: round_minutes(time),
            fare: calculate_fare(distance),
            path: path.stations,
        }
    }

    fn secondary(&self, stations: &[StationId], metric: RouteMetric) -> f64 {
        let estimate = hop_estimate(stations.len(), metric);
        match self.derivation {
            MetricDerivation::HopEstimate => estimate,
            MetricDerivation::PathWeights => self
                .network
                .graph(metric)
                .path_weight(stations)
                .unwrap_or_else(|| {
                    warn!(%metric, "path is not contiguous; falling back to hop estimate");
                    estimate
                }),
        }
    }
}

fn hop_estimate(station_count: usize, metric: RouteMetric) -> f64 {
    let per_station = match metric {
        RouteMetric::Distance => KM_PER_STATION,
        RouteMetric::Time => MINUTES_PER_STATION,
    };
    station_count as f64 * per_station
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_minutes(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
