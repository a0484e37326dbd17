//! Route computation entry points.
//!
//! This module provides:
//! - [`RouteRequest`] - A query: source, destination, metric, and derivation mode
//! - [`RouteResult`] - The immutable record produced for a successful query
//! - [`compute_route`] - Validate, search, and summarise in one call
//! - [`resolve_station`] - Turn user input (an id or a name) into a station id
//!
//! # Example
//!
//! ```ignore
//! use metro_lib::{compute_route, load_network, RouteMetric, RouteRequest};
//!
//! let network = load_network("docs/fixtures/metro_network.json".as_ref())?;
//! let result = compute_route(&network, &RouteRequest::new(1, 18, RouteMetric::Time))?;
//! println!("{} -> {}: {} min, fare {}", result.source_name, result.destination_name, result.time, result.fare);
//! ```

mod summarizer;

pub use summarizer::{
    MetricDerivation, RouteResult, RouteSummarizer, KM_PER_STATION, MINUTES_PER_STATION,
};

use tracing::debug;

use crate::error::{Error, Result, SelectionIssue};
use crate::fare::calculate_fare;
use crate::graph::RouteMetric;
use crate::network::{MetroNetwork, StationId};
use crate::path::shortest_path;

/// Number of suggestions offered for an unknown station name.
const MAX_NAME_SUGGESTIONS: usize = 3;

/// High-level route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub source: Option<StationId>,
    pub destination: Option<StationId>,
    pub metric: RouteMetric,
    pub derivation: MetricDerivation,
}

impl RouteRequest {
    /// Query between two selected stations using the default derivation.
    pub fn new(source: StationId, destination: StationId, metric: RouteMetric) -> Self {
        Self {
            source: Some(source),
            destination: Some(destination),
            metric,
            derivation: MetricDerivation::default(),
        }
    }

    pub fn with_derivation(mut self, derivation: MetricDerivation) -> Self {
        self.derivation = derivation;
        self
    }

    /// Check the selection itself, before any station lookup.
    pub fn validate_selection(&self) -> Result<(StationId, StationId)> {
        let source = self.source.ok_or(Error::InvalidSelection {
            reason: SelectionIssue::MissingSource,
        })?;
        let destination = self.destination.ok_or(Error::InvalidSelection {
            reason: SelectionIssue::MissingDestination,
        })?;
        if source == destination {
            return Err(Error::InvalidSelection {
                reason: SelectionIssue::SameStation(source),
            });
        }
        Ok((source, destination))
    }
}

/// Compute the recommended route for `request`.
///
/// Steps:
/// 1. Reject unset or identical endpoints
/// 2. Reject ids missing from the network
/// 3. Search the prebuilt graph for the selected metric
/// 4. Summarise the path into a [`RouteResult`]
pub fn compute_route(network: &MetroNetwork, request: &RouteRequest) -> Result<RouteResult> {
    let (source_id, destination_id) = request.validate_selection()?;
    let source = network.require_station(source_id)?;
    let destination = network.require_station(destination_id)?;

    let graph = network.graph(request.metric);
    let path =
        shortest_path(graph, source_id, destination_id).ok_or_else(|| Error::NoPathFound {
            origin: source.name.clone(),
            destination: destination.name.clone(),
        })?;

    let result = RouteSummarizer::new(network, request.derivation).summarize(
        source,
        destination,
        path,
        request.metric,
    );

    debug!(
        source = source_id,
        destination = destination_id,
        metric = %request.metric,
        stations = result.station_count(),
        distance = result.distance,
        time = result.time,
        fare = result.fare,
        "computed route"
    );

    Ok(result)
}

/// Convenience wrapper over [`compute_route`] for two known ids.
pub fn compute_route_between(
    network: &MetroNetwork,
    source: StationId,
    destination: StationId,
    metric: RouteMetric,
) -> Result<RouteResult> {
    compute_route(network, &RouteRequest::new(source, destination, metric))
}

/// Fare for a distance in kilometres.
pub fn compute_fare(distance_km: f64) -> u32 {
    calculate_fare(distance_km)
}

/// Resolve user input to a station id.
///
/// Numeric input is treated as an id and must exist. Anything else is looked
/// up by name, with fuzzy suggestions attached when no station matches.
pub fn resolve_station(network: &MetroNetwork, query: &str) -> Result<StationId> {
    let trimmed = query.trim();
    if let Ok(id) = trimmed.parse::<StationId>() {
        return network.require_station(id).map(|station| station.id);
    }

    network.station_id_by_name(trimmed).ok_or_else(|| {
        let suggestions = network.fuzzy_station_matches(trimmed, MAX_NAME_SUGGESTIONS);
        Error::UnknownStationName {
            name: trimmed.to_string(),
            suggestions,
        }
    })
}
