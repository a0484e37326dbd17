//! Metro route planning.
//!
//! Load a network with [`load_network`], then call [`compute_route`] with a
//! [`RouteRequest`] to get the path, distance, time and fare. Fares on their
//! own come from [`calculate_fare`], and [`RouteSummary`] adds the narrated
//! journey with line changes.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod fare;
pub mod graph;
pub mod narration;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dataset::{default_dataset_path, resolve_dataset_path, DatasetSource, DATASET_ENV_VAR};
pub use error::{Error, Result, SelectionIssue};
pub use fare::{calculate_fare, fare_bands, FareBand, MAX_FARE};
pub use graph::{build_graph, Edge, Graph, RouteMetric};
pub use narration::{count_line_changes, narrate_path, NarrationStep};
pub use network::{
    load_network, Connection, LineCode, MetroNetwork, NetworkData, Station, StationId,
};
pub use output::{RouteRenderMode, RouteSummary, CURRENCY_SYMBOL};
pub use path::{find_path, shortest_path, SearchOutcome, ShortestPath};
pub use routing::{
    compute_fare, compute_route, compute_route_between, resolve_station, MetricDerivation,
    RouteRequest, RouteResult, RouteSummarizer,
};
