//! Route command handler for computing journeys between two stations.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use metro_lib::{
    compute_route, resolve_station, Error as RouteError, MetricDerivation, RouteMetric,
    RouteRequest, RouteSummary, SelectionIssue,
};

use crate::commands::load_dataset;
use crate::output::OutputFormat;

/// Metric accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MetricArg {
    #[default]
    Distance,
    Time,
}

impl From<MetricArg> for RouteMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Distance => RouteMetric::Distance,
            MetricArg::Time => RouteMetric::Time,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting station (id or name).
    pub from: String,
    /// Destination station (id or name).
    pub to: String,
    /// Metric to minimise.
    pub metric: MetricArg,
    /// Report the non-searched metric from connection weights.
    pub exact_metrics: bool,
}

impl RouteCommandArgs {
    fn derivation(&self) -> MetricDerivation {
        if self.exact_metrics {
            MetricDerivation::PathWeights
        } else {
            MetricDerivation::HopEstimate
        }
    }
}

/// Handle the route subcommand.
///
/// Resolves both stations, computes the route, and prints the narrated summary.
pub fn handle_route_command(
    dataset: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let network = load_dataset(dataset)?;

    let source = resolve_station(&network, &args.from).map_err(handle_route_failure)?;
    let destination = resolve_station(&network, &args.to).map_err(handle_route_failure)?;

    let request = RouteRequest::new(source, destination, args.metric.into())
        .with_derivation(args.derivation());
    let result = compute_route(&network, &request).map_err(handle_route_failure)?;

    let summary = RouteSummary::from_result(&network, result)
        .context("failed to build route summary for display")?;
    format.render_route(&summary)
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownStationName { name, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&name, &suggestions))
        }
        RouteError::UnknownStation { id } => anyhow::anyhow!(
            "Unknown station id {}. Run `metro-cli stations` to list valid ids.",
            id
        ),
        RouteError::InvalidSelection {
            reason: SelectionIssue::SameStation(_),
        } => anyhow::anyhow!("Source and destination stations cannot be the same."),
        RouteError::InvalidSelection { .. } => {
            anyhow::anyhow!("Please select both source and destination stations.")
        }
        RouteError::NoPathFound {
            origin,
            destination,
        } => anyhow::anyhow!(
            "No route found between {} and {}. The stations are on disconnected parts of the network.",
            origin,
            destination
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_station_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{}'.", name);
    if let [only] = suggestions {
        message.push_str(&format!(" Did you mean '{only}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}
