// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and dispatches
// to these handlers.

pub mod fare;
pub mod route;
pub mod stations;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use metro_lib::{load_network, resolve_dataset_path, MetroNetwork};

/// Resolve the dataset location and load the network it points at.
pub fn load_dataset(explicit: Option<&Path>) -> Result<MetroNetwork> {
    let (path, source) =
        resolve_dataset_path(explicit).context("failed to locate the metro network dataset")?;
    let network = load_network(&path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    info!(
        path = %path.display(),
        ?source,
        stations = network.stations().len(),
        "loaded metro network"
    );
    Ok(network)
}
