//! Fare command handler for distance-based fare lookups.

use anyhow::Result;

use metro_lib::{compute_fare, fare_bands};

use crate::output::OutputFormat;

/// Handle the fare subcommand.
///
/// Prints the fare for `distance`, or the whole band table when `distance`
/// is `None`. No dataset is needed.
pub fn handle_fare(distance: Option<f64>, format: OutputFormat) -> Result<()> {
    match distance {
        Some(distance) => format.render_fare(distance, compute_fare(distance)),
        None => format.render_fare_table(&fare_bands()),
    }
}
