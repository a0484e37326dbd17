//! Stations command handler for listing the network.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use metro_lib::{LineCode, Station};

use crate::commands::load_dataset;
use crate::output::OutputFormat;

/// Line filter accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineArg {
    Red,
    Blue,
    Green,
    Interchange,
}

impl From<LineArg> for LineCode {
    fn from(value: LineArg) -> Self {
        match value {
            LineArg::Red => LineCode::Red,
            LineArg::Blue => LineCode::Blue,
            LineArg::Green => LineCode::Green,
            LineArg::Interchange => LineCode::Interchange,
        }
    }
}

/// Handle the stations subcommand.
///
/// Lists stations in dataset order, optionally restricted to one line.
pub fn handle_stations(
    dataset: Option<&Path>,
    line: Option<LineArg>,
    format: OutputFormat,
) -> Result<()> {
    let network = load_dataset(dataset)?;
    let stations: Vec<&Station> = match line {
        Some(line) => network.stations_on_line(line.into()).collect(),
        None => network.stations().iter().collect(),
    };
    format.render_stations(&stations)
}
