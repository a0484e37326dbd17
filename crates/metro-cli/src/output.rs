//! Output formatting for command results.
//!
//! Every handler funnels its result through [`OutputFormat`], so the same data
//! can be printed as plain text, Markdown, or JSON.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use metro_lib::{FareBand, RouteRenderMode, RouteSummary, Station, CURRENCY_SYMBOL};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly plain text.
    #[default]
    Text,
    /// Markdown suitable for chat or notes.
    Rich,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct FareOutput {
    distance: f64,
    fare: u32,
}

impl OutputFormat {
    /// Print a computed route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => write_stdout(&summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => write_stdout(&summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => write_json(summary),
        }
    }

    /// Print a single fare lookup.
    pub fn render_fare(self, distance: f64, fare: u32) -> Result<()> {
        match self {
            OutputFormat::Text => write_stdout(&format!(
                "Fare for {distance:.1} km: {CURRENCY_SYMBOL}{fare}\n"
            )),
            OutputFormat::Rich => write_stdout(&format!(
                "**Fare** for _{distance:.1} km_: `{CURRENCY_SYMBOL}{fare}`\n"
            )),
            OutputFormat::Json => write_json(&FareOutput { distance, fare }),
        }
    }

    /// Print the full fare table.
    pub fn render_fare_table(self, bands: &[FareBand]) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(&bands),
            OutputFormat::Text => write_stdout(&format_fare_table(bands, false)),
            OutputFormat::Rich => write_stdout(&format_fare_table(bands, true)),
        }
    }

    /// Print a station listing.
    pub fn render_stations(self, stations: &[&Station]) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(&stations),
            OutputFormat::Text => {
                let mut buffer = String::new();
                for station in stations {
                    buffer.push_str(&format!(
                        "{:>4}  {:<28} {}\n",
                        station.id, station.name, station.line
                    ));
                }
                write_stdout(&buffer)
            }
            OutputFormat::Rich => {
                let mut buffer = String::from("| Id | Station | Line |\n|---:|---|---|\n");
                for station in stations {
                    buffer.push_str(&format!(
                        "| {} | {} | {} |\n",
                        station.id, station.name, station.line
                    ));
                }
                write_stdout(&buffer)
            }
        }
    }
}

fn format_fare_table(bands: &[FareBand], markdown: bool) -> String {
    let mut previous: Option<f64> = None;
    let mut buffer = String::new();
    if markdown {
        buffer.push_str("| Distance | Fare |\n|---|---:|\n");
    }
    for band in bands {
        let range = match (previous, band.max_distance_km) {
            (None, Some(limit)) => format!("up to {limit:.0} km"),
            (Some(low), Some(limit)) => format!("{low:.0}-{limit:.0} km"),
            (Some(low), None) => format!("over {low:.0} km"),
            (None, None) => "any distance".to_string(),
        };
        if markdown {
            buffer.push_str(&format!("| {range} | {CURRENCY_SYMBOL}{} |\n", band.fare));
        } else {
            buffer.push_str(&format!("{range:<16} {CURRENCY_SYMBOL}{}\n", band.fare));
        }
        previous = band.max_distance_km.or(previous);
    }
    buffer
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    write_stdout(&format!("{json}\n"))
}
