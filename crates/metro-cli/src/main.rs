use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metro_cli::commands::fare::handle_fare;
use metro_cli::commands::route::{handle_route_command, MetricArg, RouteCommandArgs};
use metro_cli::commands::stations::{handle_stations, LineArg};
use metro_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Metro route planner and fare calculator")]
struct Cli {
    /// Path to the network dataset (JSON). Falls back to METRO_DATASET, then
    /// the platform data directory.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the recommended route between two stations.
    Route {
        /// Starting station, by id or name.
        #[arg(long = "from")]
        from: String,
        /// Destination station, by id or name.
        #[arg(long = "to")]
        to: String,
        /// Metric to minimise.
        #[arg(long, value_enum, default_value_t = MetricArg::Distance)]
        metric: MetricArg,
        /// Report the other metric from connection weights instead of a per-station estimate.
        #[arg(long)]
        exact_metrics: bool,
    },
    /// Look up the fare for a distance in kilometres.
    Fare {
        /// Distance in kilometres.
        #[arg(allow_negative_numbers = true, required_unless_present = "table")]
        distance: Option<f64>,
        /// Print the full fare table instead.
        #[arg(long, conflicts_with = "distance")]
        table: bool,
    },
    /// List stations in the network.
    Stations {
        /// Only list stations on this line.
        #[arg(long, value_enum)]
        line: Option<LineArg>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    match cli.command {
        Command::Route {
            from,
            to,
            metric,
            exact_metrics,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                metric,
                exact_metrics,
            };
            handle_route_command(dataset, cli.format, &args)
        }
        Command::Fare { distance, table } => {
            handle_fare(if table { None } else { distance }, cli.format)
        }
        Command::Stations { line } => handle_stations(dataset, line, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
