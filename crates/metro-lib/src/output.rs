use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::narration::{count_line_changes, narrate_path, NarrationStep};
use crate::network::MetroNetwork;
use crate::routing::RouteResult;

/// Currency symbol printed in front of fares.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Route result plus its narration, ready for display or serialisation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    #[serde(flatten)]
    pub result: RouteResult,
    pub route_type: String,
    pub line_changes: usize,
    pub steps: Vec<NarrationStep>,
}

impl RouteSummary {
    /// Narrate `result.path` against `network` and bundle it with the result.
    pub fn from_result(network: &MetroNetwork, result: RouteResult) -> Result<Self> {
        let steps = narrate_path(network, &result.path)?;
        Ok(Self {
            route_type: result.metric.route_type_label().to_string(),
            line_changes: count_line_changes(&steps),
            steps,
            result,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let result = &self.result;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({})",
            result.source_name, result.destination_name, self.route_type
        );
        let _ = writeln!(buffer, "Distance: {:.1} km", result.distance);
        let _ = writeln!(buffer, "Estimated Travel Time: {} minutes", result.time);
        let _ = writeln!(buffer, "Number of Stations: {}", result.station_count());
        let _ = writeln!(buffer, "Line Changes: {}", self.line_changes);
        let _ = writeln!(buffer, "Ticket Fare: {}{}", CURRENCY_SYMBOL, result.fare);
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Journey:");
        for step in &self.steps {
            let indent = if step.is_line_change() { "    " } else { "  " };
            let _ = writeln!(buffer, "{indent}{step}");
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let result = &self.result;
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route:** _{} → {}_ ({})",
            result.source_name, result.destination_name, self.route_type
        );
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| Distance | Time | Stations | Changes | Fare |");
        let _ = writeln!(buffer, "|---:|---:|---:|---:|---:|");
        let _ = writeln!(
            buffer,
            "| {:.1} km | {} min | {} | {} | {}{} |",
            result.distance,
            result.time,
            result.station_count(),
            self.line_changes,
            CURRENCY_SYMBOL,
            result.fare
        );
        let _ = writeln!(buffer);
        for step in &self.steps {
            match step {
                NarrationStep::LineChange { .. } => {
                    let _ = writeln!(buffer, "  * _{step}_");
                }
                NarrationStep::Start { .. } | NarrationStep::Arrive { .. } => {
                    let _ = writeln!(buffer, "* **{step}**");
                }
                NarrationStep::Waypoint { .. } => {
                    let _ = writeln!(buffer, "* {step}");
                }
            }
        }
        buffer
    }
}
