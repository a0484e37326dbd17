//! Turn a station path into rider-facing steps.
//!
//! The narrator emits one step per station (`start`, `waypoint`, `arrive`) and
//! inserts a `line-change` marker before any station whose line differs from
//! the station before it.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::network::{LineCode, MetroNetwork, StationId};

/// Single entry of a narrated journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NarrationStep {
    Start {
        station: StationId,
        name: String,
        line: LineCode,
    },
    Waypoint {
        station: StationId,
        name: String,
        line: LineCode,
    },
    LineChange {
        line: LineCode,
    },
    Arrive {
        station: StationId,
        name: String,
        line: LineCode,
    },
}

impl NarrationStep {
    /// Station referenced by the step; line-change markers have none.
    pub fn station(&self) -> Option<StationId> {
        match self {
            NarrationStep::Start { station, .. }
            | NarrationStep::Waypoint { station, .. }
            | NarrationStep::Arrive { station, .. } => Some(*station),
            NarrationStep::LineChange { .. } => None,
        }
    }

    pub fn is_line_change(&self) -> bool {
        matches!(self, NarrationStep::LineChange { .. })
    }
}

impl fmt::Display for NarrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NarrationStep::Start { name, .. } => write!(f, "Start at {name}"),
            NarrationStep::Waypoint { name, .. } => f.write_str(name),
            NarrationStep::LineChange { line } => write!(f, "Change to {line} Line"),
            NarrationStep::Arrive { name, .. } => write!(f, "Arrive at {name}"),
        }
    }
}

/// Narrate `path` using station records from `network`.
///
/// Fails with `UnknownStation` if the path references an id missing from the
/// network. An empty path yields no steps.
pub fn narrate_path(network: &MetroNetwork, path: &[StationId]) -> Result<Vec<NarrationStep>> {
    let mut steps = Vec::with_capacity(path.len() + 2);
    let mut previous_line: Option<LineCode> = None;
    let last = path.len().saturating_sub(1);

    for (index, &id) in path.iter().enumerate() {
        let station = network.require_station(id)?;

        if let Some(previous) = previous_line {
            if previous != station.line {
                steps.push(NarrationStep::LineChange { line: station.line });
            }
        }
        previous_line = Some(station.line);

        let name = station.name.clone();
        let step = if index == 0 {
            NarrationStep::Start {
                station: id,
                name,
                line: station.line,
            }
        } else if index == last {
            NarrationStep::Arrive {
                station: id,
                name,
                line: station.line,
            }
        } else {
            NarrationStep::Waypoint {
                station: id,
                name,
                line: station.line,
            }
        };
        steps.push(step);
    }

    Ok(steps)
}

/// Number of line-change markers within `steps`.
pub fn count_line_changes(steps: &[NarrationStep]) -> usize {
    steps.iter().filter(|step| step.is_line_change()).count()
}
