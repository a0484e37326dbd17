use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::RouteMetric;
use crate::network::StationId;

/// Convenient result alias for the metro library.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason a route query was rejected before any search ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIssue {
    MissingSource,
    MissingDestination,
    SameStation(StationId),
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::MissingSource => f.write_str("source station was not selected"),
            SelectionIssue::MissingDestination => {
                f.write_str("destination station was not selected")
            }
            SelectionIssue::SameStation(id) => {
                write!(f, "source and destination are the same station ({id})")
            }
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the query itself is unusable (unset endpoints, or identical ones).
    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: SelectionIssue },

    /// Raised when a station id is not part of the network.
    #[error("unknown station id {id}")]
    UnknownStation { id: StationId },

    /// Raised when a station name could not be found in the network.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStationName {
        name: String,
        suggestions: Vec<String>,
    },

    /// A connection points at a station id that does not exist.
    #[error("connection {from} <-> {to} references missing station {missing}")]
    DanglingConnection {
        from: StationId,
        to: StationId,
        missing: StationId,
    },

    /// A connection weight is zero, negative, or not a finite number.
    #[error("connection {from} <-> {to} has invalid {metric} weight {value}")]
    InvalidWeight {
        from: StationId,
        to: StationId,
        metric: RouteMetric,
        value: f64,
    },

    /// Two stations share the same identifier.
    #[error("duplicate station id {id}")]
    DuplicateStation { id: StationId },

    /// Raised when the destination cannot be reached from the source.
    #[error("no path found between {origin} and {destination}")]
    NoPathFound { origin: String, destination: String },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No platform data directory could be resolved for the default dataset.
    #[error("failed to resolve a data directory for the default dataset")]
    DatasetDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for dataset parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error describes a defect in the dataset rather than a bad query.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Error::DanglingConnection { .. }
                | Error::InvalidWeight { .. }
                | Error::DuplicateStation { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_lists_suggestions() {
        let err = Error::UnknownStationName {
            name: "Rajiv".to_string(),
            suggestions: vec!["Rajiv Chowk".to_string(), "Rajouri Garden".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown station name: Rajiv. Did you mean one of: 'Rajiv Chowk', 'Rajouri Garden'?"
        );
    }

    #[test]
    fn same_station_selection_message() {
        let err = Error::InvalidSelection {
            reason: SelectionIssue::SameStation(4),
        };
        assert_eq!(
            err.to_string(),
            "invalid selection: source and destination are the same station (4)"
        );
    }

    #[test]
    fn integrity_errors_are_grouped() {
        assert!(Error::DuplicateStation { id: 1 }.is_data_integrity());
        assert!(Error::DanglingConnection {
            from: 1,
            to: 2,
            missing: 2
        }
        .is_data_integrity());
        assert!(!Error::UnknownStation { id: 1 }.is_data_integrity());
    }
}
