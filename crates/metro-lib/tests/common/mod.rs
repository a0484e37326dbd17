//! Common test utilities and fixture helpers.

#![allow(dead_code)]

use std::path::PathBuf;

use metro_lib::{load_network, Connection, LineCode, MetroNetwork, Station, StationId};

/// Path to the checked-in fixture dataset.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/metro_network.json")
}

/// Load the fixture dataset, panicking on failure.
pub fn fixture_network() -> MetroNetwork {
    load_network(&fixture_path()).expect("fixture network loads")
}

pub fn station(id: StationId, name: &str, line: LineCode) -> Station {
    Station {
        id,
        name: name.to_string(),
        line,
    }
}

pub fn connection(from: StationId, to: StationId, distance: f64, time: f64) -> Connection {
    Connection {
        from,
        to,
        distance,
        time,
    }
}

/// Two components: {1, 2, 3} on Red and {4, 5} on Blue, with no link between them.
pub fn partitioned_network() -> MetroNetwork {
    MetroNetwork::new(
        vec![
            station(1, "North", LineCode::Red),
            station(2, "Middle", LineCode::Red),
            station(3, "South", LineCode::Red),
            station(4, "East", LineCode::Blue),
            station(5, "West", LineCode::Blue),
        ],
        vec![
            connection(1, 2, 1.0, 2.0),
            connection(2, 3, 1.0, 2.0),
            connection(4, 5, 1.0, 2.0),
        ],
    )
    .expect("partitioned network is valid")
}

/// Square of four stations with every side the same weight, so two
/// equally short paths exist between opposite corners.
pub fn tied_square_network() -> MetroNetwork {
    MetroNetwork::new(
        vec![
            station(1, "A", LineCode::Red),
            station(2, "B", LineCode::Red),
            station(3, "C", LineCode::Blue),
            station(4, "D", LineCode::Green),
        ],
        vec![
            connection(1, 2, 2.0, 3.0),
            connection(2, 3, 2.0, 3.0),
            connection(1, 4, 2.0, 3.0),
            connection(4, 3, 2.0, 3.0),
        ],
    )
    .expect("square network is valid")
}
