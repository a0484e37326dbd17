// Test-only helpers for `metro-lib` unit tests
#![allow(dead_code)]

use crate::network::{Connection, LineCode, MetroNetwork, Station, StationId};

/// Builder to assemble small networks in tests.
#[derive(Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    connections: Vec<Connection>,
}

impl NetworkBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn station(mut self, id: StationId, name: &str, line: LineCode) -> Self {
        self.stations.push(Station {
            id,
            name: name.to_string(),
            line,
        });
        self
    }

    pub fn connect(mut self, from: StationId, to: StationId, distance: f64, time: f64) -> Self {
        self.connections.push(Connection {
            from,
            to,
            distance,
            time,
        });
        self
    }

    pub fn build(self) -> MetroNetwork {
        MetroNetwork::new(self.stations, self.connections).expect("valid test network")
    }
}

/// Seven-station network where distance and time favour different paths
/// between West End (1) and Airport (5). Depot (7) is isolated.
///
/// ```text
/// West End(R) -- Market(R) -- Central(I) -- Harbour(B) -- Airport(B)
///                                  \                        /
///                                   +------ Park(G) -------+
/// ```
pub fn sample_network() -> MetroNetwork {
    NetworkBuilder::new()
        .station(1, "West End", LineCode::Red)
        .station(2, "Market", LineCode::Red)
        .station(3, "Central", LineCode::Interchange)
        .station(4, "Harbour", LineCode::Blue)
        .station(5, "Airport", LineCode::Blue)
        .station(6, "Park", LineCode::Green)
        .station(7, "Depot", LineCode::Green)
        .connect(1, 2, 2.0, 3.0)
        .connect(2, 3, 1.5, 2.0)
        .connect(3, 4, 2.5, 4.0)
        .connect(4, 5, 6.0, 8.0)
        .connect(3, 6, 3.0, 5.0)
        .connect(6, 5, 4.0, 12.0)
        .build()
}
