//! Distance-banded fare table.

use serde::Serialize;

/// Fare charged beyond the last band.
pub const MAX_FARE: u32 = 70;

/// Upper-inclusive distance limits (km) and the fare charged within them.
const FARE_BANDS: [FareBand; 11] = [
    FareBand::new(2.0, 10),
    FareBand::new(4.0, 15),
    FareBand::new(6.0, 25),
    FareBand::new(8.0, 30),
    FareBand::new(10.0, 35),
    FareBand::new(14.0, 40),
    FareBand::new(18.0, 45),
    FareBand::new(22.0, 50),
    FareBand::new(26.0, 55),
    FareBand::new(30.0, 60),
    FareBand::new(34.0, 65),
];

/// One inclusive distance range mapping to a fixed fare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareBand {
    /// Inclusive upper limit in kilometres; `None` for the open-ended top band.
    pub max_distance_km: Option<f64>,
    pub fare: u32,
}

impl FareBand {
    const fn new(max_distance_km: f64, fare: u32) -> Self {
        Self {
            max_distance_km: Some(max_distance_km),
            fare,
        }
    }
}

/// The full fare table, lowest band first, ending with the open-ended band.
pub fn fare_bands() -> Vec<FareBand> {
    let mut bands = FARE_BANDS.to_vec();
    bands.push(FareBand {
        max_distance_km: None,
        fare: MAX_FARE,
    });
    bands
}

/// Map a distance in kilometres to a fare.
///
/// Zero and negative distances fall into the first band. A NaN distance
/// matches no band and is charged [`MAX_FARE`].
pub fn calculate_fare(distance_km: f64) -> u32 {
    FARE_BANDS
        .iter()
        .find(|band| {
            band.max_distance_km
                .is_some_and(|limit| distance_km <= limit)
        })
        .map(|band| band.fare)
        .unwrap_or(MAX_FARE)
}
