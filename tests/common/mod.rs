//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use powerplan::dispatch::SCALE;
use powerplan::fleet::{DispatchRequest, Fuels, Plant};

/// Reference fuel prices (13.4 gas, 50.8 kerosine, 20 CO2) at the given wind.
pub fn fuels(wind_pct: f64) -> Fuels {
    Fuels {
        gas_euro_per_mwh: 13.4,
        kerosine_euro_per_mwh: 50.8,
        co2_euro_per_ton: 20.0,
        wind_pct,
    }
}

/// The reference six-plant fleet.
pub fn reference_fleet() -> Vec<Plant> {
    vec![
        Plant::gas("gasfiredbig1", 0.53, 100.0, 460.0),
        Plant::gas("gasfiredbig2", 0.53, 100.0, 460.0),
        Plant::gas("gasfiredsomewhatsmaller", 0.37, 40.0, 210.0),
        Plant::turbojet("tj1", 0.3, 0.0, 16.0),
        Plant::wind("windpark1", 150.0),
        Plant::wind("windpark2", 36.0),
    ]
}

/// Reference fleet request at the given load and wind.
pub fn reference_request(load_mw: f64, wind_pct: f64) -> DispatchRequest {
    DispatchRequest::new(load_mw, fuels(wind_pct), reference_fleet())
}

/// MW value on the 0.1 MW grid, as an integer count of units.
pub fn units(mw: f64) -> i64 {
    (mw * SCALE as f64).round() as i64
}

/// Asserts that `actual` equals `expected` MW to the grid resolution.
pub fn assert_mw(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("plant should be in the allocation");
    assert_eq!(
        units(actual),
        units(expected),
        "expected {expected} MW, got {actual} MW"
    );
}
