//! Effective capacity bounds in fixed-point units.

use std::collections::HashSet;

use super::cost::marginal_cost;
use super::error::DispatchError;
use super::types::{SCALE, ScaledPlant};
use crate::fleet::{Fuels, Plant, PlantKind};

/// Slack absorbed when snapping MW values onto the unit grid, so that
/// values like `21.599999999999998` still land on 216 units.
const GRID_TOLERANCE: f64 = 1e-6;

/// Load in units, rounded to the nearest unit.
pub fn load_to_units(load_mw: f64) -> i64 {
    (load_mw * SCALE as f64).round() as i64
}

/// Lower bound in units, rounded up so the plant never runs below it.
fn min_to_units(mw: f64) -> i64 {
    (mw * SCALE as f64 - GRID_TOLERANCE).ceil().max(0.0) as i64
}

/// Upper bound in units, rounded down so the plant never runs above it.
fn max_to_units(mw: f64) -> i64 {
    (mw * SCALE as f64 + GRID_TOLERANCE).floor().max(0.0) as i64
}

/// Effective maximum output (MW) after availability derating.
pub fn effective_max_mw(plant: &Plant, fuels: &Fuels) -> f64 {
    match plant.kind {
        PlantKind::WindTurbine => plant.pmax * fuels.wind_pct / 100.0,
        _ => plant.pmax,
    }
}

/// Prices every plant and converts its bounds to units.
///
/// Plants are returned in request order.
///
/// # Errors
///
/// - [`DispatchError::InvalidInput`] for an unknown plant kind, a repeated
///   name, or an effective minimum above the effective maximum.
/// - [`DispatchError::InfeasibleLoad`] if the summed effective maxima fall
///   short of `load_units`.
pub fn normalize(
    load_units: i64,
    fuels: &Fuels,
    plants: &[Plant],
    include_co2: bool,
) -> Result<Vec<ScaledPlant>, DispatchError> {
    let mut names = HashSet::with_capacity(plants.len());
    let mut scaled = Vec::with_capacity(plants.len());

    for (index, plant) in plants.iter().enumerate() {
        let cost = marginal_cost(plant, fuels, include_co2)?;
        if !names.insert(plant.name.as_str()) {
            return Err(DispatchError::invalid(&plant.name, "duplicate plant name"));
        }

        let min_units = min_to_units(plant.pmin);
        let max_units = max_to_units(effective_max_mw(plant, fuels));
        if min_units > max_units {
            return Err(DispatchError::invalid(
                &plant.name,
                format!(
                    "effective pmin {:.1} MW exceeds effective pmax {:.1} MW",
                    plant.pmin,
                    effective_max_mw(plant, fuels)
                ),
            ));
        }

        scaled.push(ScaledPlant {
            index,
            name: plant.name.clone(),
            marginal_cost: cost,
            min_units,
            max_units,
        });
    }

    // bounds near f64::MAX saturate to i64::MAX on conversion
    let capacity = scaled
        .iter()
        .fold(0_i64, |acc, p| acc.saturating_add(p.max_units));
    if capacity < load_units {
        return Err(DispatchError::infeasible(format!(
            "fleet capacity {:.1} MW is below load {:.1} MW",
            capacity as f64 / SCALE as f64,
            load_units as f64 / SCALE as f64
        )));
    }

    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuels(wind_pct: f64) -> Fuels {
        Fuels {
            wind_pct,
            ..Fuels::default()
        }
    }

    #[test]
    fn wind_max_is_derated() {
        let plants = [Plant::wind("w", 150.0)];
        let scaled = normalize(10, &fuels(60.0), &plants, true).expect("feasible");
        assert_eq!(scaled[0].min_units, 0);
        assert_eq!(scaled[0].max_units, 900);
    }

    #[test]
    fn derated_wind_snaps_onto_grid() {
        // 36 * 0.6 evaluates to 21.599999999999998 in f64
        let plants = [Plant::wind("w", 36.0)];
        let scaled = normalize(10, &fuels(60.0), &plants, true).expect("feasible");
        assert_eq!(scaled[0].max_units, 216);
    }

    #[test]
    fn thermal_bounds_are_unchanged() {
        let plants = [Plant::gas("g", 0.5, 40.0, 210.0)];
        let scaled = normalize(500, &fuels(0.0), &plants, true).expect("feasible");
        assert_eq!(scaled[0].min_units, 400);
        assert_eq!(scaled[0].max_units, 2100);
        assert!((scaled[0].marginal_cost - 32.8).abs() < 1e-9);
    }

    #[test]
    fn rejects_min_above_max() {
        let plants = [Plant::gas("g", 0.5, 50.0, 40.0)];
        let err = normalize(10, &fuels(0.0), &plants, true).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput { ref plant, .. } if plant == "g"));
    }

    #[test]
    fn rejects_wind_min_above_derated_max() {
        let mut wind = Plant::wind("w", 100.0);
        wind.pmin = 30.0;
        let err = normalize(10, &fuels(20.0), &[wind], true).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let plants = [Plant::wind("w", 10.0), Plant::wind("w", 10.0)];
        let err = normalize(10, &fuels(100.0), &plants, true).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidInput { ref plant, .. } if plant == "w"));
    }

    #[test]
    fn rejects_insufficient_capacity() {
        let plants = [Plant::gas("g", 0.5, 0.0, 10.0), Plant::wind("w", 100.0)];
        // 10 MW gas + 50 MW derated wind
        assert!(normalize(load_to_units(60.0), &fuels(50.0), &plants, true).is_ok());
        let err = normalize(load_to_units(60.1), &fuels(50.0), &plants, true).unwrap_err();
        assert!(matches!(err, DispatchError::InfeasibleLoad { .. }));
    }

    #[test]
    fn huge_bounds_do_not_overflow_capacity() {
        let plants = [
            Plant::gas("a", 0.5, 0.0, 1e300),
            Plant::gas("b", 0.5, 0.0, 1e300),
        ];
        let scaled = normalize(100, &fuels(0.0), &plants, true).expect("ample capacity");
        assert_eq!(scaled[0].max_units, i64::MAX);
        assert_eq!(scaled[1].max_units, i64::MAX);
    }

    #[test]
    fn load_rounds_to_nearest_unit() {
        assert_eq!(load_to_units(0.1), 1);
        assert_eq!(load_to_units(480.0), 4800);
        assert_eq!(load_to_units(0.3), 3);
    }
}
