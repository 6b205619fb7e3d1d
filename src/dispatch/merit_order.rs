//! Merit-order ranking and the greedy first pass.

use tracing::debug;

use super::types::{ScaledPlant, units_to_mw};

/// Sorts plants by ascending marginal cost.
///
/// The sort is stable: plants with equal cost keep their request order.
pub fn rank(plants: &mut [ScaledPlant]) {
    plants.sort_by(|a, b| a.marginal_cost.total_cmp(&b.marginal_cost));
}

/// Walks the merit order once, committing as much of the load as each plant
/// can take without violating its minimum.
///
/// `ranked` must already be sorted with [`rank`]. Returns the units committed
/// to each plant (aligned with `ranked`) and the load left over, which may be
/// non-zero when a plant was skipped because its minimum would overshoot.
pub fn greedy_pass(ranked: &[ScaledPlant], load_units: i64) -> (Vec<i64>, i64) {
    let mut committed = Vec::with_capacity(ranked.len());
    let mut remaining = load_units;

    for plant in ranked {
        let units = if remaining >= plant.min_units {
            plant.max_units.min(remaining)
        } else if remaining > 0 && (plant.min_units..=plant.max_units).contains(&remaining) {
            remaining
        } else {
            0
        };
        remaining -= units;
        if units > 0 {
            debug!(
                plant = %plant.name,
                mw = units_to_mw(units),
                cost = plant.marginal_cost,
                "merit order commit"
            );
        }
        committed.push(units);
    }

    (committed, remaining)
}
