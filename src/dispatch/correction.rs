//! Corrective pass that closes the gap left by the greedy pass.

use tracing::debug;

use super::error::DispatchError;
use super::types::{ScaledPlant, units_to_mw};

/// Plant that should take one more unit: the cheapest one below its maximum
/// for which one more unit is a legal output. Ties go to the earliest in
/// merit order.
fn raise_candidate(ranked: &[ScaledPlant], committed: &[i64]) -> Option<usize> {
    ranked
        .iter()
        .zip(committed)
        .position(|(p, &units)| units < p.max_units && units + 1 >= p.min_units)
}

/// Plant that should give up one unit: the most expensive one above its
/// minimum. Ties go to the earliest in merit order.
fn lower_candidate(ranked: &[ScaledPlant], committed: &[i64]) -> Option<usize> {
    let above_min = |i: &usize| committed[*i] > ranked[*i].min_units;
    let highest = (0..ranked.len())
        .filter(above_min)
        .map(|i| ranked[i].marginal_cost)
        .max_by(f64::total_cmp)?;
    (0..ranked.len())
        .filter(above_min)
        .find(|&i| ranked[i].marginal_cost == highest)
}

/// Moves units between plants until `remaining` reaches zero.
///
/// Each move is the net effect of repeating the single-unit step on the
/// same plant: the chosen plant stays the best candidate until it reaches
/// its bound or the gap closes, so moving the whole stretch at once yields
/// the same allocation.
///
/// # Errors
///
/// Returns [`DispatchError::InfeasibleLoad`] when no plant can absorb or
/// release another unit. This happens when minimum outputs prevent any
/// exact split even though the aggregate capacity suffices.
pub fn settle(
    ranked: &[ScaledPlant],
    committed: &mut [i64],
    mut remaining: i64,
) -> Result<(), DispatchError> {
    while remaining != 0 {
        if remaining > 0 {
            let i = raise_candidate(ranked, committed).ok_or_else(|| {
                DispatchError::infeasible(format!(
                    "cannot raise output to cover the remaining {:.1} MW",
                    units_to_mw(remaining)
                ))
            })?;
            let step = remaining.min(ranked[i].max_units - committed[i]);
            committed[i] += step;
            remaining -= step;
            debug!(plant = %ranked[i].name, mw = units_to_mw(step), "raised output");
        } else {
            let i = lower_candidate(ranked, committed).ok_or_else(|| {
                DispatchError::infeasible(format!(
                    "cannot lower output to shed the excess {:.1} MW",
                    units_to_mw(-remaining)
                ))
            })?;
            let step = (-remaining).min(committed[i] - ranked[i].min_units);
            committed[i] -= step;
            remaining += step;
            debug!(plant = %ranked[i].name, mw = units_to_mw(step), "lowered output");
        }
    }
    Ok(())
}
