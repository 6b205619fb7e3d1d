//! Entry point tying the three dispatch phases together.

use tracing::{debug, info};

use super::capacity::{load_to_units, normalize};
use super::correction::settle;
use super::error::DispatchError;
use super::merit_order::{greedy_pass, rank};
use super::types::{Allocation, PlantOutput, units_to_mw};
use crate::fleet::{Fuels, Plant};

/// Splits `load_mw` across `plants` in merit order.
///
/// The result lists every plant in input order, including those left idle.
/// Outputs are multiples of 0.1 MW, sum exactly to the load (rounded to
/// 0.1 MW), and each one is either zero or within the plant's effective
/// bounds.
///
/// Inputs are only borrowed; all working state is local to the call.
///
/// # Errors
///
/// - [`DispatchError::InvalidInput`] for an unknown plant kind, a duplicate
///   name, or a plant whose effective minimum exceeds its maximum.
/// - [`DispatchError::InfeasibleLoad`] when the fleet cannot produce the
///   load exactly.
pub fn compute_allocation(
    load_mw: f64,
    fuels: &Fuels,
    plants: &[Plant],
    include_co2: bool,
) -> Result<Allocation, DispatchError> {
    info!(load_mw, plants = plants.len(), include_co2, "starting allocation");

    let load_units = load_to_units(load_mw);
    let mut ranked = normalize(load_units, fuels, plants, include_co2)?;
    rank(&mut ranked);

    let (mut committed, remaining) = greedy_pass(&ranked, load_units);
    if remaining != 0 {
        debug!(residual_mw = units_to_mw(remaining), "greedy pass left a residual");
    }
    settle(&ranked, &mut committed, remaining)?;
    debug_assert!(
        ranked.iter().zip(&committed).all(|(p, &u)| p.admits(u)),
        "settled output outside plant bounds"
    );

    let mut by_index = vec![0; plants.len()];
    for (plant, units) in ranked.iter().zip(&committed) {
        by_index[plant.index] = *units;
    }
    let entries = plants
        .iter()
        .zip(by_index)
        .map(|(plant, units)| PlantOutput {
            name: plant.name.clone(),
            p: units_to_mw(units),
        })
        .collect();

    info!(load_mw, "allocation completed");
    Ok(Allocation::from_entries(entries))
}
