//! Marginal cost of one MWh per plant technology.

use super::error::DispatchError;
use crate::fleet::{Fuels, Plant, PlantKind};

/// Tons of CO2 emitted per MWh of electricity from a gas-fired plant.
pub const CO2_TONS_PER_MWH: f64 = 0.3;

/// Computes the cost (€/MWh) of producing one more MWh with `plant`.
///
/// - wind: always 0
/// - gas: `gas / efficiency`, plus `0.3 × co2` when `include_co2` is set
/// - turbojet: `kerosine / efficiency`
///
/// # Errors
///
/// Returns [`DispatchError::InvalidInput`] naming the plant if its kind is
/// not one of the three known technologies.
pub fn marginal_cost(plant: &Plant, fuels: &Fuels, include_co2: bool) -> Result<f64, DispatchError> {
    match &plant.kind {
        PlantKind::WindTurbine => Ok(0.0),
        PlantKind::GasFired => {
            let fuel = fuels.gas_euro_per_mwh / plant.efficiency;
            if include_co2 {
                Ok(fuel + CO2_TONS_PER_MWH * fuels.co2_euro_per_ton)
            } else {
                Ok(fuel)
            }
        }
        PlantKind::TurboJet => Ok(fuels.kerosine_euro_per_mwh / plant.efficiency),
        PlantKind::Other(tag) => Err(DispatchError::invalid(
            &plant.name,
            format!("unknown plant type \"{tag}\""),
        )),
    }
}
