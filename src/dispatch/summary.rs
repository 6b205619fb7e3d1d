//! Post-hoc cost breakdown of an allocation.

use std::fmt;

use serde::Serialize;

use super::cost::marginal_cost;
use super::error::DispatchError;
use super::types::Allocation;
use crate::fleet::{Fuels, Plant};

/// Cost of running one plant at its allocated output.
#[derive(Debug, Clone, Serialize)]
pub struct PlantCost {
    /// Plant name.
    pub name: String,
    /// Allocated output (MW).
    pub p: f64,
    /// Marginal cost (€/MWh).
    pub marginal_cost: f64,
    /// Hourly cost at this output (€/h).
    pub cost_per_hour: f64,
}

/// Aggregate cost figures for a dispatch.
///
/// Derived from the allocation and the same fuel snapshot it was computed
/// with, so the figures always match the reported plan.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchSummary {
    /// Per-plant breakdown in request order.
    pub plants: Vec<PlantCost>,
    /// Total output (MW).
    pub total_mw: f64,
    /// Total hourly cost (€/h).
    pub total_cost_per_hour: f64,
}

impl DispatchSummary {
    /// Builds the breakdown for `allocation`.
    ///
    /// # Errors
    ///
    /// Propagates [`DispatchError::InvalidInput`] from the cost model.
    pub fn from_allocation(
        allocation: &Allocation,
        fuels: &Fuels,
        plants: &[Plant],
        include_co2: bool,
    ) -> Result<Self, DispatchError> {
        let mut rows = Vec::with_capacity(plants.len());
        for plant in plants {
            let p = allocation.get(&plant.name).unwrap_or(0.0);
            let mc = marginal_cost(plant, fuels, include_co2)?;
            rows.push(PlantCost {
                name: plant.name.clone(),
                p,
                marginal_cost: mc,
                cost_per_hour: p * mc,
            });
        }

        Ok(Self {
            total_mw: rows.iter().map(|r| r.p).sum(),
            total_cost_per_hour: rows.iter().map(|r| r.cost_per_hour).sum(),
            plants: rows,
        })
    }

    /// Plants with non-zero output.
    pub fn running(&self) -> impl Iterator<Item = &PlantCost> {
        self.plants.iter().filter(|r| r.p > 0.0)
    }
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Dispatch Summary ===")?;
        for r in &self.plants {
            writeln!(
                f,
                "{:<28} {:>9.1} MW  @ {:>8.2} EUR/MWh  = {:>10.2} EUR/h",
                r.name, r.p, r.marginal_cost, r.cost_per_hour
            )?;
        }
        writeln!(f, "Total output:        {:>9.1} MW", self.total_mw)?;
        write!(f, "Total cost:          {:>9.2} EUR/h", self.total_cost_per_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::compute_allocation;

    #[test]
    fn costs_follow_allocation() {
        let fuels = Fuels {
            gas_euro_per_mwh: 10.0,
            kerosine_euro_per_mwh: 30.0,
            co2_euro_per_ton: 0.0,
            wind_pct: 100.0,
        };
        let plants = [
            Plant::wind("wind", 20.0),
            Plant::gas("gas", 0.5, 0.0, 100.0),
        ];
        let alloc = compute_allocation(50.0, &fuels, &plants, true).expect("feasible");
        let summary =
            DispatchSummary::from_allocation(&alloc, &fuels, &plants, true).expect("known kinds");

        assert!((summary.total_mw - 50.0).abs() < 1e-9);
        // 30 MW of gas at 20 EUR/MWh
        assert!((summary.total_cost_per_hour - 600.0).abs() < 1e-9);
        assert_eq!(summary.running().count(), 2);
        assert!(format!("{summary}").contains("Total cost"));
    }
}
