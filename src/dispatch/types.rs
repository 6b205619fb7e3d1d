//! Working and output types for the dispatcher.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scaled units per MW. One unit is 0.1 MW.
pub const SCALE: i64 = 10;

/// Converts scaled units back to MW.
pub fn units_to_mw(units: i64) -> f64 {
    units as f64 / SCALE as f64
}

/// A plant prepared for allocation: marginal cost and effective bounds in
/// scaled units, plus its position in the caller's list.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledPlant {
    /// Index of the plant in the request.
    pub index: usize,
    /// Plant name.
    pub name: String,
    /// Marginal cost (€/MWh).
    pub marginal_cost: f64,
    /// Effective minimum output (units).
    pub min_units: i64,
    /// Effective maximum output (units).
    pub max_units: i64,
}

impl ScaledPlant {
    /// Whether `units` is a legal output for this plant: either off, or
    /// within its effective bounds.
    pub fn admits(&self, units: i64) -> bool {
        units == 0 || (self.min_units..=self.max_units).contains(&units)
    }
}

/// Output assigned to one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantOutput {
    /// Plant name.
    pub name: String,
    /// Power to produce (MW).
    pub p: f64,
}

/// Result of a dispatch: one entry per plant, in request order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    entries: Vec<PlantOutput>,
}

impl Allocation {
    pub(crate) fn from_entries(entries: Vec<PlantOutput>) -> Self {
        Self { entries }
    }

    /// Power assigned to `name`, if it is part of the fleet.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.p)
    }

    /// Iterates over `(name, p)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.p))
    }

    /// Sum of all outputs (MW).
    pub fn total_mw(&self) -> f64 {
        self.entries.iter().map(|e| e.p).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            writeln!(f, "{:<28} {:>9.1} MW", e.name, e.p)?;
        }
        write!(f, "{:<28} {:>9.1} MW", "total", self.total_mw())
    }
}
