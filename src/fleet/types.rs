//! Plant and fuel descriptors handed to the dispatcher.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Technology of a power plant.
///
/// Parsed from the wire tags `gasfired`, `turbojet` and `windturbine`.
/// Any other tag is kept verbatim in [`PlantKind::Other`] so that the cost
/// model can reject it with the offending plant's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlantKind {
    /// Gas-fired thermal plant, burns gas and emits CO2.
    GasFired,
    /// Kerosine turbojet.
    TurboJet,
    /// Wind farm; output derated by the wind availability.
    WindTurbine,
    /// Unrecognized type tag.
    Other(String),
}

impl PlantKind {
    /// Wire tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::GasFired => "gasfired",
            Self::TurboJet => "turbojet",
            Self::WindTurbine => "windturbine",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this kind is one the cost model understands.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for PlantKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "gasfired" => Self::GasFired,
            "turbojet" => Self::TurboJet,
            "windturbine" => Self::WindTurbine,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for PlantKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<PlantKind> for String {
    fn from(kind: PlantKind) -> Self {
        match kind {
            PlantKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fuel prices and wind availability for one dispatch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fuels {
    /// Gas price (€/MWh).
    pub gas_euro_per_mwh: f64,
    /// Kerosine price (€/MWh).
    pub kerosine_euro_per_mwh: f64,
    /// Emission allowance price (€/ton CO2).
    pub co2_euro_per_ton: f64,
    /// Wind availability (percent, 0–100).
    pub wind_pct: f64,
}

impl Default for Fuels {
    fn default() -> Self {
        Self {
            gas_euro_per_mwh: 13.4,
            kerosine_euro_per_mwh: 50.8,
            co2_euro_per_ton: 20.0,
            wind_pct: 60.0,
        }
    }
}

/// A single power plant in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plant {
    /// Unique plant name.
    pub name: String,
    /// Plant technology.
    pub kind: PlantKind,
    /// Fuel-to-electricity conversion efficiency, in (0, 1].
    pub efficiency: f64,
    /// Declared minimum output when running (MW).
    pub pmin: f64,
    /// Declared maximum output (MW).
    pub pmax: f64,
}

impl Plant {
    /// Creates a plant descriptor.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<PlantKind>,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            efficiency,
            pmin,
            pmax,
        }
    }

    /// Shorthand for a gas-fired plant.
    pub fn gas(name: impl Into<String>, efficiency: f64, pmin: f64, pmax: f64) -> Self {
        Self::new(name, PlantKind::GasFired, efficiency, pmin, pmax)
    }

    /// Shorthand for a kerosine turbojet.
    pub fn turbojet(name: impl Into<String>, efficiency: f64, pmin: f64, pmax: f64) -> Self {
        Self::new(name, PlantKind::TurboJet, efficiency, pmin, pmax)
    }

    /// Shorthand for a wind farm. Wind has no fuel, so efficiency is 1.
    pub fn wind(name: impl Into<String>, pmax: f64) -> Self {
        Self::new(name, PlantKind::WindTurbine, 1.0, 0.0, pmax)
    }
}
