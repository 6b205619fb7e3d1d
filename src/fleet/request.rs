//! A complete dispatch request and its field-level validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::{Fuels, Plant};
use crate::config::ConfigError;
use crate::dispatch::{Allocation, DispatchError, compute_allocation};

/// Load, fuel snapshot and fleet for a single dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Power to be produced (MW).
    pub load_mw: f64,
    /// Fuel prices and wind availability.
    pub fuels: Fuels,
    /// Plants in input order.
    pub plants: Vec<Plant>,
}

impl DispatchRequest {
    /// Creates a request.
    pub fn new(load_mw: f64, fuels: Fuels, plants: Vec<Plant>) -> Self {
        Self {
            load_mw,
            fuels,
            plants,
        }
    }

    /// Runs the dispatcher on this request.
    ///
    /// # Errors
    ///
    /// See [`compute_allocation`].
    pub fn allocate(&self, include_co2: bool) -> Result<Allocation, DispatchError> {
        compute_allocation(self.load_mw, &self.fuels, &self.plants, include_co2)
    }

    /// Checks field ranges and returns every violation found.
    ///
    /// Field paths follow the scenario TOML layout. Returns an empty vector
    /// if the request is well-formed.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.load_mw > 0.0 && self.load_mw.is_finite()) {
            errors.push(ConfigError::new("demand.load_mw", "must be > 0"));
        }

        let f = &self.fuels;
        for (field, value) in [
            ("fuels.gas_euro_per_mwh", f.gas_euro_per_mwh),
            ("fuels.kerosine_euro_per_mwh", f.kerosine_euro_per_mwh),
            ("fuels.co2_euro_per_ton", f.co2_euro_per_ton),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                errors.push(ConfigError::new(field, "must be >= 0"));
            }
        }
        if !(0.0..=100.0).contains(&f.wind_pct) {
            errors.push(ConfigError::new("fuels.wind_pct", "must be in [0, 100]"));
        }

        if self.plants.is_empty() {
            errors.push(ConfigError::new("plants", "at least one plant is required"));
        }

        let mut seen = HashSet::new();
        for (i, p) in self.plants.iter().enumerate() {
            let at = |field: &str| format!("plants[{i}].{field}");
            if p.name.trim().is_empty() {
                errors.push(ConfigError::new(at("name"), "must not be empty"));
            } else if !seen.insert(p.name.as_str()) {
                errors.push(ConfigError::new(
                    at("name"),
                    format!("duplicate plant name \"{}\"", p.name),
                ));
            }
            if !p.kind.is_known() {
                errors.push(ConfigError::new(
                    at("kind"),
                    format!(
                        "must be \"gasfired\", \"turbojet\" or \"windturbine\", got \"{}\"",
                        p.kind
                    ),
                ));
            }
            if !(p.efficiency > 0.0 && p.efficiency <= 1.0) {
                errors.push(ConfigError::new(at("efficiency"), "must be in (0, 1]"));
            }
            if !(p.pmin >= 0.0 && p.pmin.is_finite()) {
                errors.push(ConfigError::new(at("pmin"), "must be >= 0"));
            }
            if !(p.pmax >= 0.0 && p.pmax.is_finite()) {
                errors.push(ConfigError::new(at("pmax"), "must be >= 0"));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DispatchRequest {
        DispatchRequest::new(
            100.0,
            Fuels::default(),
            vec![Plant::gas("gas1", 0.5, 10.0, 200.0), Plant::wind("wind1", 50.0)],
        )
    }

    #[test]
    fn valid_request_has_no_errors() {
        let errors = request().validate();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn catches_non_positive_load() {
        let mut req = request();
        req.load_mw = 0.0;
        assert!(req.validate().iter().any(|e| e.field == "demand.load_mw"));
    }

    #[test]
    fn catches_wind_out_of_range() {
        let mut req = request();
        req.fuels.wind_pct = 120.0;
        assert!(req.validate().iter().any(|e| e.field == "fuels.wind_pct"));
    }

    #[test]
    fn catches_duplicate_names_and_bad_efficiency() {
        let mut req = request();
        req.plants.push(Plant::gas("gas1", 0.0, 0.0, 10.0));
        let errors = req.validate();
        assert!(errors.iter().any(|e| e.field == "plants[2].name"));
        assert!(errors.iter().any(|e| e.field == "plants[2].efficiency"));
    }

    #[test]
    fn catches_unknown_kind() {
        let mut req = request();
        req.plants[0].kind = "coal".into();
        let errors = req.validate();
        assert!(errors.iter().any(|e| e.field == "plants[0].kind"));
    }

    #[test]
    fn catches_empty_fleet() {
        let mut req = request();
        req.plants.clear();
        assert!(req.validate().iter().any(|e| e.field == "plants"));
    }
}
