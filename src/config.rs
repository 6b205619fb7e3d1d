//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::fleet::{DispatchRequest, Fuels, Plant};

/// Top-level scenario configuration parsed from TOML.
///
/// All sections have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Load to be covered.
    #[serde(default)]
    pub demand: DemandConfig,
    /// Fuel prices and wind availability.
    #[serde(default)]
    pub fuels: Fuels,
    /// Plant fleet, in merit-order tie-break order.
    #[serde(default = "baseline_fleet")]
    pub plants: Vec<Plant>,
    /// Dispatch options.
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// HTTP service and logging options.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Load to be covered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemandConfig {
    /// Requested output (MW, must be > 0).
    pub load_mw: f64,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self { load_mw: 480.0 }
    }
}

/// Dispatch options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Include the CO2 allowance price in gas marginal cost.
    pub include_co2: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { include_co2: true }
    }
}

/// HTTP service and logging options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port for `--serve`.
    pub port: u16,
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8888,
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"plants[0].pmin"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// The reference six-plant fleet.
fn baseline_fleet() -> Vec<Plant> {
    vec![
        Plant::gas("gasfiredbig1", 0.53, 100.0, 460.0),
        Plant::gas("gasfiredbig2", 0.53, 100.0, 460.0),
        Plant::gas("gasfiredsomewhatsmaller", 0.37, 40.0, 210.0),
        Plant::turbojet("tj1", 0.3, 0.0, 16.0),
        Plant::wind("windpark1", 150.0),
        Plant::wind("windpark2", 36.0),
    ]
}

impl ScenarioConfig {
    /// Returns the baseline scenario: 480 MW on the reference fleet at 60% wind.
    pub fn baseline() -> Self {
        Self {
            demand: DemandConfig::default(),
            fuels: Fuels::default(),
            plants: baseline_fleet(),
            dispatch: DispatchConfig::default(),
            server: ServerConfig::default(),
        }
    }

    /// Returns the calm preset: no wind, thermal plants carry 500 MW.
    pub fn calm() -> Self {
        Self {
            demand: DemandConfig { load_mw: 500.0 },
            fuels: Fuels {
                wind_pct: 0.0,
                ..Fuels::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the peak preset: load high enough to pull in the turbojet.
    pub fn peak() -> Self {
        Self {
            demand: DemandConfig { load_mw: 1250.0 },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "calm", "peak"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "calm" => Ok(Self::calm()),
            "peak" => Ok(Self::peak()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// The dispatch request described by this scenario.
    pub fn request(&self) -> DispatchRequest {
        DispatchRequest::new(self.demand.load_mw, self.fuels.clone(), self.plants.clone())
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.request().validate();
        if self.server.log_filter.trim().is_empty() {
            errors.push(ConfigError::new("server.log_filter", "must not be empty"));
        }
        errors
    }
}
