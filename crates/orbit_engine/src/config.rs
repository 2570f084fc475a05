//! Configuration system
//!
//! Simulation tunables with TOML load/save support. The defaults reproduce
//! the original game feel; levels and hosts may override them through a
//! config file or the builder methods.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Configuration trait
///
/// Any serde-capable config struct gains TOML file round-tripping.
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from a TOML file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A value fails validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Gravitational constant `G` of the softened force law
    pub gravity_constant: f64,

    /// Softening constant preventing a force singularity at near-zero distance
    pub softening_constant: f64,

    /// Ceiling of the jump charge oscillator
    pub max_jump_charge: f64,

    /// Milliseconds for a full charge-and-discharge cycle
    pub jump_charge_cycle_ms: f64,

    /// Release speed in pixels per millisecond granted per unit of charge
    pub jump_release_factor: f64,
}

impl SimulationConfig {
    /// Create a configuration with the classic tuning
    pub fn new() -> Self {
        Self {
            gravity_constant: 0.00002,
            softening_constant: 0.15,
            max_jump_charge: 100.0,
            jump_charge_cycle_ms: 1000.0,
            jump_release_factor: 0.002,
        }
    }

    /// Set the gravitational constant
    #[must_use]
    pub fn with_gravity_constant(mut self, gravity_constant: f64) -> Self {
        self.gravity_constant = gravity_constant;
        self
    }

    /// Set the softening constant
    #[must_use]
    pub fn with_softening_constant(mut self, softening_constant: f64) -> Self {
        self.softening_constant = softening_constant;
        self
    }

    /// Set the jump release factor
    #[must_use]
    pub fn with_jump_release_factor(mut self, jump_release_factor: f64) -> Self {
        self.jump_release_factor = jump_release_factor;
        self
    }

    /// Charge gained per millisecond while the jump input is held
    ///
    /// Derived so a full charge is reached and discharged over one cycle.
    pub fn jump_charge_rate(&self) -> f64 {
        (self.max_jump_charge * 2.0) / self.jump_charge_cycle_ms
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity_constant <= 0.0 {
            return Err(ConfigError::Invalid(
                "gravity_constant must be positive".to_string(),
            ));
        }
        if self.softening_constant <= 0.0 {
            return Err(ConfigError::Invalid(
                "softening_constant must be positive".to_string(),
            ));
        }
        if self.max_jump_charge <= 0.0 || self.jump_charge_cycle_ms <= 0.0 {
            return Err(ConfigError::Invalid(
                "jump charge parameters must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for SimulationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn charge_rate_covers_a_full_cycle() {
        // 100 up and 100 down over 1000ms
        let config = SimulationConfig::default();
        assert_relative_eq!(config.jump_charge_rate(), 0.2);
    }

    #[test]
    fn validation_rejects_a_zero_softening_constant() {
        let config = SimulationConfig::default().with_softening_constant(0.0);
        assert!(config.validate().is_err());
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn toml_round_trip_preserves_tunables() {
        let config = SimulationConfig::default().with_gravity_constant(0.00004);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: SimulationConfig = toml::from_str(&text).unwrap();
        assert_relative_eq!(back.gravity_constant, 0.00004);
        assert_relative_eq!(back.softening_constant, config.softening_constant);
    }
}
