//! Configuration for the shift-roster solver.
//!
//! Load roster instances from TOML or YAML files, or build them fluently,
//! instead of editing hard-coded constants.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     num_people = 5
//!     base_days = 30
//!     phase_offset = 8
//!     rotation_pattern = [
//!         "morning", "morning", "afternoon", "afternoon",
//!         "evening", "evening", "off", "off", "off", "off",
//!     ]
//! "#).unwrap();
//!
//! assert_eq!(config.num_people, 5);
//! assert_eq!(config.num_days(), 30 + 4 * 8);
//! assert_eq!(config.discard_boundary(), 32);
//! ```
//!
//! Use the source-instance defaults when no file is given:
//!
//! ```
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::load("roster.toml").unwrap_or_default();
//! assert_eq!(config.base_days, 365);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use roster_core::{PatternSlot, RotationPattern};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One roster problem instance.
///
/// The defaults mirror the instance the system was designed around:
/// six people, a 365-day calendar, a phase stagger of eight days, and the
/// standard 10-day rotation (see [`RotationPattern::standard`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterConfig {
    /// Number of people to roster.
    #[serde(default = "default_num_people")]
    pub num_people: usize,

    /// Number of calendar days the final roster must cover.
    #[serde(default = "default_base_days")]
    pub base_days: usize,

    /// Stagger, in days, between successive people's rotation starts.
    /// Only sizes the scaffolding prefix; the solver picks actual phases.
    #[serde(default = "default_phase_offset")]
    pub phase_offset: usize,

    /// The cyclic rotation pattern every person follows.
    #[serde(default = "RotationPattern::standard")]
    pub rotation_pattern: RotationPattern,
}

fn default_num_people() -> usize {
    6
}

fn default_base_days() -> usize {
    365
}

fn default_phase_offset() -> usize {
    8
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            num_people: default_num_people(),
            base_days: default_base_days(),
            phase_offset: default_phase_offset(),
            rotation_pattern: RotationPattern::standard(),
        }
    }
}

impl RosterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the number of people.
    pub fn with_num_people(mut self, num_people: usize) -> Self {
        self.num_people = num_people;
        self
    }

    /// Sets the number of calendar days to cover.
    pub fn with_base_days(mut self, base_days: usize) -> Self {
        self.base_days = base_days;
        self
    }

    /// Sets the stagger between successive people's rotation starts.
    pub fn with_phase_offset(mut self, phase_offset: usize) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    /// Sets the rotation pattern.
    pub fn with_rotation_pattern(mut self, slots: Vec<PatternSlot>) -> Self {
        self.rotation_pattern = RotationPattern::new(slots);
        self
    }

    /// Total number of days the model spans, scaffolding included.
    ///
    /// The `(num_people - 1) * phase_offset` extra days in front of the
    /// calendar give every person room to be mid-rotation by the time the
    /// reported range starts.
    pub fn num_days(&self) -> usize {
        self.base_days + self.discard_boundary()
    }

    /// First day index that appears in the output; everything before it is
    /// solve-only scaffolding.
    pub fn discard_boundary(&self) -> usize {
        self.num_people.saturating_sub(1) * self.phase_offset
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if any field is out of range. A
    /// valid configuration may still turn out infeasible; that is reported
    /// by the solve, not here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_people == 0 {
            return Err(ConfigError::Invalid(
                "num_people must be at least 1".to_string(),
            ));
        }
        if self.base_days == 0 {
            return Err(ConfigError::Invalid(
                "base_days must be at least 1".to_string(),
            ));
        }
        if self.rotation_pattern.is_empty() {
            return Err(ConfigError::Invalid(
                "rotation_pattern must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
