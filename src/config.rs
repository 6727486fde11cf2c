//! Configuration system for the predator-prey simulation.
//!
//! Supports YAML configuration files with the same defaults as the CLI.

use crate::error::{ConfigError, ParameterError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub mice: SpeciesConfig,
    pub foxes: SpeciesConfig,
    pub time: TimeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-species rates and seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Birth rate (mice: intrinsic, foxes: per mouse encountered)
    pub birth_rate: f64,
    /// Death rate (mice: eaten per fox, foxes: starvation)
    pub death_rate: f64,
    /// Diffusion rate between neighbouring land squares
    pub diffusion_rate: f64,
    /// Random seed for the initial densities (0 = start empty)
    pub seed: i64,
}

/// Time stepping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Time step size
    pub delta_t: f64,
    /// Number of time steps between output files
    pub output_interval: i64,
    /// Simulated time to run for
    pub duration: i64,
}

/// Where output files go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `averages.csv` and the `map_*.ppm` files
    pub directory: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mice: SpeciesConfig {
                birth_rate: 0.1,
                death_rate: 0.05,
                diffusion_rate: 0.2,
                seed: 1,
            },
            foxes: SpeciesConfig {
                birth_rate: 0.03,
                death_rate: 0.09,
                diffusion_rate: 0.2,
                seed: 1,
            },
            time: TimeConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            delta_t: 0.5,
            output_interval: 10,
            duration: 500,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a YAML file without checking parameter domains.
    ///
    /// Used when further overrides are applied before validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load configuration from a YAML file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate parameter domains. The first violation wins.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.mice.birth_rate <= 0.0 {
            return Err(ParameterError::MiceBirthRate);
        }
        if self.mice.death_rate <= 0.0 {
            return Err(ParameterError::MiceDeathRate);
        }
        if self.mice.diffusion_rate <= 0.0 {
            return Err(ParameterError::MiceDiffusionRate);
        }
        if self.foxes.birth_rate <= 0.0 {
            return Err(ParameterError::FoxesBirthRate);
        }
        if self.foxes.death_rate <= 0.0 {
            return Err(ParameterError::FoxesDeathRate);
        }
        if self.foxes.diffusion_rate <= 0.0 {
            return Err(ParameterError::FoxesDiffusionRate);
        }
        if self.time.delta_t <= 0.0 {
            return Err(ParameterError::TimeStepSize);
        }
        if self.time.output_interval <= 0 {
            return Err(ParameterError::OutputInterval);
        }
        if self.time.duration <= 0 {
            return Err(ParameterError::Duration);
        }
        if self.mice.seed < 0 {
            return Err(ParameterError::MouseSeed);
        }
        if self.foxes.seed < 0 {
            return Err(ParameterError::FoxSeed);
        }
        Ok(())
    }

    /// Number of steps in a run: `duration / delta_t`, truncated.
    pub fn total_time_steps(&self) -> u64 {
        (self.time.duration as f64 / self.time.delta_t) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_time_steps(), 1000);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let yaml = "
mice: { birth_rate: 0.5, death_rate: 0.2, diffusion_rate: 0.1, seed: 42 }
foxes: { birth_rate: 0.4, death_rate: 0.3, diffusion_rate: 0.2, seed: 42 }
time: { delta_t: 1.0, output_interval: 1, duration: 2 }
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.logging.log_level, "info");
        assert_eq!(config.total_time_steps(), 2);
    }

    #[test]
    fn test_each_parameter_checked() {
        let cases: [(fn(&mut Config), ParameterError); 11] = [
            (|c| c.mice.birth_rate = 0.0, ParameterError::MiceBirthRate),
            (|c| c.mice.death_rate = -1.0, ParameterError::MiceDeathRate),
            (|c| c.mice.diffusion_rate = 0.0, ParameterError::MiceDiffusionRate),
            (|c| c.foxes.birth_rate = 0.0, ParameterError::FoxesBirthRate),
            (|c| c.foxes.death_rate = 0.0, ParameterError::FoxesDeathRate),
            (|c| c.foxes.diffusion_rate = 0.0, ParameterError::FoxesDiffusionRate),
            (|c| c.time.delta_t = 0.0, ParameterError::TimeStepSize),
            (|c| c.time.output_interval = 0, ParameterError::OutputInterval),
            (|c| c.time.duration = -5, ParameterError::Duration),
            (|c| c.mice.seed = -1, ParameterError::MouseSeed),
            (|c| c.foxes.seed = -1, ParameterError::FoxSeed),
        ];

        for (mutate, expected) in cases {
            let mut config = Config::default();
            mutate(&mut config);
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_zero_seed_allowed() {
        let mut config = Config::default();
        config.mice.seed = 0;
        config.foxes.seed = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        let mut config = Config::default();
        config.foxes.seed = -1;
        config.mice.diffusion_rate = 0.0;
        assert_eq!(config.validate(), Err(ParameterError::MiceDiffusionRate));
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.time.delta_t = 0.0;
        config.save(&path).unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ParameterError::TimeStepSize)));
    }

    #[test]
    fn test_load_skips_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.time.duration = 0;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.time.duration, 0);
        assert_eq!(loaded.validate(), Err(ParameterError::Duration));
    }

    #[test]
    fn test_total_steps_truncates() {
        let mut config = Config::default();
        config.time.duration = 10;
        config.time.delta_t = 3.0;
        assert_eq!(config.total_time_steps(), 3);
    }
}
