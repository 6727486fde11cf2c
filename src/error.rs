//! Error types for the predator-prey simulation.

use std::path::PathBuf;
use thiserror::Error;

/// A simulation parameter outside of its allowed domain.
///
/// Variants are listed in the order they are checked by
/// [`Config::validate`](crate::Config::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("Birth rate of mice must be a positive float greater than 0")]
    MiceBirthRate,

    #[error("Death rate of mice must be a positive float greater than 0")]
    MiceDeathRate,

    #[error("Diffusion rate of mice must be a positive float greater than 0")]
    MiceDiffusionRate,

    #[error("Birth rate of foxes must be a positive float greater than 0")]
    FoxesBirthRate,

    #[error("Death rate of foxes must be a positive float greater than 0")]
    FoxesDeathRate,

    #[error("Diffusion rate of foxes must be a positive float greater than 0")]
    FoxesDiffusionRate,

    #[error("Time step size must be a positive float greater than 0")]
    TimeStepSize,

    #[error("Number of time steps to output files must be a positive integer greater than 0")]
    OutputInterval,

    #[error("Time to run the simulation (in timesteps) must be a positive integer greater than 0")]
    Duration,

    #[error("Random seed for initializing mouse densities must be a non-negative integer")]
    MouseSeed,

    #[error("Random seed for initializing fox densities must be a non-negative integer")]
    FoxSeed,
}

/// Errors raised while checking or reading a landscape file.
#[derive(Debug, Error)]
pub enum LandscapeError {
    /// The path does not name an existing file.
    #[error("The file {} does not exist.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid map format: The first line should contain only two positive integers (width and height).")]
    HeaderTokenCount,

    #[error("Invalid map format: Width and height of the landscape must be positive integers greater than 0.")]
    NonPositiveDimensions,

    #[error("Invalid map format: The number of columns of the map should be the same as value of the first of the first line (width).")]
    ColumnCount,

    #[error("Invalid map format: Each line should only have '0' or '1'.")]
    InvalidCell,

    #[error("Invalid map format: The number of rows in the map should be the same as the value provided as the second of the first line (height).")]
    ExtraRows,

    /// A token that should be an integer is not one.
    #[error("Invalid map format: cannot read '{token}' on line {line} as an integer")]
    Parse { line: usize, token: String },

    #[error("I/O error reading landscape: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ParameterError),
}

/// Anything that aborts a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Landscape(#[from] LandscapeError),

    /// Writing an output file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SimulationError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_quotes_path() {
        let err = LandscapeError::NotFound {
            path: PathBuf::from("missing.dat"),
        };
        assert_eq!(err.to_string(), "The file missing.dat does not exist.");
    }

    #[test]
    fn test_parameter_error_is_transparent() {
        let err = SimulationError::from(ParameterError::FoxSeed);
        assert_eq!(
            err.to_string(),
            "Random seed for initializing fox densities must be a non-negative integer"
        );
    }
}
