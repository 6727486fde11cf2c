//! # Predator-prey
//!
//! Reaction-diffusion simulation of mice (prey) and foxes (predators) spreading
//! over a landscape of land and water squares.
//!
//! ## Features
//!
//! - **Halo grids**: every grid carries a one-cell water border, so the stencil
//!   never needs bounds checks in the hot loop
//! - **Double-buffered**: each species owns a current/next buffer pair that is
//!   swapped, not copied, every step
//! - **Reproducible**: one explicitly seeded generator per species
//! - **Configurable**: YAML configuration files or CLI flags
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use predator_prey::{Config, Simulation};
//!
//! let mut config = Config::default();
//! config.time.duration = 100;
//!
//! let mut sim = Simulation::new(config, "map.dat").unwrap();
//! let summary = sim.run().unwrap();
//! println!("Reports written: {}", summary.reports);
//! ```
//!
//! ## Output
//!
//! Every `output_interval` steps a row is appended to `averages.csv` and a
//! `map_NNNN.ppm` image is written, with foxes in the red channel, mice in
//! the green channel and water drawn in a fixed blue.

pub mod colour;
pub mod config;
pub mod error;
pub mod grid;
pub mod landscape;
pub mod output;
pub mod population;
pub mod simulation;
pub mod stats;
pub mod stepper;

// Re-export main types
pub use config::Config;
pub use error::{ConfigError, LandscapeError, ParameterError, SimulationError};
pub use grid::Grid;
pub use landscape::Landscape;
pub use simulation::{RunSummary, Simulation};
pub use stepper::Species;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
