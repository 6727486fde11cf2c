//! Reaction-diffusion update rule for mice (prey) and foxes (predators).
//!
//! For a land cell at `(row, col)` with current densities `mice` and `foxes`:
//!
//! ```text
//! migration = k * (sum of neighbouring densities - land_neighbours * own density)
//! mice'     = mice  + dt * ((r * mice - a * mice * foxes) + migration)
//! foxes'    = foxes + dt * ((b * mice * foxes - m * foxes) + migration)
//! ```
//!
//! Results are floored at zero. Both species read only the current buffers;
//! the new values go to the next buffers.

use crate::config::{Config, SpeciesConfig};
use crate::grid::Grid;
use crate::landscape::Landscape;

/// The two simulated species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Prey
    Mice,
    /// Predators
    Foxes,
}

/// Birth, death and diffusion coefficients for one species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rates {
    pub birth: f64,
    pub death: f64,
    pub diffusion: f64,
}

impl From<&SpeciesConfig> for Rates {
    fn from(config: &SpeciesConfig) -> Self {
        Self {
            birth: config.birth_rate,
            death: config.death_rate,
            diffusion: config.diffusion_rate,
        }
    }
}

/// Everything the stepper needs besides the grids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParameters {
    pub mice: Rates,
    pub foxes: Rates,
    pub time_step_size: f64,
}

impl StepParameters {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mice: Rates::from(&config.mice),
            foxes: Rates::from(&config.foxes),
            time_step_size: config.time.delta_t,
        }
    }

    #[inline]
    pub fn rates(&self, species: Species) -> Rates {
        match species {
            Species::Mice => self.mice,
            Species::Foxes => self.foxes,
        }
    }
}

/// Net density change at `(row, col)` from movement to and from neighbouring
/// land squares.
#[inline]
pub fn calculate_migration_change(
    diffusion_rate: f64,
    land_neighbours: &Grid<u8>,
    densities: &Grid<f64>,
    row: usize,
    col: usize,
) -> f64 {
    let neighbouring = densities.cardinal_sum(row, col);
    let own = f64::from(land_neighbours[(row, col)]) * densities[(row, col)];
    diffusion_rate * (neighbouring - own)
}

/// New density of `species` at `(row, col)`, computed from the current mice
/// and fox grids and floored at zero.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn update_population_density(
    species: Species,
    rates: Rates,
    time_step_size: f64,
    land_neighbours: &Grid<u8>,
    mice: &Grid<f64>,
    foxes: &Grid<f64>,
    row: usize,
    col: usize,
) -> f64 {
    let current_mice = mice[(row, col)];
    let current_foxes = foxes[(row, col)];

    let (current, birth, death, own_densities) = match species {
        Species::Mice => (
            current_mice,
            rates.birth * current_mice,
            rates.death * current_mice * current_foxes,
            mice,
        ),
        Species::Foxes => (
            current_foxes,
            rates.birth * current_mice * current_foxes,
            rates.death * current_foxes,
            foxes,
        ),
    };

    let migration =
        calculate_migration_change(rates.diffusion, land_neighbours, own_densities, row, col);
    let next = current + time_step_size * ((birth - death) + migration);
    next.max(0.0)
}

/// Apply one time step to every land cell, writing into `next_mice` and
/// `next_foxes`. Water and halo cells in the next buffers are not touched.
pub fn update_population_densities(
    params: &StepParameters,
    landscape: &Landscape,
    land_neighbours: &Grid<u8>,
    mice: &Grid<f64>,
    next_mice: &mut Grid<f64>,
    foxes: &Grid<f64>,
    next_foxes: &mut Grid<f64>,
) {
    let dt = params.time_step_size;
    for (row, col) in landscape.land_cells() {
        next_mice[(row, col)] = update_population_density(
            Species::Mice,
            params.rates(Species::Mice),
            dt,
            land_neighbours,
            mice,
            foxes,
            row,
            col,
        );
        next_foxes[(row, col)] = update_population_density(
            Species::Foxes,
            params.rates(Species::Foxes),
            dt,
            land_neighbours,
            mice,
            foxes,
            row,
            col,
        );
    }
}
