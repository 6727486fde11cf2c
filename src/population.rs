//! Per-species density buffers and their random initialisation.

use crate::colour::ColourGrid;
use crate::grid::Grid;
use crate::landscape::Landscape;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Upper bound (exclusive) of a randomly seeded land-cell density.
pub const MAX_INITIAL_DENSITY: f64 = 5.0;

/// Seed a density grid shaped like `landscape`.
///
/// Seed `0` gives an empty grid. Any other seed draws one uniform sample from
/// `[0, 5.0)` per land cell in row-major order from a generator owned by this
/// call, so the same seed always produces the same grid. Water and halo cells
/// stay at zero.
pub fn initialize_population_densities(seed: u64, landscape: &Landscape) -> Grid<f64> {
    let mut densities = Grid::zeros_like(landscape.cells());
    if seed == 0 {
        return densities;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for (row, col) in landscape.land_cells() {
        densities[(row, col)] = rng.gen_range(0.0..MAX_INITIAL_DENSITY);
    }
    densities
}

/// Density state of one species: a current/next buffer pair plus the colour
/// grid used when rendering maps.
#[derive(Clone, Debug)]
pub struct Population {
    buffers: [Grid<f64>; 2],
    current: usize,
    pub colours: ColourGrid,
}

impl Population {
    /// Seed the current buffer, copy it into the next buffer and start with
    /// an all-zero colour grid.
    pub fn seeded(seed: u64, landscape: &Landscape) -> Self {
        Self::from_densities(initialize_population_densities(seed, landscape))
    }

    /// Start from explicit densities.
    pub fn from_densities(densities: Grid<f64>) -> Self {
        let colours = ColourGrid::new(densities.height(), densities.width());
        Self {
            buffers: [densities.clone(), densities],
            current: 0,
            colours,
        }
    }

    /// Densities for the current time step.
    #[inline]
    pub fn current(&self) -> &Grid<f64> {
        &self.buffers[self.current]
    }

    /// Buffer that the next step writes into.
    #[inline]
    pub fn next(&self) -> &Grid<f64> {
        &self.buffers[1 - self.current]
    }

    /// Borrow the current buffer for reading and the next one for writing.
    pub fn split(&mut self) -> (&Grid<f64>, &mut Grid<f64>) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Recolour land cells from the current densities.
    pub fn refresh_colours(&mut self, landscape: &Landscape, maximum: f64) {
        self.colours
            .update(landscape, &self.buffers[self.current], maximum);
    }

    /// Make the next buffer current. No data is copied.
    #[inline]
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }
}
