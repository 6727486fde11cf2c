//! Density-to-colour mapping for map snapshots.

use crate::grid::Grid;
use crate::landscape::Landscape;

/// Largest colour channel value.
pub const MAX_COLOUR: f64 = 255.0;

/// Scale `density` linearly so that `maximum` maps to 255.
///
/// Returns 0 when `maximum` is 0. No clamping is applied; callers pass the
/// grid maximum, so `density <= maximum`.
#[inline]
pub fn calculate_colour_value(density: f64, maximum: f64) -> f64 {
    if maximum != 0.0 {
        (density / maximum) * MAX_COLOUR
    } else {
        0.0
    }
}

/// Per-cell colour channel, `height x width`, no halo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColourGrid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl ColourGrid {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![0; height * width],
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Colour at zero-based `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.width + col] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Recolour the land cells of `densities` against `maximum`.
    ///
    /// Water cells keep whatever they held before. Values are truncated
    /// toward zero.
    pub fn update(&mut self, landscape: &Landscape, densities: &Grid<f64>, maximum: f64) {
        for (row, col) in landscape.land_cells() {
            let value = calculate_colour_value(densities[(row, col)], maximum);
            self.set(row - 1, col - 1, value as u8);
        }
    }
}
