//! Halo-padded grid storage.
//!
//! A [`Grid`] for an `height x width` landscape holds `(height + 2) x (width + 2)`
//! values. Row/column `0` and the last row/column form a one-cell border that
//! always holds `T::default()`, so stencil reads around any interior cell never
//! leave the array. Interior cells are addressed with `1..=height` and
//! `1..=width`.

use std::ops::{Add, Index, IndexMut};

/// Rectangular grid with a one-cell halo border, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid for `height x width` interior cells, all set to `T::default()`.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![T::default(); (height + 2) * (width + 2)],
        }
    }

    /// Build a grid from interior rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(height, width);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.as_ref().iter().enumerate().take(width) {
                grid[(i + 1, j + 1)] = value;
            }
        }
        grid
    }

    /// Grid of the same shape as `self` with every cell at `T::default()`.
    pub fn zeros_like<U: Copy + Default>(other: &Grid<U>) -> Self {
        Self::new(other.height, other.width)
    }

    /// Value at `(row, col)` if it lies inside the halo-inclusive bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows() && col < self.cols() {
            Some(self.cells[row * self.cols() + col])
        } else {
            None
        }
    }

    /// Set an interior cell. Writes to the halo are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if self.is_interior(row, col) {
            let cols = self.cols();
            self.cells[row * cols + col] = value;
        }
    }
}

impl<T> Grid<T> {
    /// Interior height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interior width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows including the halo.
    #[inline]
    pub fn rows(&self) -> usize {
        self.height + 2
    }

    /// Number of columns including the halo.
    #[inline]
    pub fn cols(&self) -> usize {
        self.width + 2
    }

    #[inline]
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        (1..=self.height).contains(&row) && (1..=self.width).contains(&col)
    }

    /// Row-major iterator over interior coordinates.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let (height, width) = (self.height, self.width);
        (1..=height).flat_map(move |row| (1..=width).map(move |col| (row, col)))
    }

    /// All values, halo included, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Interior values of one row (`1..=height`).
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols() + 1;
        &self.cells[start..start + self.width]
    }
}

impl<T: Copy + Default + Add<Output = T>> Grid<T> {
    /// Sum of the north, south, west and east neighbours of `(row, col)`.
    ///
    /// Each term is included only when its coordinate is inside the
    /// halo-inclusive bounds, so this is also valid on the border itself.
    pub fn cardinal_sum(&self, row: usize, col: usize) -> T {
        let mut total = T::default();
        if row >= 1 {
            if let Some(v) = self.get(row - 1, col) {
                total = total + v;
            }
        }
        if let Some(v) = self.get(row + 1, col) {
            total = total + v;
        }
        if col >= 1 {
            if let Some(v) = self.get(row, col - 1) {
                total = total + v;
            }
        }
        if let Some(v) = self.get(row, col + 1) {
            total = total + v;
        }
        total
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * (self.width + 2) + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * (self.width + 2) + col]
    }
}
