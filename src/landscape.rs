//! Landscape files: pre-flight validation, loading and neighbour counts.
//!
//! A landscape file looks like
//!
//! ```text
//! 3 2
//! 1 1 1
//! 0 1 1
//! ```
//!
//! The first line holds `width height`, followed by exactly `height` lines of
//! `width` space-separated `0` (water) / `1` (land) tokens.

use crate::error::LandscapeError;
use crate::grid::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Land/water map with a water halo, fixed for the lifetime of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Landscape {
    cells: Grid<u8>,
    land_count: usize,
}

impl Landscape {
    /// Wrap a grid of land flags. Any non-zero interior value counts as land.
    pub fn from_grid(grid: Grid<u8>) -> Self {
        let mut cells = Grid::new(grid.height(), grid.width());
        for (row, col) in grid.interior() {
            cells[(row, col)] = u8::from(grid[(row, col)] != 0);
        }
        let land_count = cells.as_slice().iter().filter(|&&c| c != 0).count();
        Self { cells, land_count }
    }

    /// Build from interior rows, e.g. `&[[1, 1, 1], [0, 1, 1]]`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        Self::from_grid(Grid::from_rows(rows))
    }

    /// Read a landscape file that has already passed [`validate_landscape_file`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LandscapeError> {
        let path = path.as_ref();
        let file = open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse landscape text. Only integer and token-count problems are reported;
    /// the full grammar is checked by [`validate_landscape`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LandscapeError> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?.unwrap_or_default();
        let dims = parse_integers(&header, 1)?;
        let (width, height) = match dims.as_slice() {
            [w, h] if *w > 0 && *h > 0 => (*w as usize, *h as usize),
            [_, _] => return Err(LandscapeError::NonPositiveDimensions),
            _ => return Err(LandscapeError::HeaderTokenCount),
        };
        log::info!("Width: {} Height: {}", width, height);

        let mut cells = Grid::new(height, width);
        for row in 1..=height {
            let line = lines.next().transpose()?.unwrap_or_default();
            let values = parse_integers(&line, row + 1)?;
            if values.len() != width {
                return Err(LandscapeError::ColumnCount);
            }
            for (col, value) in values.into_iter().enumerate() {
                cells[(row, col + 1)] = u8::from(value != 0);
            }
        }

        Ok(Self::from_grid(cells))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.height()
    }

    #[inline]
    pub fn width_with_halo(&self) -> usize {
        self.cells.cols()
    }

    #[inline]
    pub fn height_with_halo(&self) -> usize {
        self.cells.rows()
    }

    /// Number of land squares.
    #[inline]
    pub fn land_count(&self) -> usize {
        self.land_count
    }

    #[inline]
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).is_some_and(|c| c != 0)
    }

    /// Underlying `0`/`1` grid, halo included.
    pub fn cells(&self) -> &Grid<u8> {
        &self.cells
    }

    /// Row-major iterator over the coordinates of land squares.
    pub fn land_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .interior()
            .filter(move |&(row, col)| self.cells[(row, col)] != 0)
    }

    /// Count the land squares north, south, west and east of every interior
    /// cell. Water cells get a count too; it is never read.
    pub fn land_neighbours(&self) -> Grid<u8> {
        let mut neighbours = Grid::zeros_like(&self.cells);
        for (row, col) in self.cells.interior() {
            neighbours[(row, col)] = self.cells.cardinal_sum(row, col);
        }
        neighbours
    }
}

/// Check that `path` exists and follows the landscape grammar.
///
/// Returns `(width, height)` on success.
pub fn validate_landscape_file<P: AsRef<Path>>(path: P) -> Result<(usize, usize), LandscapeError> {
    let file = open(path.as_ref())?;
    validate_landscape(BufReader::new(file))
}

/// Check landscape text against the grammar, reporting the first problem found.
pub fn validate_landscape<R: BufRead>(reader: R) -> Result<(usize, usize), LandscapeError> {
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(LandscapeError::HeaderTokenCount);
    }
    let dims = parse_integers(&header, 1)?;
    let (width, height) = (dims[0], dims[1]);
    if width <= 0 || height <= 0 {
        return Err(LandscapeError::NonPositiveDimensions);
    }
    let (width, height) = (width as usize, height as usize);

    for _ in 0..height {
        let line = lines.next().transpose()?.unwrap_or_default();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != width {
            return Err(LandscapeError::ColumnCount);
        }
        if !tokens.iter().all(|t| matches!(*t, "0" | "1")) {
            return Err(LandscapeError::InvalidCell);
        }
    }

    // Any further line, even an empty one, is an extra row.
    if lines.next().transpose()?.is_some() {
        return Err(LandscapeError::ExtraRows);
    }

    Ok((width, height))
}

fn open(path: &Path) -> Result<File, LandscapeError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LandscapeError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LandscapeError::Io(e),
    })
}

fn parse_integers(line: &str, line_number: usize) -> Result<Vec<i64>, LandscapeError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| LandscapeError::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "3 2\n1 1 1\n0 1 1\n";

    fn check(text: &str) -> Result<(usize, usize), LandscapeError> {
        validate_landscape(Cursor::new(text))
    }

    #[test]
    fn test_load_sample() {
        let landscape = Landscape::from_reader(Cursor::new(SAMPLE)).unwrap();

        assert_eq!(landscape.width(), 3);
        assert_eq!(landscape.height(), 2);
        assert_eq!(landscape.width_with_halo(), 5);
        assert_eq!(landscape.height_with_halo(), 4);
        assert_eq!(landscape.land_count(), 5);

        let expected: [u8; 20] = [
            0, 0, 0, 0, 0, //
            0, 1, 1, 1, 0, //
            0, 0, 1, 1, 0, //
            0, 0, 0, 0, 0,
        ];
        assert_eq!(landscape.cells().as_slice(), &expected);
    }

    #[test]
    fn test_land_neighbours() {
        let landscape = Landscape::from_rows(&[[1u8, 1, 1], [0, 1, 1]]);
        let neighbours = landscape.land_neighbours();

        let expected: [u8; 20] = [
            0, 0, 0, 0, 0, //
            0, 1, 3, 2, 0, //
            0, 2, 2, 2, 0, //
            0, 0, 0, 0, 0,
        ];
        assert_eq!(neighbours.as_slice(), &expected);
    }

    #[test]
    fn test_land_neighbours_surrounded_cell() {
        let landscape = Landscape::from_rows(&[[1u8, 1, 1], [1, 1, 1], [1, 1, 1]]);
        let neighbours = landscape.land_neighbours();
        assert_eq!(neighbours[(2, 2)], 4);
        assert!(neighbours[(1, 1)] <= 2);
    }

    #[test]
    fn test_land_cells() {
        let landscape = Landscape::from_rows(&[[1u8, 0], [0, 1]]);
        let land: Vec<_> = landscape.land_cells().collect();
        assert_eq!(land, vec![(1, 1), (2, 2)]);
        assert!(!landscape.is_land(0, 0));
    }

    #[test]
    fn test_loader_rejects_bad_integer() {
        let err = Landscape::from_reader(Cursor::new("3 2\n1 x 1\n0 1 1\n")).unwrap_err();
        assert!(matches!(err, LandscapeError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_loader_rejects_short_row() {
        let err = Landscape::from_reader(Cursor::new("3 2\n1 1\n0 1 1\n")).unwrap_err();
        assert!(matches!(err, LandscapeError::ColumnCount));
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert_eq!(check(SAMPLE).unwrap(), (3, 2));
        assert_eq!(check("3 2\n1 1 1\n0 1 1").unwrap(), (3, 2));
    }

    #[test]
    fn test_validate_header_token_count() {
        assert!(matches!(check("3\n1 1 1\n"), Err(LandscapeError::HeaderTokenCount)));
        assert!(matches!(check("3 2 1\n1 1 1\n0 1 1\n"), Err(LandscapeError::HeaderTokenCount)));
        assert!(matches!(check(""), Err(LandscapeError::HeaderTokenCount)));
    }

    #[test]
    fn test_validate_non_positive_dimensions() {
        assert!(matches!(check("0 2\n"), Err(LandscapeError::NonPositiveDimensions)));
        assert!(matches!(check("3 -1\n"), Err(LandscapeError::NonPositiveDimensions)));
    }

    #[test]
    fn test_validate_column_count() {
        let err = check("3 2\n1 1 1\n0 1\n").unwrap_err();
        assert!(matches!(err, LandscapeError::ColumnCount));
        assert_eq!(
            err.to_string(),
            "Invalid map format: The number of columns of the map should be the same as value of the first of the first line (width)."
        );
    }

    #[test]
    fn test_validate_missing_row() {
        assert!(matches!(check("3 2\n1 1 1\n"), Err(LandscapeError::ColumnCount)));
    }

    #[test]
    fn test_validate_invalid_cell() {
        let err = check("3 2\n1 2 1\n0 1 1\n").unwrap_err();
        assert!(matches!(err, LandscapeError::InvalidCell));
        assert_eq!(
            err.to_string(),
            "Invalid map format: Each line should only have '0' or '1'."
        );
    }

    #[test]
    fn test_validate_extra_rows() {
        assert!(matches!(check("3 2\n1 1 1\n0 1 1\n1 1 1\n"), Err(LandscapeError::ExtraRows)));
        assert!(matches!(check("3 2\n1 1 1\n0 1 1\n\n"), Err(LandscapeError::ExtraRows)));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate_landscape_file("does/not/exist.dat").unwrap_err();
        assert_eq!(err.to_string(), "The file does/not/exist.dat does not exist.");
    }
}
