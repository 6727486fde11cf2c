//! Averages CSV and PPM map output.

use crate::colour::ColourGrid;
use crate::error::SimulationError;
use crate::landscape::Landscape;
use crate::stats::DensityStatistics;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the averages table.
pub const AVERAGES_FILE: &str = "averages.csv";

/// Header row of the averages table.
pub const AVERAGES_HEADER: &str = "Timestep,Time,Mice,Foxes";

/// Colour written for water cells.
pub const WATER_COLOUR: [u8; 3] = [0, 200, 255];

/// File name of the map for a step, e.g. `map_0010.ppm`.
pub fn map_file_name(timestep: u64) -> String {
    format!("map_{:04}.ppm", timestep)
}

/// One row of the averages table, without the trailing newline.
pub fn averages_row(stats: &DensityStatistics) -> String {
    format!(
        "{},{:.1},{:.17},{:.17}",
        stats.timestep, stats.time, stats.average_mice, stats.average_foxes
    )
}

/// Write an ASCII (`P3`) PPM image of the landscape.
///
/// Land cells are `(fox colour, mouse colour, 0)`; water is [`WATER_COLOUR`].
pub fn write_ppm<W: Write>(
    out: &mut W,
    landscape: &Landscape,
    foxes: &ColourGrid,
    mice: &ColourGrid,
) -> std::io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", landscape.width(), landscape.height())?;
    for row in 0..landscape.height() {
        for col in 0..landscape.width() {
            if landscape.is_land(row + 1, col + 1) {
                writeln!(out, "{} {} {}", foxes.get(row, col), mice.get(row, col), 0)?;
            } else {
                let [r, g, b] = WATER_COLOUR;
                writeln!(out, "{} {} {}", r, g, b)?;
            }
        }
    }
    Ok(())
}

/// Writes the per-run output files into one directory.
#[derive(Clone, Debug)]
pub struct OutputWriter {
    directory: PathBuf,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn averages_path(&self) -> PathBuf {
        self.directory.join(AVERAGES_FILE)
    }

    pub fn map_path(&self, timestep: u64) -> PathBuf {
        self.directory.join(map_file_name(timestep))
    }

    /// Create (or truncate) the averages file and write its header.
    pub fn start_averages(&self) -> Result<(), SimulationError> {
        let path = self.averages_path();
        std::fs::create_dir_all(&self.directory)
            .and_then(|_| {
                let mut file = File::create(&path)?;
                writeln!(file, "{}", AVERAGES_HEADER)
            })
            .map_err(|e| SimulationError::output(&path, e))
    }

    /// Append one row to the averages file.
    pub fn append_averages(&self, stats: &DensityStatistics) -> Result<(), SimulationError> {
        let path = self.averages_path();
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .and_then(|mut file| writeln!(file, "{}", averages_row(stats)))
            .map_err(|e| SimulationError::output(&path, e))
    }

    /// Write `map_{timestep:04}.ppm` and return its path.
    pub fn write_map(
        &self,
        timestep: u64,
        landscape: &Landscape,
        foxes: &ColourGrid,
        mice: &ColourGrid,
    ) -> Result<PathBuf, SimulationError> {
        let path = self.map_path(timestep);
        File::create(&path)
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                write_ppm(&mut writer, landscape, foxes, mice)?;
                writer.flush()
            })
            .map_err(|e| SimulationError::output(&path, e))?;
        Ok(path)
    }
}
