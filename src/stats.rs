//! Density statistics for reporting intervals.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mean density over the land squares, or 0 when there are none.
///
/// Only interior cells are summed; halo cells never contribute.
pub fn calculate_average_density(land_count: usize, densities: &Grid<f64>) -> f64 {
    if land_count == 0 {
        return 0.0;
    }
    let total: f64 = densities
        .interior()
        .map(|(row, col)| densities[(row, col)])
        .sum();
    total / land_count as f64
}

/// Largest density in the grid. Densities are non-negative and the halo is
/// zero, so the result is never below 0.
pub fn calculate_maximum_density(densities: &Grid<f64>) -> f64 {
    densities.as_slice().iter().copied().fold(0.0, f64::max)
}

/// Maximum and average densities of both species at one reporting step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityStatistics {
    /// Step index
    pub timestep: u64,
    /// Simulated time (`timestep * delta_t`)
    pub time: f64,
    pub maximum_mice: f64,
    pub maximum_foxes: f64,
    pub average_mice: f64,
    pub average_foxes: f64,
}

impl DensityStatistics {
    /// One-line summary in the same layout as the averages file.
    pub fn summary(&self) -> String {
        format!(
            "Averages. Timestep: {} Time (s): {:.1} Mice: {:.17} Foxes: {:.17}",
            self.timestep, self.time, self.average_mice, self.average_foxes
        )
    }
}

/// Maximum and average densities of both species.
pub fn calculate_density_statistics(
    mice: &Grid<f64>,
    foxes: &Grid<f64>,
    land_count: usize,
) -> DensityStatistics {
    DensityStatistics {
        maximum_mice: calculate_maximum_density(mice),
        maximum_foxes: calculate_maximum_density(foxes),
        average_mice: calculate_average_density(land_count, mice),
        average_foxes: calculate_average_density(land_count, foxes),
        ..DensityStatistics::default()
    }
}

/// Statistics recorded at every reporting interval of a run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// Recorded snapshots, oldest first
    pub snapshots: Vec<DensityStatistics>,
    /// Steps between snapshots
    pub interval: u64,
}

impl StatsHistory {
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    pub fn record(&mut self, stats: DensityStatistics) {
        self.snapshots.push(stats);
    }

    pub fn latest(&self) -> Option<&DensityStatistics> {
        self.snapshots.last()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
