//! Simulation engine - main time-stepping loop.

use crate::config::Config;
use crate::error::SimulationError;
use crate::grid::Grid;
use crate::landscape::{validate_landscape_file, Landscape};
use crate::output::OutputWriter;
use crate::population::Population;
use crate::stats::{calculate_density_statistics, DensityStatistics, StatsHistory};
use crate::stepper::{update_population_densities, StepParameters};
use std::path::Path;

/// One predator-prey run over a fixed landscape.
pub struct Simulation {
    pub config: Config,

    // Environment
    pub landscape: Landscape,
    pub land_neighbours: Grid<u8>,

    // Populations
    pub mice: Population,
    pub foxes: Population,

    // State
    pub time_step_index: u64,
    pub stats_history: StatsHistory,

    params: StepParameters,
    output: OutputWriter,
}

/// What a finished run did.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub reports: usize,
    pub last_report: Option<DensityStatistics>,
}

impl Simulation {
    /// Validate the parameters and the landscape file, then load the landscape
    /// and seed both populations.
    pub fn new<P: AsRef<Path>>(config: Config, landscape_file: P) -> Result<Self, SimulationError> {
        config.validate()?;
        validate_landscape_file(&landscape_file)?;
        let landscape = Landscape::load(&landscape_file)?;
        Self::with_landscape(config, landscape)
    }

    /// Start a run on an already loaded landscape.
    pub fn with_landscape(config: Config, landscape: Landscape) -> Result<Self, SimulationError> {
        config.validate()?;
        log::info!("Number of land-only squares: {}", landscape.land_count());

        let land_neighbours = landscape.land_neighbours();
        // Validated non-negative above.
        let mice = Population::seeded(config.mice.seed as u64, &landscape);
        let foxes = Population::seeded(config.foxes.seed as u64, &landscape);
        let params = StepParameters::from_config(&config);
        let output = OutputWriter::new(&config.output.directory);
        let stats_history = StatsHistory::new(config.time.output_interval as u64);

        Ok(Self {
            config,
            landscape,
            land_neighbours,
            mice,
            foxes,
            time_step_index: 0,
            stats_history,
            params,
            output,
        })
    }

    /// Total number of steps `run` executes.
    pub fn total_time_steps(&self) -> u64 {
        self.config.total_time_steps()
    }

    /// Simulated time at the current step.
    pub fn time(&self) -> f64 {
        self.time_step_index as f64 * self.config.time.delta_t
    }

    pub fn output(&self) -> &OutputWriter {
        &self.output
    }

    /// Statistics of the current buffers.
    pub fn statistics(&self) -> DensityStatistics {
        DensityStatistics {
            timestep: self.time_step_index,
            time: self.time(),
            ..calculate_density_statistics(
                self.mice.current(),
                self.foxes.current(),
                self.landscape.land_count(),
            )
        }
    }

    /// Advance one time step and swap buffers.
    pub fn step(&mut self) {
        let (mice, next_mice) = self.mice.split();
        let (foxes, next_foxes) = self.foxes.split();
        update_population_densities(
            &self.params,
            &self.landscape,
            &self.land_neighbours,
            mice,
            next_mice,
            foxes,
            next_foxes,
        );
        self.mice.swap();
        self.foxes.swap();
        self.time_step_index += 1;
    }

    /// Record statistics, append the averages row, refresh the colour grids
    /// and write the map for the current step.
    pub fn report(&mut self) -> Result<DensityStatistics, SimulationError> {
        let stats = self.statistics();
        log::info!("{}", stats.summary());
        self.output.append_averages(&stats)?;

        self.mice.refresh_colours(&self.landscape, stats.maximum_mice);
        self.foxes.refresh_colours(&self.landscape, stats.maximum_foxes);
        let path = self.output.write_map(
            self.time_step_index,
            &self.landscape,
            &self.foxes.colours,
            &self.mice.colours,
        )?;
        log::debug!("Map written: {}", path.display());

        self.stats_history.record(stats);
        Ok(stats)
    }

    /// Run every step, reporting each `output_interval` steps.
    ///
    /// The averages file is recreated first. The state after the final step is
    /// not reported.
    pub fn run(&mut self) -> Result<RunSummary, SimulationError> {
        let initial = self.statistics();
        log::info!("{}", initial.summary());

        self.output.start_averages()?;

        let interval = self.config.time.output_interval as u64;
        let total = self.total_time_steps();
        while self.time_step_index < total {
            if self.time_step_index % interval == 0 {
                self.report()?;
            }
            self.step();
        }

        Ok(RunSummary {
            steps: self.time_step_index,
            reports: self.stats_history.snapshots.len(),
            last_report: self.stats_history.latest().copied(),
        })
    }
}
