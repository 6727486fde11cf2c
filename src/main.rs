//! Predator-prey simulation - CLI entry point.

use clap::{Args, Parser, Subcommand};
use predator_prey::landscape::validate_landscape_file;
use predator_prey::{Config, Simulation, VERSION};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "predator-prey")]
#[command(version)]
#[command(about = "Predator-prey simulation. Foxes and mice.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run(RunArgs),

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Check a landscape file without running anything
    Validate {
        /// Landscape file
        landscape_file: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Input landscape file
    #[arg(short = 'f', long)]
    landscape_file: PathBuf,

    /// Configuration file (YAML); flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Birth rate of mice
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    birth_mice: Option<f64>,

    /// Rate at which foxes eat mice
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    death_mice: Option<f64>,

    /// Diffusion rate of mice
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    diffusion_mice: Option<f64>,

    /// Birth rate of foxes
    #[arg(short = 'b', long, allow_negative_numbers = true)]
    birth_foxes: Option<f64>,

    /// Rate at which foxes starve
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    death_foxes: Option<f64>,

    /// Diffusion rate of foxes
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    diffusion_foxes: Option<f64>,

    /// Time step size
    #[arg(long, visible_alias = "dt", allow_negative_numbers = true)]
    delta_t: Option<f64>,

    /// Number of time steps at which to output files
    #[arg(short = 't', long, allow_negative_numbers = true)]
    time_step: Option<i64>,

    /// Time to run the simulation (in timesteps)
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    duration: Option<i64>,

    /// Random seed for initialising mouse densities
    #[arg(long, visible_alias = "ms", allow_negative_numbers = true)]
    mouse_seed: Option<i64>,

    /// Random seed for initialising fox densities
    #[arg(long, visible_alias = "fs", allow_negative_numbers = true)]
    fox_seed: Option<i64>,

    /// Output directory for averages.csv and map files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the reported statistics as JSON
    #[arg(long)]
    history: Option<PathBuf>,
}

impl RunArgs {
    /// Start from the config file (or defaults) and apply explicit flags.
    /// Validation happens once, on the merged result, in `Simulation::new`.
    fn config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let overrides = [
            (self.birth_mice, &mut config.mice.birth_rate),
            (self.death_mice, &mut config.mice.death_rate),
            (self.diffusion_mice, &mut config.mice.diffusion_rate),
            (self.birth_foxes, &mut config.foxes.birth_rate),
            (self.death_foxes, &mut config.foxes.death_rate),
            (self.diffusion_foxes, &mut config.foxes.diffusion_rate),
            (self.delta_t, &mut config.time.delta_t),
        ];
        for (value, slot) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }

        let overrides = [
            (self.time_step, &mut config.time.output_interval),
            (self.duration, &mut config.time.duration),
            (self.mouse_seed, &mut config.mice.seed),
            (self.fox_seed, &mut config.foxes.seed),
        ];
        for (value, slot) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }

        if let Some(dir) = &self.output {
            config.output.directory = dir.clone();
        }

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    // Report errors by their message rather than their debug form.
    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Run(args) => run_simulation(args),
        Commands::Init { output } => {
            init_logging("info");
            generate_config(output)
        }
        Commands::Validate { landscape_file } => {
            init_logging("info");
            validate(landscape_file)
        }
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_simulation(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config()?;
    init_logging(&config.logging.log_level);

    log::info!("Predator-prey simulation {}", VERSION);

    let mut sim = Simulation::new(config, &args.landscape_file)?;

    println!("Starting simulation");
    println!(
        "  Landscape: {}x{} ({} land squares)",
        sim.landscape.width(),
        sim.landscape.height(),
        sim.landscape.land_count()
    );
    println!("  Steps: {}", sim.total_time_steps());
    println!("  Output: {:?}", sim.output().directory());
    println!();

    let start = Instant::now();
    let summary = sim.run()?;
    let elapsed = start.elapsed();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Steps: {}", summary.steps);
    println!("Reports: {}", summary.reports);
    if let Some(last) = summary.last_report {
        println!("Last averages: mice {:.6}, foxes {:.6}", last.average_mice, last.average_foxes);
    }

    if let Some(path) = &args.history {
        sim.stats_history.save(path)?;
        println!("Stats history: {:?}", path);
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn validate(landscape_file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = validate_landscape_file(&landscape_file)?;
    println!("{:?}: valid {}x{} landscape", landscape_file, width, height);
    Ok(())
}
