//! Performance benchmarks for the predator-prey stepper

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use predator_prey::grid::Grid;
use predator_prey::population::initialize_population_densities;
use predator_prey::stepper::{update_population_densities, StepParameters};
use predator_prey::{Config, Landscape, Simulation};

/// Square island with a lake in the middle.
fn island(size: usize) -> Landscape {
    let centre = size as f64 / 2.0;
    let rows: Vec<Vec<u8>> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let dr = row as f64 - centre;
                    let dc = col as f64 - centre;
                    u8::from(dr * dr + dc * dc > (size * size / 16) as f64)
                })
                .collect()
        })
        .collect();
    Landscape::from_rows(&rows)
}

fn benchmark_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_population_densities");
    let config = Config::default();
    let params = StepParameters::from_config(&config);

    for size in [64, 256, 512].iter() {
        let landscape = island(*size);
        let neighbours = landscape.land_neighbours();
        let mice = initialize_population_densities(1, &landscape);
        let foxes = initialize_population_densities(2, &landscape);
        let mut next_mice = Grid::zeros_like(&mice);
        let mut next_foxes = Grid::zeros_like(&foxes);

        group.bench_with_input(BenchmarkId::new("size", size), size, |b, _| {
            b.iter(|| {
                update_population_densities(
                    black_box(&params),
                    &landscape,
                    &neighbours,
                    &mice,
                    &mut next_mice,
                    &foxes,
                    &mut next_foxes,
                );
            });
        });
    }

    group.finish();
}

fn benchmark_simulation_step(c: &mut Criterion) {
    let mut config = Config::default();
    config.output.directory = std::env::temp_dir();
    let mut sim = match Simulation::with_landscape(config, island(256)) {
        Ok(sim) => sim,
        Err(e) => panic!("default configuration rejected: {}", e),
    };

    c.bench_function("simulation_step_256", |b| {
        b.iter(|| {
            sim.step();
        });
    });
}

fn benchmark_statistics(c: &mut Criterion) {
    let mut config = Config::default();
    config.output.directory = std::env::temp_dir();
    let sim = match Simulation::with_landscape(config, island(256)) {
        Ok(sim) => sim,
        Err(e) => panic!("default configuration rejected: {}", e),
    };

    c.bench_function("statistics_256", |b| {
        b.iter(|| black_box(sim.statistics()));
    });
}

criterion_group!(
    benches,
    benchmark_update,
    benchmark_simulation_step,
    benchmark_statistics,
);
criterion_main!(benches);
