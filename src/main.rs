//! Command-line front end for the MOALNS search.

use clap::Parser;
use log::{debug, error, info};
use moalns_2evrp::config::Config;
use moalns_2evrp::evaluator::TimeObjective;
use moalns_2evrp::feasibility::TimeWindowPolicy;
use moalns_2evrp::instance::{load_instance, reference_problem, reference_seed_solution};
use moalns_2evrp::operators::Operator;
use moalns_2evrp::selector::SelectionStrategy;
use moalns_2evrp::utils::{format_archive, format_duration, save_archive, write_archive_json};
use moalns_2evrp::MoalnsAlgorithm;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "moalns",
    about = "Search Pareto-efficient plans for the two-echelon VRP with time windows"
)]
struct Args {
    /// JSON instance file; the built-in reference instance is used if omitted
    #[arg(short, long)]
    instance: Option<PathBuf>,

    /// Iteration budget
    #[arg(short = 'n', long, default_value_t = 50)]
    iterations: usize,

    /// Population size
    #[arg(short, long, default_value_t = 5)]
    population: usize,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Comma-separated operator names (swap, split, relocate, merge)
    #[arg(long, value_delimiter = ',', default_values_t = [Operator::Swap, Operator::Split])]
    operators: Vec<Operator>,

    /// Use adaptive operator weights instead of uniform selection
    #[arg(long)]
    adaptive: bool,

    /// Reject routes that miss a customer time window
    #[arg(long)]
    time_windows: bool,

    /// Travel speed in distance units per time unit
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Service time spent at every customer
    #[arg(long, default_value_t = 0.0)]
    service_time: f64,

    /// Check first-echelon truck capacity
    #[arg(long)]
    truck_capacity_check: bool,

    /// Measure the time objective as travel time instead of stop count
    #[arg(long)]
    travel_time: bool,

    /// Write the archive as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a readable archive report to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::new()
            .with_iterations(self.iterations)
            .with_population_size(self.population)
            .with_operators(self.operators.clone())
            .with_truck_capacity_check(self.truck_capacity_check);

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.adaptive {
            config = config.with_selection(SelectionStrategy::adaptive());
        }
        if self.time_windows {
            config = config.with_time_windows(TimeWindowPolicy::Enforce {
                speed: self.speed,
                service_time: self.service_time,
            });
        }
        if self.travel_time {
            config = config.with_time_objective(TimeObjective::TravelTime { speed: self.speed });
        }

        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let (problem, seed_solution) = match &args.instance {
        Some(path) => {
            info!("loading instance from {}", path.display());
            load_instance(path)?
        }
        None => (reference_problem()?, Some(reference_seed_solution())),
    };

    let mut algorithm = MoalnsAlgorithm::new(problem, args.config())?;
    if let Some(solution) = seed_solution {
        algorithm = algorithm.with_seed_solution(solution);
    }

    if let Err(e) = algorithm.run() {
        error!("search aborted: {e}");
        return Err(e.into());
    }

    let archive = &algorithm.archive;
    if archive.is_empty() {
        println!("No feasible solution was found.");
    } else {
        print!("{}", format_archive(archive));
    }

    debug!("operator weights:\n{}", algorithm.selector);
    let statistics = algorithm.statistics();
    info!(
        "completed in {}\n{}",
        format_duration(statistics.runtime),
        statistics.format()
    );

    if let Some(path) = &args.output {
        write_archive_json(archive, path)?;
        info!("archive written to {}", path.display());
    }
    if let Some(path) = &args.report {
        save_archive(archive, &algorithm.problem, path)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
