//! # MOALNS-2EVRP
//!
//! Multi-objective adaptive large neighborhood search for the two-echelon
//! vehicle routing problem with time windows (2E-VRPTW).
//!
//! Trucks carry goods from distribution centers to satellites, vehicles carry
//! them from satellites to customers. The search minimizes three objectives
//! at once (transportation cost, delivery time, number of vehicles) and
//! returns the archive of mutually non-dominated plans it found.
//!
//! ```no_run
//! use moalns_2evrp::config::Config;
//! use moalns_2evrp::instance::{reference_problem, reference_seed_solution};
//! use moalns_2evrp::MoalnsAlgorithm;
//!
//! let problem = reference_problem()?;
//! let mut algorithm = MoalnsAlgorithm::new(problem, Config::new().with_seed(7))?
//!     .with_seed_solution(reference_seed_solution());
//! for entry in algorithm.run()?.iter() {
//!     println!("{} {}", entry.solution, entry.objectives);
//! }
//! # Ok::<(), moalns_2evrp::error::ConfigurationError>(())
//! ```

pub mod archive;
pub mod config;
pub mod construction;
pub mod error;
pub mod evaluator;
pub mod feasibility;
pub mod instance;
pub mod operators;
pub mod problem;
pub mod selector;
pub mod solution;
pub mod utils;

use crate::archive::{Archive, ArchiveEntry};
use crate::config::Config;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::feasibility::FeasibilityChecker;
use crate::problem::Problem;
use crate::selector::OperatorSelector;
use crate::solution::Solution;
use crate::utils::SearchStatistics;

use log::{debug, info, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The search loop: explores the neighborhood of a fixed population for a
/// fixed number of iterations and keeps every feasible candidate that is
/// not dominated in the archive.
pub struct MoalnsAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub population: Vec<Solution>,
    pub archive: Archive,
    pub selector: OperatorSelector,
    pub iterations: usize,
    pub candidates: usize,
    pub feasible_candidates: usize,
    pub admissions: usize,
    pub run_time: Duration,
    seed_solution: Option<Solution>,
    rng: ChaCha8Rng,
}

impl MoalnsAlgorithm {
    /// Create a new search for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        config.validate()?;
        let selector = OperatorSelector::new(&config.operators, config.selection)?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(MoalnsAlgorithm {
            problem,
            config,
            population: Vec::new(),
            archive: Archive::new(),
            selector,
            iterations: 0,
            candidates: 0,
            feasible_candidates: 0,
            admissions: 0,
            run_time: Duration::from_secs(0),
            seed_solution: None,
            rng,
        })
    }

    /// Start every population member from copies of `solution` instead of
    /// the construction heuristic.
    pub fn with_seed_solution(mut self, solution: Solution) -> Self {
        self.seed_solution = Some(solution);
        self
    }

    /// Build and validate the population and empty the archive.
    pub fn initialize(&mut self) -> Result<()> {
        self.population = construction::initial_population(
            &self.problem,
            self.seed_solution.as_ref(),
            self.config.population_size,
            &mut self.rng,
        )?;

        for solution in &self.population {
            solution.validate(&self.problem)?;
            if !solution.covers_all_customers(&self.problem) {
                warn!("starting solution does not serve every customer exactly once: {solution}");
            }
        }

        self.archive = Archive::new();
        self.iterations = 0;
        self.candidates = 0;
        self.feasible_candidates = 0;
        self.admissions = 0;
        Ok(())
    }

    /// Run the search for the configured iteration budget and return the
    /// archive. An empty archive is a valid outcome.
    pub fn run(&mut self) -> Result<&Archive> {
        let start_time = Instant::now();
        self.initialize()?;

        info!(
            "starting search on {} ({} customers): {} iterations, population {}",
            self.problem.name,
            self.problem.customer_count(),
            self.config.iterations,
            self.population.len()
        );

        let evaluator = Evaluator::new(&self.problem).with_time_objective(self.config.time_objective);
        let checker = FeasibilityChecker::new(&self.problem)
            .with_time_windows(self.config.time_windows)
            .with_truck_capacity_check(self.config.check_truck_capacity);

        for iteration in 0..self.config.iterations {
            for member in &self.population {
                let operator = self.selector.select(&mut self.rng);
                let candidate = operator.apply(member, &mut self.rng);
                self.candidates += 1;

                let mut admitted = false;
                if checker.is_feasible(&candidate)? {
                    self.feasible_candidates += 1;
                    let objectives = evaluator.evaluate(&candidate)?;
                    trace!("{} produced {} {}", operator, candidate, objectives);
                    admitted = self.archive.insert(ArchiveEntry::new(candidate, objectives));
                }

                if admitted {
                    self.admissions += 1;
                }
                self.selector.record(operator, admitted);
            }

            self.iterations += 1;
            debug!(
                "iteration {}: archive size {}, feasible candidates {}/{}",
                iteration + 1,
                self.archive.len(),
                self.feasible_candidates,
                self.candidates
            );
        }

        self.run_time = start_time.elapsed();
        info!(
            "search finished after {} iterations: {} non-dominated solutions",
            self.iterations,
            self.archive.len()
        );

        Ok(&self.archive)
    }

    /// Collect statistics of the last run.
    pub fn statistics(&self) -> SearchStatistics {
        SearchStatistics {
            iterations: self.iterations,
            runtime: self.run_time,
            candidates: self.candidates,
            feasible_candidates: self.feasible_candidates,
            admissions: self.admissions,
            archive_size: self.archive.len(),
            operators: self.selector.weights().to_vec(),
        }
    }
}

/// Run a complete search and take ownership of the resulting archive.
pub fn moalns(problem: Problem, config: Config, seed_solution: Option<Solution>) -> Result<Archive> {
    let mut algorithm = MoalnsAlgorithm::new(problem, config)?;
    if let Some(solution) = seed_solution {
        algorithm = algorithm.with_seed_solution(solution);
    }
    algorithm.run()?;
    Ok(algorithm.archive)
}
