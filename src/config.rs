//! Configuration parameters for the MOALNS search.

use crate::error::{ConfigurationError, Result};
use crate::evaluator::TimeObjective;
use crate::feasibility::TimeWindowPolicy;
use crate::operators::Operator;
use crate::selector::SelectionStrategy;
use serde::{Deserialize, Serialize};

/// Configuration settings for a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fixed iteration budget
    pub iterations: usize,
    /// Number of starting solutions explored every iteration
    pub population_size: usize,
    /// Seed for the random number generator; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Neighborhood operators to choose from
    pub operators: Vec<Operator>,
    /// How the operator is picked at every step
    pub selection: SelectionStrategy,
    /// Whether customer time windows gate feasibility
    pub time_windows: TimeWindowPolicy,
    /// Whether first-echelon truck capacity gates feasibility
    pub check_truck_capacity: bool,
    /// How the time objective is measured
    pub time_objective: TimeObjective,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iterations: 50,
            population_size: 5,
            seed: None,
            operators: vec![Operator::Swap, Operator::Split],
            selection: SelectionStrategy::Uniform,
            time_windows: TimeWindowPolicy::Ignore,
            check_truck_capacity: false,
            time_objective: TimeObjective::StopCount,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the operator set.
    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    /// Set the operator selection strategy.
    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    /// Set the time-window policy.
    pub fn with_time_windows(mut self, policy: TimeWindowPolicy) -> Self {
        self.time_windows = policy;
        self
    }

    /// Enable or disable the truck capacity check.
    pub fn with_truck_capacity_check(mut self, enabled: bool) -> Self {
        self.check_truck_capacity = enabled;
        self
    }

    /// Set the time objective.
    pub fn with_time_objective(mut self, objective: TimeObjective) -> Self {
        self.time_objective = objective;
        self
    }

    /// Reject parameter combinations the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "population size must be at least 1".to_string(),
            ));
        }
        if self.operators.is_empty() {
            return Err(ConfigurationError::EmptyOperatorSet);
        }
        if let SelectionStrategy::Adaptive {
            reaction_factor,
            segment_length,
        } = self.selection
        {
            if !(0.0..=1.0).contains(&reaction_factor) {
                return Err(ConfigurationError::InvalidParameter(format!(
                    "reaction factor must lie in [0, 1], got {reaction_factor}"
                )));
            }
            if segment_length == 0 {
                return Err(ConfigurationError::InvalidParameter(
                    "segment length must be at least 1".to_string(),
                ));
            }
        }
        if let TimeWindowPolicy::Enforce {
            speed,
            service_time,
        } = self.time_windows
        {
            check_speed(speed)?;
            if !(service_time >= 0.0) {
                return Err(ConfigurationError::InvalidParameter(format!(
                    "service time must be non-negative, got {service_time}"
                )));
            }
        }
        if let TimeObjective::TravelTime { speed } = self.time_objective {
            check_speed(speed)?;
        }
        Ok(())
    }
}

fn check_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidParameter(format!(
            "speed must be positive, got {speed}"
        )))
    }
}
