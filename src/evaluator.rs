//! Objective evaluation of two-echelon solutions.

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::{ObjectiveVector, Solution};
use serde::{Deserialize, Serialize};

/// How the time objective is measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeObjective {
    /// Number of stops over all second-echelon routes
    StopCount,
    /// Second-echelon distance divided by a constant speed
    TravelTime { speed: f64 },
}

/// Computes the objective vector of a solution against a problem.
pub struct Evaluator<'a> {
    problem: &'a Problem,
    time_objective: TimeObjective,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator using the stop-count time proxy.
    pub fn new(problem: &'a Problem) -> Self {
        Evaluator {
            problem,
            time_objective: TimeObjective::StopCount,
        }
    }

    pub fn with_time_objective(mut self, time_objective: TimeObjective) -> Self {
        self.time_objective = time_objective;
        self
    }

    pub fn problem(&self) -> &Problem {
        self.problem
    }

    /// Evaluate cost, time and vehicle count of a solution.
    ///
    /// Cost weighs first-echelon distance with the truck rate and
    /// second-echelon distance with the vehicle rate. Fails only if a route
    /// references an unknown node.
    pub fn evaluate(&self, solution: &Solution) -> Result<ObjectiveVector> {
        let rates = self.problem.cost_rates;
        let mut cost = 0.0;

        for route in &solution.first_echelon {
            cost += route.distance(self.problem)? * rates.truck;
        }

        let mut second_echelon_distance = 0.0;
        for route in &solution.second_echelon {
            second_echelon_distance += route.distance(self.problem)?;
        }
        cost += second_echelon_distance * rates.vehicle;

        let time = match self.time_objective {
            TimeObjective::StopCount => solution
                .second_echelon
                .iter()
                .map(|r| r.len())
                .sum::<usize>() as f64,
            TimeObjective::TravelTime { speed } => second_echelon_distance / speed,
        };

        Ok(ObjectiveVector::new(cost, time, solution.vehicle_count()))
    }
}
