//! Hard-constraint checks: vehicle capacity, and optionally truck capacity
//! and customer time windows.

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::{Route, Solution};
use log::trace;
use serde::{Deserialize, Serialize};

/// Whether customer time windows take part in feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindowPolicy {
    Ignore,
    /// Vehicles travel at a constant `speed` and spend `service_time` at
    /// every customer.
    Enforce { speed: f64, service_time: f64 },
}

/// Validates capacity and time-window constraints of a solution.
pub struct FeasibilityChecker<'a> {
    problem: &'a Problem,
    time_windows: TimeWindowPolicy,
    check_truck_capacity: bool,
}

impl<'a> FeasibilityChecker<'a> {
    /// Create a checker that only verifies vehicle capacity.
    pub fn new(problem: &'a Problem) -> Self {
        FeasibilityChecker {
            problem,
            time_windows: TimeWindowPolicy::Ignore,
            check_truck_capacity: false,
        }
    }

    pub fn with_time_windows(mut self, policy: TimeWindowPolicy) -> Self {
        self.time_windows = policy;
        self
    }

    pub fn with_truck_capacity_check(mut self, enabled: bool) -> Self {
        self.check_truck_capacity = enabled;
        self
    }

    /// Check all enabled constraints.
    pub fn is_feasible(&self, solution: &Solution) -> Result<bool> {
        for route in &solution.second_echelon {
            let load = route.load(self.problem)?;
            if load as f64 > self.problem.vehicle_capacity {
                trace!("route {} exceeds vehicle capacity (load {})", route, load);
                return Ok(false);
            }
        }

        if self.check_truck_capacity && !self.truck_capacity_respected(solution)? {
            return Ok(false);
        }

        if let TimeWindowPolicy::Enforce {
            speed,
            service_time,
        } = self.time_windows
        {
            for route in &solution.second_echelon {
                if !self.schedule_exists(route, speed, service_time)? {
                    trace!("route {} violates a time window", route);
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Total second-echelon demand must fit on the trucks dispatched by the
    /// non-empty first-echelon routes.
    fn truck_capacity_respected(&self, solution: &Solution) -> Result<bool> {
        let mut demand = 0;
        for route in &solution.second_echelon {
            demand += route.load(self.problem)?;
        }
        let trucks = solution
            .first_echelon
            .iter()
            .filter(|r| !r.is_empty())
            .count();
        Ok(demand as f64 <= trucks as f64 * self.problem.truck_capacity)
    }

    /// Propagate arrival times along the route. The vehicle can leave the
    /// satellite whenever it wants, so it starts serving the first customer
    /// when its window opens; early arrivals wait.
    fn schedule_exists(&self, route: &Route, speed: f64, service_time: f64) -> Result<bool> {
        let mut clock: Option<f64> = None;
        let mut previous: Option<&str> = None;

        for id in &route.nodes {
            let node = self.problem.node(id)?;
            let Some(window) = node.time_window() else {
                continue;
            };

            let arrival = match (clock, previous) {
                (Some(departure), Some(prev)) => {
                    departure + self.problem.distance(prev, id)? / speed
                }
                _ => window.earliest,
            };
            let start = arrival.max(window.earliest);
            if start > window.latest {
                return Ok(false);
            }

            clock = Some(start + service_time);
            previous = Some(id.as_str());
        }

        Ok(true)
    }
}
