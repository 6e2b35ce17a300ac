//! Solution representation for the two-echelon VRP.

use crate::error::{ConfigurationError, Result};
use crate::problem::Problem;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered sequence of node identifiers visited in order.
///
/// First-echelon routes run from a DC to a satellite. Second-echelon routes
/// only list customers; the satellite they leave from and return to is
/// implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    pub nodes: Vec<String>,
}

impl Route {
    /// Create a new, empty route.
    pub fn new() -> Self {
        Route { nodes: Vec::new() }
    }

    /// Create a route from a list of identifiers.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        Route {
            nodes: ids.iter().map(|id| id.as_ref().to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the route is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of consecutive-node distances along the sequence. Empty and
    /// single-node routes have length zero.
    pub fn distance(&self, problem: &Problem) -> Result<f64> {
        let mut total = 0.0;
        for (from, to) in self.nodes.iter().tuple_windows() {
            total += problem.distance(from, to)?;
        }
        Ok(total)
    }

    /// Total customer demand carried along the route.
    pub fn load(&self, problem: &Problem) -> Result<u64> {
        let mut load = 0;
        for id in &self.nodes {
            load += problem.demand(id)? as u64;
        }
        Ok(load)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.nodes.iter().join(" -> "))
    }
}

/// A complete two-echelon plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub first_echelon: Vec<Route>,
    pub second_echelon: Vec<Route>,
}

impl Solution {
    pub fn new(first_echelon: Vec<Route>, second_echelon: Vec<Route>) -> Self {
        Solution {
            first_echelon,
            second_echelon,
        }
    }

    /// Build a solution from nested identifier lists.
    pub fn from_ids<S: AsRef<str>>(first_echelon: &[Vec<S>], second_echelon: &[Vec<S>]) -> Self {
        Solution {
            first_echelon: first_echelon.iter().map(|r| Route::from_ids(r)).collect(),
            second_echelon: second_echelon.iter().map(|r| Route::from_ids(r)).collect(),
        }
    }

    /// Get the number of second-echelon routes (one vehicle each).
    pub fn vehicle_count(&self) -> usize {
        self.second_echelon.len()
    }

    /// Check that every referenced node exists, that first-echelon
    /// routes run from a DC to a satellite and that vehicle routes visit
    /// customers only.
    pub fn validate(&self, problem: &Problem) -> Result<()> {
        for route in self.first_echelon.iter().chain(&self.second_echelon) {
            for id in &route.nodes {
                problem.node_index(id)?;
            }
        }

        for route in &self.first_echelon {
            let (Some(first), Some(last)) = (route.nodes.first(), route.nodes.last()) else {
                continue;
            };
            if !problem.node(first)?.is_distribution_center() {
                return Err(invalid_route(route, "does not start at a distribution center"));
            }
            if !problem.node(last)?.is_satellite() {
                return Err(invalid_route(route, "does not end at a satellite"));
            }
        }

        for route in &self.second_echelon {
            for id in &route.nodes {
                if !problem.node(id)?.is_customer() {
                    return Err(invalid_route(route, "visits a node that is not a customer"));
                }
            }
        }

        Ok(())
    }

    /// Whether every customer appears in exactly one second-echelon
    /// position. Not enforced by the search, only reported.
    pub fn covers_all_customers(&self, problem: &Problem) -> bool {
        let mut seen = HashSet::new();
        for id in self.second_echelon.iter().flat_map(|r| &r.nodes) {
            if !seen.insert(id.as_str()) {
                return false;
            }
        }
        problem.customers().all(|c| seen.contains(c.id.as_str()))
    }
}

fn invalid_route(route: &Route, reason: &str) -> ConfigurationError {
    ConfigurationError::InvalidRoute {
        route: route.nodes.clone(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first echelon: {{{}}}, second echelon: {{{}}}",
            self.first_echelon.iter().join(", "),
            self.second_echelon.iter().join(", ")
        )
    }
}

/// Objective values of a solution, all minimized. Compared component-wise
/// in the fixed order (cost, time, vehicles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveVector {
    pub cost: f64,
    pub time: f64,
    pub vehicles: usize,
}

impl ObjectiveVector {
    pub fn new(cost: f64, time: f64, vehicles: usize) -> Self {
        ObjectiveVector {
            cost,
            time,
            vehicles,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.cost, self.time, self.vehicles as f64]
    }
}

impl fmt::Display for ObjectiveVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(cost: {:.2}, time: {:.2}, vehicles: {})",
            self.cost, self.time, self.vehicles
        )
    }
}
