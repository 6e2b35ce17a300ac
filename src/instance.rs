//! Instance data: the built-in reference instance and JSON loading.

use crate::error::Result;
use crate::problem::{CostRates, Node, Problem, TimeWindow};
use crate::solution::Solution;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// On-disk description of an instance.
///
/// ```json
/// {
///   "name": "small",
///   "vehicle_capacity": 10,
///   "truck_capacity": 15,
///   "cost_rates": { "vehicle": 10, "truck": 20 },
///   "nodes": [
///     { "id": "DC1", "x": 0, "y": 0, "role": "distribution_center" },
///     { "id": "S1", "x": 5, "y": 5, "role": "satellite" },
///     { "id": "C1", "x": 2, "y": 3,
///       "role": { "customer": { "demand": 2, "time_window": { "earliest": 10, "latest": 12 } } } }
///   ],
///   "seed_solution": { "first_echelon": [["DC1", "S1"]], "second_echelon": [["C1"]] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceData {
    pub name: String,
    pub nodes: Vec<Node>,
    pub vehicle_capacity: f64,
    pub truck_capacity: f64,
    #[serde(default)]
    pub cost_rates: CostRates,
    #[serde(default)]
    pub seed_solution: Option<Solution>,
}

impl InstanceData {
    /// Validate the data into a problem, returning the optional seed
    /// solution alongside.
    pub fn into_problem(self) -> Result<(Problem, Option<Solution>)> {
        let problem = Problem::new(
            self.name,
            self.nodes,
            self.vehicle_capacity,
            self.truck_capacity,
            self.cost_rates,
        )?;
        Ok((problem, self.seed_solution))
    }
}

/// Load an instance from a JSON file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<(Problem, Option<Solution>)> {
    let file = File::open(path)?;
    let data: InstanceData = serde_json::from_reader(BufReader::new(file))?;
    data.into_problem()
}

/// The small reference instance: two DCs, one satellite, four customers.
pub fn reference_problem() -> Result<Problem> {
    let nodes = vec![
        Node::distribution_center("DC1", 0.0, 0.0),
        Node::distribution_center("DC2", 10.0, 10.0),
        Node::satellite("S1", 5.0, 5.0),
        Node::customer("C1", 2.0, 3.0, 2, TimeWindow::new(10.0, 12.0)),
        Node::customer("C2", 3.0, 7.0, 3, TimeWindow::new(11.0, 13.0)),
        Node::customer("C3", 6.0, 2.0, 4, TimeWindow::new(14.0, 16.0)),
        Node::customer("C4", 8.0, 9.0, 5, TimeWindow::new(15.0, 17.0)),
    ];

    Problem::new("reference", nodes, 10.0, 15.0, CostRates::default())
}

/// Fixed seed routes for the reference instance.
pub fn reference_seed_solution() -> Solution {
    Solution::from_ids(
        &[vec!["DC1", "S1"], vec!["DC2", "S1"]],
        &[vec!["C1", "C2"], vec!["C3", "C4"]],
    )
}
