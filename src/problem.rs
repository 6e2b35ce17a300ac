//! Problem definition and data structures for the two-echelon VRP with time windows.

use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Delivery time window of a customer, `[earliest, latest]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub earliest: f64,
    pub latest: f64,
}

impl TimeWindow {
    pub fn new(earliest: f64, latest: f64) -> Self {
        TimeWindow { earliest, latest }
    }

    /// Check whether a service starting at `time` lies inside the window.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.earliest && time <= self.latest
    }
}

/// The role a node plays in the two-echelon network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    DistributionCenter,
    Satellite,
    Customer { demand: u32, time_window: TimeWindow },
}

/// A location of the network (DC, satellite or customer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub role: NodeRole,
}

impl Node {
    /// Create a new node.
    pub fn new(id: impl Into<String>, x: f64, y: f64, role: NodeRole) -> Self {
        Node {
            id: id.into(),
            x,
            y,
            role,
        }
    }

    /// Create a distribution center.
    pub fn distribution_center(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node::new(id, x, y, NodeRole::DistributionCenter)
    }

    /// Create a satellite.
    pub fn satellite(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node::new(id, x, y, NodeRole::Satellite)
    }

    /// Create a customer with its demand and delivery window.
    pub fn customer(
        id: impl Into<String>,
        x: f64,
        y: f64,
        demand: u32,
        time_window: TimeWindow,
    ) -> Self {
        Node::new(
            id,
            x,
            y,
            NodeRole::Customer {
                demand,
                time_window,
            },
        )
    }

    /// Calculate the Euclidean distance between two nodes.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.role, NodeRole::Customer { .. })
    }

    pub fn is_satellite(&self) -> bool {
        matches!(self.role, NodeRole::Satellite)
    }

    pub fn is_distribution_center(&self) -> bool {
        matches!(self.role, NodeRole::DistributionCenter)
    }

    /// Demand of the node; zero for anything but a customer.
    pub fn demand(&self) -> u32 {
        match self.role {
            NodeRole::Customer { demand, .. } => demand,
            _ => 0,
        }
    }

    pub fn time_window(&self) -> Option<&TimeWindow> {
        match &self.role {
            NodeRole::Customer { time_window, .. } => Some(time_window),
            _ => None,
        }
    }
}

/// Cost per unit of distance for each echelon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRates {
    /// Second-echelon vehicles (satellite to customers), `U_v`
    pub vehicle: f64,
    /// First-echelon trucks (DC to satellite), `U_s`
    pub truck: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        CostRates {
            vehicle: 10.0,
            truck: 20.0,
        }
    }
}

/// A two-echelon VRPTW instance. Immutable once built.
#[derive(Debug, Clone)]
pub struct Problem {
    pub name: String,
    pub nodes: Vec<Node>,
    pub vehicle_capacity: f64,
    pub truck_capacity: f64,
    pub cost_rates: CostRates,
    index: HashMap<String, usize>,
    distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create and validate a new problem.
    pub fn new(
        name: impl Into<String>,
        nodes: Vec<Node>,
        vehicle_capacity: f64,
        truck_capacity: f64,
        cost_rates: CostRates,
    ) -> Result<Self> {
        check_capacity("vehicle", vehicle_capacity)?;
        check_capacity("truck", truck_capacity)?;

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(ConfigurationError::DuplicateNode(node.id.clone()));
            }
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(ConfigurationError::InvalidCoordinate {
                    id: node.id.clone(),
                    x: node.x,
                    y: node.y,
                });
            }

            if let NodeRole::Customer {
                demand,
                time_window,
            } = &node.role
            {
                if *demand == 0 {
                    return Err(ConfigurationError::InvalidDemand(node.id.clone()));
                }
                // Also rejects NaN bounds.
                if !(time_window.earliest <= time_window.latest) {
                    return Err(ConfigurationError::InvalidTimeWindow {
                        id: node.id.clone(),
                        earliest: time_window.earliest,
                        latest: time_window.latest,
                    });
                }
            }
        }

        let distance_matrix = Self::compute_distance_matrix(&nodes);

        Ok(Problem {
            name: name.into(),
            nodes,
            vehicle_capacity,
            truck_capacity,
            cost_rates,
            index,
            distance_matrix,
        })
    }

    /// Position of a node in `nodes`.
    pub fn node_index(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownNode(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: &str) -> Result<&Node> {
        Ok(&self.nodes[self.node_index(id)?])
    }

    /// Euclidean distance between two nodes given by identifier.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64> {
        let i = self.node_index(from)?;
        let j = self.node_index(to)?;
        Ok(self.distance_matrix[i][j])
    }

    /// Distance between two node indices.
    pub(crate) fn distance_by_index(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Demand of a node; zero for DCs and satellites.
    pub fn demand(&self, id: &str) -> Result<u32> {
        Ok(self.node(id)?.demand())
    }

    pub fn customers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_customer())
    }

    pub fn satellites(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_satellite())
    }

    pub fn distribution_centers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_distribution_center())
    }

    /// Get the number of customers.
    pub fn customer_count(&self) -> usize {
        self.customers().count()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> u64 {
        self.customers().map(|c| c.demand() as u64).sum()
    }

    /// The satellite closest to the given node, if any satellite exists.
    pub fn nearest_satellite(&self, from: &str) -> Result<Option<&Node>> {
        let origin = self.node_index(from)?;
        Ok(self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_satellite())
            .min_by(|(a, _), (b, _)| {
                self.distance_by_index(origin, *a)
                    .total_cmp(&self.distance_by_index(origin, *b))
            })
            .map(|(_, n)| n))
    }

    /// Generate the full distance matrix for all nodes.
    fn compute_distance_matrix(nodes: &[Node]) -> Vec<Vec<f64>> {
        let n = nodes.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = nodes[i].distance(&nodes[j]);
                }
            }
        }

        matrix
    }
}

fn check_capacity(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidCapacity { name, value })
    }
}
