//! Neighborhood operators for the MOALNS search.
//!
//! Every operator works copy-on-write: it returns a fresh [`Solution`] built
//! from copied route containers and never edits its input. Degenerate
//! applications (too few routes, routes too short) return an unchanged copy.
//! Only second-echelon routes are touched.

pub mod merge;
pub mod relocate;
pub mod split;
pub mod swap;

use crate::error::{ConfigurationError, Result};
use crate::solution::Solution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The available neighborhood operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Exchange one customer between two routes
    Swap,
    /// Cut one route into a prefix route and a suffix route
    Split,
    /// Move one customer from one route into another
    Relocate,
    /// Append one route onto another
    Merge,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Swap,
        Operator::Split,
        Operator::Relocate,
        Operator::Merge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Swap => "swap",
            Operator::Split => "split",
            Operator::Relocate => "relocate",
            Operator::Merge => "merge",
        }
    }

    /// Produce a candidate neighbor of `solution`.
    pub fn apply<R: Rng + ?Sized>(&self, solution: &Solution, rng: &mut R) -> Solution {
        match self {
            Operator::Swap => swap::swap(solution, rng),
            Operator::Split => split::split(solution, rng),
            Operator::Relocate => relocate::relocate(solution, rng),
            Operator::Merge => merge::merge(solution, rng),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigurationError::UnknownOperator(s.to_string()))
    }
}

/// Apply an operator given by name.
pub fn apply_operator<R: Rng + ?Sized>(
    solution: &Solution,
    operator: &str,
    rng: &mut R,
) -> Result<Solution> {
    Ok(operator.parse::<Operator>()?.apply(solution, rng))
}

/// Pick two distinct route indices uniformly at random.
pub(crate) fn pick_two_routes<R: Rng + ?Sized>(
    route_count: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if route_count < 2 {
        return None;
    }
    let picked = rand::seq::index::sample(rng, route_count, 2);
    Some((picked.index(0), picked.index(1)))
}
