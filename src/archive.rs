//! Pareto dominance and maintenance of the non-dominated archive.

use crate::solution::{ObjectiveVector, Solution};
use serde::{Deserialize, Serialize};

/// True iff `a` is no worse than `b` on every objective and strictly better
/// on at least one. Equal vectors do not dominate each other.
pub fn dominates(a: &ObjectiveVector, b: &ObjectiveVector) -> bool {
    let no_worse = a.cost <= b.cost && a.time <= b.time && a.vehicles <= b.vehicles;
    let better = a.cost < b.cost || a.time < b.time || a.vehicles < b.vehicles;
    no_worse && better
}

/// A solution together with its evaluated objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub solution: Solution,
    pub objectives: ObjectiveVector,
}

impl ArchiveEntry {
    pub fn new(solution: Solution, objectives: ObjectiveVector) -> Self {
        ArchiveEntry {
            solution,
            objectives,
        }
    }

    pub fn dominates(&self, other: &ArchiveEntry) -> bool {
        dominates(&self.objectives, &other.objectives)
    }
}

/// Keep the members of `population` that no other member dominates.
///
/// Pairwise O(n²) comparison; the relative order of survivors is preserved.
pub fn non_dominated_sort(population: &[ArchiveEntry]) -> Vec<ArchiveEntry> {
    population
        .iter()
        .filter(|candidate| !population.iter().any(|other| other.dominates(candidate)))
        .cloned()
        .collect()
}

/// The set of mutually non-dominated solutions found so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Archive {
    entries: Vec<ArchiveEntry>,
}

impl Archive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Archive {
            entries: Vec::new(),
        }
    }

    /// Offer a candidate. The archive is rebuilt as the non-dominated subset
    /// of its members plus the candidate. Returns whether the candidate is a
    /// member afterwards. A solution already present is not added twice.
    pub fn insert(&mut self, candidate: ArchiveEntry) -> bool {
        if self
            .entries
            .iter()
            .any(|e| e.solution == candidate.solution)
        {
            return false;
        }

        let admitted = !self.entries.iter().any(|e| e.dominates(&candidate));

        let mut pool = std::mem::take(&mut self.entries);
        pool.push(candidate);
        self.entries = non_dominated_sort(&pool);

        admitted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchiveEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<ArchiveEntry> {
        self.entries
    }
}
