//! Operator selection: uniform (default) or adaptive roulette weighting.

use crate::error::{ConfigurationError, Result};
use crate::operators::Operator;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_WEIGHT: f64 = 0.1;
const ADMISSION_REWARD: f64 = 1.0;

/// How the next operator is drawn from the operator set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Every operator is equally likely, weights never change
    Uniform,
    /// Roulette-wheel selection. After every `segment_length` applications
    /// each weight moves towards the operator's average reward by
    /// `reaction_factor`.
    Adaptive {
        reaction_factor: f64,
        segment_length: usize,
    },
}

impl SelectionStrategy {
    pub fn adaptive() -> Self {
        SelectionStrategy::Adaptive {
            reaction_factor: 0.2,
            segment_length: 25,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperatorWeight {
    pub operator: Operator,
    pub weight: f64,
    /// Applications over the whole run
    pub applications: usize,
    /// Candidates admitted to the archive over the whole run
    pub admissions: usize,
    segment_score: f64,
    segment_applications: usize,
}

impl OperatorWeight {
    fn new(operator: Operator) -> Self {
        OperatorWeight {
            operator,
            weight: 1.0,
            applications: 0,
            admissions: 0,
            segment_score: 0.0,
            segment_applications: 0,
        }
    }

    fn update_weight(&mut self, reaction_factor: f64) {
        let new_weight = if self.segment_applications == 0 {
            (1.0 - reaction_factor) * self.weight
        } else {
            (1.0 - reaction_factor) * self.weight
                + reaction_factor * self.segment_score / self.segment_applications as f64
        };
        self.weight = new_weight.max(MIN_WEIGHT);
        self.segment_score = 0.0;
        self.segment_applications = 0;
    }
}

/// Draws operators and keeps their usage statistics.
#[derive(Debug, Clone)]
pub struct OperatorSelector {
    strategy: SelectionStrategy,
    weights: Vec<OperatorWeight>,
    segment_applications: usize,
}

impl OperatorSelector {
    pub fn new(operators: &[Operator], strategy: SelectionStrategy) -> Result<Self> {
        if operators.is_empty() {
            return Err(ConfigurationError::EmptyOperatorSet);
        }
        Ok(OperatorSelector {
            strategy,
            weights: operators.iter().copied().map(OperatorWeight::new).collect(),
            segment_applications: 0,
        })
    }

    /// Draw the operator for the next search step.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        match self.strategy {
            SelectionStrategy::Uniform => {
                self.weights[rng.gen_range(0..self.weights.len())].operator
            }
            SelectionStrategy::Adaptive { .. } => self
                .weights
                .choose_weighted(rng, |w| w.weight)
                .map(|w| w.operator)
                .unwrap_or(self.weights[0].operator),
        }
    }

    /// Record the outcome of one application of `operator`.
    pub fn record(&mut self, operator: Operator, admitted: bool) {
        if let Some(entry) = self.weights.iter_mut().find(|w| w.operator == operator) {
            entry.applications += 1;
            entry.segment_applications += 1;
            if admitted {
                entry.admissions += 1;
                entry.segment_score += ADMISSION_REWARD;
            }
        }

        if let SelectionStrategy::Adaptive {
            reaction_factor,
            segment_length,
        } = self.strategy
        {
            self.segment_applications += 1;
            if self.segment_applications >= segment_length {
                for entry in self.weights.iter_mut() {
                    entry.update_weight(reaction_factor);
                }
                self.segment_applications = 0;
            }
        }
    }

    pub fn weights(&self) -> &[OperatorWeight] {
        &self.weights
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }
}

impl fmt::Display for OperatorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>8} {:>12} {:>12}",
            "Operator", "Weight", "Applied", "Admitted"
        )?;
        writeln!(f, "{:-<47}", "")?;
        for w in &self.weights {
            writeln!(
                f,
                "{:<12} {:>8.4} {:>12} {:>12}",
                w.operator.name(),
                w.weight,
                w.applications,
                w.admissions
            )?;
        }
        Ok(())
    }
}
