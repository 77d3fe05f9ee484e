//! The finished trace of one run.

use crate::step::StepDescriptor;
use serde::Serialize;
use sortproof_types::{Algorithm, Order, Token};

/// Counters gathered while the engine ran.
///
/// `rounds` counts outer iterations: boundary positions for insertion and
/// selection, passes for bubble sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub rounds: usize,
}

/// Ordered, de-duplicated steps produced by one run, plus run metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSequence {
    algorithm: Algorithm,
    order: Order,
    stats: RunStats,
    steps: Vec<StepDescriptor>,
}

impl StepSequence {
    pub(crate) fn new(
        algorithm: Algorithm,
        order: Order,
        stats: RunStats,
        steps: Vec<StepDescriptor>,
    ) -> Self {
        Self {
            algorithm,
            order,
            stats,
            steps,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    #[must_use]
    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Token order shown by the last step, i.e. the sorted result.
    #[must_use]
    pub fn final_tokens(&self) -> &[Token] {
        match self.steps.last() {
            Some(step) => step.tokens(),
            None => &[],
        }
    }

    /// Canonical text of every step, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<StepDescriptor> {
        self.steps
    }
}
