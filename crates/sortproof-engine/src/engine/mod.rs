//! The instrumented sorting engines and their dispatch.
//!
//! # Architecture
//!
//! ```text
//! run_algorithm(values, order, algorithm)
//!        │
//!        ▼
//!   match algorithm ──► insertion::Phase ─┐
//!                   ──► selection::Phase ─┼─► drive(): loop { phase = phase.advance() }
//!                   ──► bubble::Phase ────┘          │              │
//!                                                    ▼              ▼
//!                                              WorkingArray    StepRecorder
//! ```
//!
//! Each engine is an explicit state value with a transition function. A
//! transition performs at most one comparison or swap and records at most
//! the frames that decision warrants; the recorder drops frames that would
//! look identical to the one before.

mod bubble;
mod insertion;
mod selection;

use crate::recorder::StepRecorder;
use crate::sequence::StepSequence;
use crate::working::WorkingArray;
use sortproof_types::{Algorithm, Order, TokenList};
use tracing::debug;

/// One engine's state space.
trait Transition: Copy {
    /// State a run starts in.
    const START: Self;

    /// Returns `true` once the run has recorded its terminal frame.
    fn is_done(self) -> bool;

    /// Performs one transition, returning the next state.
    fn advance(self, array: &mut WorkingArray, recorder: &mut StepRecorder) -> Self;
}

fn drive<P: Transition>(array: &mut WorkingArray, recorder: &mut StepRecorder) {
    let mut phase = P::START;
    while !phase.is_done() {
        phase = phase.advance(array, recorder);
    }
}

/// Runs `algorithm` over `values` and returns every recorded frame.
///
/// Each call owns a fresh working array and recorder; nothing is shared
/// between runs.
///
/// # Example
///
/// ```
/// use sortproof_engine::run_algorithm;
/// use sortproof_types::{Algorithm, Order, TokenList};
///
/// let values = TokenList::try_from(&["3", "1", "2"][..])?;
/// let trace = run_algorithm(values, Order::Ascending, Algorithm::Insertion);
///
/// assert_eq!(trace.lines().first().map(String::as_str), Some("3 |   1   2"));
/// assert_eq!(trace.lines().last().map(String::as_str), Some("1   2   3 |"));
/// # Ok::<(), sortproof_types::EmptyTokenList>(())
/// ```
#[must_use]
pub fn run_algorithm(values: TokenList, order: Order, algorithm: Algorithm) -> StepSequence {
    let mut array = WorkingArray::new(values, order);
    let mut recorder = StepRecorder::new();

    debug!(%algorithm, %order, len = array.len(), "Starting sort run");

    match algorithm {
        Algorithm::Insertion => drive::<insertion::Phase>(&mut array, &mut recorder),
        Algorithm::Selection => drive::<selection::Phase>(&mut array, &mut recorder),
        Algorithm::Bubble => drive::<bubble::Phase>(&mut array, &mut recorder),
    }

    let stats = array.stats();
    debug!(
        %algorithm,
        steps = recorder.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        rounds = stats.rounds,
        "Sort run finished"
    );

    StepSequence::new(algorithm, order, stats, recorder.into_steps())
}
