//! Insertion sort.
//!
//! The bar sits after the outer index `i` for every frame of round `i`,
//! including the swaps made by the inner scan further left.

use super::Transition;
use crate::recorder::StepRecorder;
use crate::step::StepDescriptor;
use crate::working::WorkingArray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
    Start,
    /// Round `i` begins; `i` ranges over `1..n`.
    Enter { i: usize },
    /// Compare positions `j` and `j + 1` while walking left.
    Compare { i: usize, j: usize },
    /// The scan walked past index 0.
    Exhausted { i: usize },
    Finish,
    Done,
}

fn record_boundary(array: &WorkingArray, recorder: &mut StepRecorder, index: usize) {
    recorder.record(StepDescriptor::boundary(array.snapshot(), index));
}

impl Transition for Phase {
    const START: Self = Self::Start;

    fn is_done(self) -> bool {
        self == Self::Done
    }

    fn advance(self, array: &mut WorkingArray, recorder: &mut StepRecorder) -> Self {
        let n = array.len();

        match self {
            Self::Start => {
                // Two fixed opening frames: the one-element sorted prefix, then
                // the bar moved onto the second element.
                record_boundary(array, recorder, 0);
                record_boundary(array, recorder, 1);
                Self::Enter { i: 1 }
            }
            Self::Enter { i } if i >= n => Self::Finish,
            Self::Enter { i } => {
                record_boundary(array, recorder, i);
                Self::Compare { i, j: i - 1 }
            }
            Self::Compare { i, j } => {
                if array.precedes(j + 1, j) {
                    array.swap(j, j + 1);
                    let step = StepDescriptor::boundary(array.snapshot(), i).exchanged(j + 1, j);
                    recorder.record(step);
                    match j.checked_sub(1) {
                        Some(j) => Self::Compare { i, j },
                        None => Self::Exhausted { i },
                    }
                } else {
                    record_boundary(array, recorder, i);
                    array.finish_round();
                    Self::Enter { i: i + 1 }
                }
            }
            Self::Exhausted { i } => {
                record_boundary(array, recorder, i);
                array.finish_round();
                Self::Enter { i: i + 1 }
            }
            Self::Finish => {
                record_boundary(array, recorder, n - 1);
                Self::Done
            }
            Self::Done => Self::Done,
        }
    }
}
