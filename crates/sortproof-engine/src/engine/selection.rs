//! Selection sort.
//!
//! The candidate search never moves the bar. Each round ends with at most
//! one swap, shown with the displaced token as outgoing and the selected
//! extremal token as incoming.

use super::Transition;
use crate::recorder::StepRecorder;
use crate::step::StepDescriptor;
use crate::working::WorkingArray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
    Start,
    /// Round `i` begins; `i` ranges over `0..n-1`.
    Enter { i: usize },
    /// Compare position `j` against the running candidate `min`.
    Scan { i: usize, j: usize, min: usize },
    /// Scan finished; swap the candidate onto the bar if needed.
    Settle { i: usize, min: usize },
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
                record_boundary(array, recorder, 0);
                Self::Enter { i: 0 }
            }
            Self::Enter { i } if i + 1 >= n => Self::Finish,
            Self::Enter { i } => {
                record_boundary(array, recorder, i);
                Self::Scan {
                    i,
                    j: i + 1,
                    min: i,
                }
            }
            Self::Scan { i, j, min } if j >= n => Self::Settle { i, min },
            Self::Scan { i, j, min } => {
                let min = if array.precedes(j, min) { j } else { min };
                record_boundary(array, recorder, i);
                Self::Scan { i, j: j + 1, min }
            }
            Self::Settle { i, min } => {
                if min != i {
                    array.swap(i, min);
                    let step = StepDescriptor::boundary(array.snapshot(), i).exchanged(min, i);
                    recorder.record(step);
                } else {
                    record_boundary(array, recorder, i);
                }
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
