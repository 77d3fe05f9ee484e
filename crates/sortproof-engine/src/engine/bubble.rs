//! Bubble sort.
//!
//! Every pass visits all `n` positions so the cursor sweeps the full row,
//! but only the first `n - 1 - pass` positions compare. A frame is recorded
//! when the cursor arrives, before its comparison, and the last frame of a
//! pass carries the pass number. The pass that finds nothing to swap is
//! recorded in full and ends the run.

use super::Transition;
use crate::recorder::StepRecorder;
use crate::step::StepDescriptor;
use crate::working::WorkingArray;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
    Sweep {
        pass: usize,
        j: usize,
        swapped: bool,
    },
    Done,
}

impl Transition for Phase {
    const START: Self = Self::Sweep {
        pass: 0,
        j: 0,
        swapped: false,
    };

    fn is_done(self) -> bool {
        self == Self::Done
    }

    fn advance(self, array: &mut WorkingArray, recorder: &mut StepRecorder) -> Self {
        let n = array.len();

        let Self::Sweep { pass, j, swapped } = self else {
            return Self::Done;
        };

        if pass >= n {
            return Self::Done;
        }

        if j >= n {
            array.finish_round();
            return if swapped {
                Self::Sweep {
                    pass: pass + 1,
                    j: 0,
                    swapped: false,
                }
            } else {
                Self::Done
            };
        }

        let mut step = StepDescriptor::cursor(array.snapshot(), j);
        if j == n - 1 {
            step = step.labeled(pass + 1);
        }
        recorder.record(step);

        let mut swapped = swapped;
        if j + 1 + pass < n && array.precedes(j + 1, j) {
            array.swap(j, j + 1);
            swapped = true;
        }

        Self::Sweep {
            pass,
            j: j + 1,
            swapped,
        }
    }
}
