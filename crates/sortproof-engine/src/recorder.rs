//! Append-only step recorder with consecutive de-duplication.

use crate::step::StepDescriptor;
use tracing::trace;

/// Collects the frames of one run.
///
/// A frame is appended only when its canonical text differs from the
/// frame recorded just before it. Highlighting is not part of that text, so
/// two frames that differ only in color collapse into the first one.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<StepDescriptor>,
    /// Canonical text of the last appended step.
    last_text: Option<String>,
}

impl StepRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `step` unless it renders identically to the previous one.
    ///
    /// Returns `true` if the step was appended.
    pub fn record(&mut self, step: StepDescriptor) -> bool {
        let text = step.to_string();
        if self.last_text.as_deref() == Some(text.as_str()) {
            trace!(%text, "collapsed duplicate step");
            return false;
        }

        trace!(index = self.steps.len(), %text, "recorded step");
        self.steps.push(step);
        self.last_text = Some(text);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    /// Consumes the recorder, returning the steps in recording order.
    #[must_use]
    pub fn into_steps(self) -> Vec<StepDescriptor> {
        self.steps
    }
}
