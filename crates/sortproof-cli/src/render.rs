//! Trace output: numbered text lines or a JSON document.

use serde::Serialize;
use sortproof_engine::{CellRole, Marker, RunStats, StepDescriptor, StepSequence};
use sortproof_types::{Algorithm, Order};
use std::io::{self, Write};

const BOLD_BLUE: &str = "\x1B[1;34m";
const RED: &str = "\x1B[31m";
const GREEN: &str = "\x1B[32m";
const RESET: &str = "\x1B[0m";

/// Writes a trace as a heading plus one `Step n:` line per frame.
///
/// With color on, the bar and cursor are bold blue, the exchanged pair is
/// red (outgoing) and green (incoming), and the iteration label is green.
/// The visible characters are the same either way.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn render<W: Write>(&self, trace: &StepSequence, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{} sort ({})",
            trace.algorithm().title(),
            trace.order()
        )?;
        for (n, step) in trace.steps().iter().enumerate() {
            writeln!(out, "Step {}: {}", n + 1, self.format_step(step))?;
        }
        out.flush()
    }

    fn format_step(&self, step: &StepDescriptor) -> String {
        if !self.color {
            return step.to_string();
        }

        let mut line = String::new();
        for (i, token) in step.tokens().iter().enumerate() {
            if i > 0 {
                line.push_str(step.gap());
            }
            let painted = match step.role(i) {
                CellRole::Plain => token.to_string(),
                CellRole::Outgoing => paint(token.as_str(), RED),
                CellRole::Incoming => paint(token.as_str(), GREEN),
            };
            match step.marker() {
                Marker::Boundary(b) if b == i => {
                    line.push_str(&painted);
                    line.push_str(&paint(" |", BOLD_BLUE));
                }
                Marker::Cursor(c) if c == i => {
                    line.push_str(&paint("(", BOLD_BLUE));
                    line.push_str(&painted);
                    line.push_str(&paint(")", BOLD_BLUE));
                }
                _ => line.push_str(&painted),
            }
        }
        if let Some(label) = step.label() {
            line.push_str(&paint(&label, GREEN));
        }
        line
    }
}

fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

#[derive(Serialize)]
struct JsonTrace<'a> {
    algorithm: Algorithm,
    order: Order,
    stats: RunStats,
    steps: Vec<JsonStep<'a>>,
}

#[derive(Serialize)]
struct JsonStep<'a> {
    step: usize,
    text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlighted: Vec<usize>,
    #[serde(flatten)]
    descriptor: &'a StepDescriptor,
}

/// Writes a trace as one pretty-printed JSON object followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn render_json<W: Write>(trace: &StepSequence, out: &mut W) -> serde_json::Result<()> {
    let document = JsonTrace {
        algorithm: trace.algorithm(),
        order: trace.order(),
        stats: trace.stats(),
        steps: trace
            .steps()
            .iter()
            .enumerate()
            .map(|(n, descriptor)| JsonStep {
                step: n + 1,
                text: descriptor.to_string(),
                highlighted: descriptor.highlighted(),
                descriptor,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out).map_err(serde_json::Error::io)
}
