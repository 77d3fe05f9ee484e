//! Step descriptors: one immutable frame of a sorting trace.
//!
//! The canonical text of a step is its [`Display`](fmt::Display) output and
//! is derived from the structured fields every time it is needed. The
//! recorder de-duplicates on that text; renderers may add color around the
//! same cells but never change the visible characters.
//!
//! ```text
//! Boundary(1)           1   3 |   2
//! Cursor(1)             A (C) B
//! Cursor(2) + label 1   A B (C) -> Iteration 1
//! ```

use serde::Serialize;
use sortproof_types::Token;
use std::fmt;

/// Separator between cells of a boundary frame.
const BOUNDARY_GAP: &str = "   ";

/// Separator between cells of a cursor frame.
const CURSOR_GAP: &str = " ";

/// Where the frame's marker sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Marker {
    /// Sorted/unsorted split: the bar follows the token at this index.
    Boundary(usize),
    /// Scan position: the token at this index is parenthesized.
    Cursor(usize),
}

impl Marker {
    /// Index the marker points at.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Boundary(i) | Self::Cursor(i) => i,
        }
    }
}

/// A pair of positions whose tokens were just exchanged.
///
/// `incoming` holds the token that moved into place, `outgoing` the token
/// it displaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub outgoing: usize,
    pub incoming: usize,
}

/// How a renderer should emphasize one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Plain,
    Outgoing,
    Incoming,
}

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    tokens: Vec<Token>,
    marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    exchange: Option<Exchange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iteration: Option<usize>,
}

impl StepDescriptor {
    /// Frame with the sorted/unsorted bar after `index`.
    #[must_use]
    pub fn boundary(tokens: Vec<Token>, index: usize) -> Self {
        Self::with_marker(tokens, Marker::Boundary(index))
    }

    /// Frame with the scan cursor on `index`.
    #[must_use]
    pub fn cursor(tokens: Vec<Token>, index: usize) -> Self {
        Self::with_marker(tokens, Marker::Cursor(index))
    }

    fn with_marker(tokens: Vec<Token>, marker: Marker) -> Self {
        Self {
            tokens,
            marker,
            exchange: None,
            iteration: None,
        }
    }

    /// Marks the pair of positions that were just swapped.
    #[must_use]
    pub fn exchanged(mut self, outgoing: usize, incoming: usize) -> Self {
        self.exchange = Some(Exchange { outgoing, incoming });
        self
    }

    /// Attaches a 1-based iteration label.
    #[must_use]
    pub fn labeled(mut self, iteration: usize) -> Self {
        self.iteration = Some(iteration);
        self
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    #[must_use]
    pub fn exchange(&self) -> Option<Exchange> {
        self.exchange
    }

    #[must_use]
    pub fn iteration(&self) -> Option<usize> {
        self.iteration
    }

    /// Indices a renderer should emphasize: the cursor, if any, followed by
    /// the exchanged pair.
    #[must_use]
    pub fn highlighted(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(3);
        if let Marker::Cursor(i) = self.marker {
            indices.push(i);
        }
        if let Some(Exchange { outgoing, incoming }) = self.exchange {
            indices.push(outgoing);
            indices.push(incoming);
        }
        indices
    }

    /// Emphasis for the cell at `index`.
    #[must_use]
    pub fn role(&self, index: usize) -> CellRole {
        match self.exchange {
            Some(e) if e.outgoing == index => CellRole::Outgoing,
            Some(e) if e.incoming == index => CellRole::Incoming,
            _ => CellRole::Plain,
        }
    }

    /// Gap placed between cells.
    #[must_use]
    pub fn gap(&self) -> &'static str {
        match self.marker {
            Marker::Boundary(_) => BOUNDARY_GAP,
            Marker::Cursor(_) => CURSOR_GAP,
        }
    }

    /// Canonical text of the cell at `index`, including its marker.
    ///
    /// Returns `None` when `index` is out of range.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<String> {
        let token = self.tokens.get(index)?;
        let text = match self.marker {
            Marker::Boundary(b) if b == index => format!("{token} |"),
            Marker::Cursor(c) if c == index => format!("({token})"),
            _ => token.to_string(),
        };
        Some(text)
    }

    /// Trailing annotation, e.g. `" -> Iteration 2"`.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.iteration.map(|k| format!(" -> Iteration {k}"))
    }
}

impl fmt::Display for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.tokens.len() {
            if index > 0 {
                f.write_str(self.gap())?;
            }
            if let Some(cell) = self.cell(index) {
                f.write_str(&cell)?;
            }
        }
        if let Some(label) = self.label() {
            f.write_str(&label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(texts: &[&str]) -> Vec<Token> {
        texts.iter().copied().map(Token::from).collect()
    }

    #[test]
    fn boundary_rendering() {
        let step = StepDescriptor::boundary(tokens(&["1", "3", "2"]), 1);
        assert_eq!(step.to_string(), "1   3 |   2");
    }

    #[test]
    fn boundary_past_the_end_renders_no_bar() {
        let step = StepDescriptor::boundary(tokens(&["5"]), 1);
        assert_eq!(step.to_string(), "5");
    }

    #[test]
    fn cursor_rendering_with_label() {
        let step = StepDescriptor::cursor(tokens(&["A", "B", "C"]), 2).labeled(1);
        assert_eq!(step.to_string(), "A B (C) -> Iteration 1");
    }

    #[test]
    fn exchange_does_not_change_text() {
        let plain = StepDescriptor::boundary(tokens(&["1", "9", "4"]), 0);
        let colored = plain.clone().exchanged(2, 0);
        assert_eq!(plain.to_string(), colored.to_string());
        assert_ne!(plain, colored);
    }

    #[test]
    fn roles_and_highlights() {
        let step = StepDescriptor::boundary(tokens(&["1", "9", "4"]), 0).exchanged(2, 0);
        assert_eq!(step.role(0), CellRole::Incoming);
        assert_eq!(step.role(1), CellRole::Plain);
        assert_eq!(step.role(2), CellRole::Outgoing);
        assert_eq!(step.highlighted(), vec![2, 0]);

        let cursor = StepDescriptor::cursor(tokens(&["1", "9"]), 1);
        assert_eq!(cursor.highlighted(), vec![1]);
    }

    #[test]
    fn serializes_structured_fields() {
        let step = StepDescriptor::cursor(tokens(&["2", "1"]), 0).labeled(3);
        let json = serde_json::to_value(&step).expect("serialize step");
        assert_eq!(json["tokens"], serde_json::json!(["2", "1"]));
        assert_eq!(json["marker"], serde_json::json!({"kind": "cursor", "index": 0}));
        assert_eq!(json["iteration"], 3);
        assert!(json.get("exchange").is_none());
    }
}
