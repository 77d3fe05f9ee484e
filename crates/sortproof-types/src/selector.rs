//! Order direction and algorithm selectors.
//!
//! Both selectors are closed enums parsed once at the boundary. Anything
//! that is not a known name is rejected with a [`SelectorError`] there, so
//! the engine dispatch is a single exhaustive `match`.

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort direction, fixed for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl Order {
    /// Short selector name (`"asc"` / `"desc"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for Order {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(SelectorError::UnknownOrder(s.to_string())),
        }
    }
}

/// The instrumented sorting procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Insertion,
    Selection,
    Bubble,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 3] = [Self::Insertion, Self::Selection, Self::Bubble];

    /// Selector name (`"insertion"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Bubble => "bubble",
        }
    }

    /// Capitalized name for headings.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Insertion => "Insertion",
            Self::Selection => "Selection",
            Self::Bubble => "Bubble",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(Self::Insertion),
            "selection" => Ok(Self::Selection),
            "bubble" => Ok(Self::Bubble),
            _ => Err(SelectorError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A selector name that matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unknown order '{0}': expected 'asc' or 'desc'")]
    UnknownOrder(String),

    #[error("unknown algorithm '{0}': expected 'insertion', 'selection' or 'bubble'")]
    UnknownAlgorithm(String),
}

impl ErrorCode for SelectorError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownOrder(_) => "SELECTOR_UNKNOWN_ORDER",
            Self::UnknownAlgorithm(_) => "SELECTOR_UNKNOWN_ALGORITHM",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}
