//! Raw input to a validated sort request.
//!
//! The command line accepts the same loose text a form field would:
//! comma-separated pieces where anything other than digits, uppercase
//! letters and `-` is discarded. What survives must still be a value the
//! engine can rank.

use crate::config::DefaultsConfig;
use sortproof_engine::comparable_key;
use sortproof_types::{
    Algorithm, ErrorCode, Order, SelectorError, Token, TokenList, TryNew,
};
use thiserror::Error;

/// Why a request was rejected.
///
/// Variants are listed in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input cannot be empty.")]
    Empty,

    #[error("Please select an arrangement.")]
    MissingOrder,

    #[error("Please select a sorting algorithm.")]
    MissingAlgorithm,

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("Unrecognized value '{0}': expected an integer or a single uppercase letter.")]
    IllegalToken(String),
}

impl ErrorCode for InputError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "INPUT_EMPTY",
            Self::MissingOrder => "INPUT_MISSING_ORDER",
            Self::MissingAlgorithm => "INPUT_MISSING_ALGORITHM",
            Self::Selector(e) => e.code(),
            Self::IllegalToken(_) => "INPUT_ILLEGAL_TOKEN",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// Unvalidated fields as typed by the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<'a> {
    pub input: &'a str,
    pub order: Option<&'a str>,
    pub algorithm: Option<&'a str>,
}

/// Everything the engine needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SortRequest {
    pub values: TokenList,
    pub order: Order,
    pub algorithm: Algorithm,
}

impl SortRequest {
    /// Validates a form, falling back to configured selectors.
    ///
    /// A blank selector counts as not selected.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] in declaration order.
    pub fn from_form(form: &Form<'_>, defaults: &DefaultsConfig) -> Result<Self, InputError> {
        let values = TokenList::try_new(tokenize(form.input)).map_err(|_| InputError::Empty)?;

        let order = match selected(form.order) {
            Some(name) => name.parse()?,
            None => defaults.order.ok_or(InputError::MissingOrder)?,
        };

        let algorithm = match selected(form.algorithm) {
            Some(name) => name.parse()?,
            None => defaults.algorithm.ok_or(InputError::MissingAlgorithm)?,
        };

        if let Some(bad) = values
            .as_slice()
            .iter()
            .find(|token| !comparable_key(token).is_ranked())
        {
            return Err(InputError::IllegalToken(bad.to_string()));
        }

        Ok(Self {
            values,
            order,
            algorithm,
        })
    }
}

fn selected(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Splits on commas, keeping only `0-9`, `A-Z` and `-` in each piece.
///
/// Pieces left empty are dropped.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<Token> {
    raw.split(',')
        .map(|piece| {
            piece
                .chars()
                .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase() || *c == '-')
                .collect::<String>()
        })
        .filter(|piece| !piece.is_empty())
        .map(Token::from)
        .collect()
}
