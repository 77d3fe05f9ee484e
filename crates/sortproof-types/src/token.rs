//! Display tokens and the non-empty token list handed to the engine.

use crate::{ErrorCode, TryNew};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One user-supplied value, kept verbatim for display.
///
/// Tokens are opaque: the engine moves them around but never rewrites
/// their text. Ordering decisions go through a derived key instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wraps a display string.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the display text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Returned when a [`TokenList`] would be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token list must contain at least one value")]
pub struct EmptyTokenList;

impl ErrorCode for EmptyTokenList {
    fn code(&self) -> &'static str {
        "TOKENS_EMPTY"
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// A non-empty, ordered list of tokens.
///
/// This is the only input shape the engine accepts, so every run has at
/// least one element to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenList(Vec<Token>);

impl TryNew for TokenList {
    type Error = EmptyTokenList;
    type Args = Vec<Token>;

    fn try_new(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        if tokens.is_empty() {
            return Err(EmptyTokenList);
        }
        Ok(Self(tokens))
    }
}

impl TokenList {
    /// Number of tokens (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the tokens.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Consumes the list, returning the tokens.
    #[must_use]
    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl<'a> TryFrom<&'a [&'a str]> for TokenList {
    type Error = EmptyTokenList;

    fn try_from(texts: &'a [&'a str]) -> Result<Self, Self::Error> {
        Self::try_new(texts.iter().copied().map(Token::from).collect())
    }
}
