//! Core types for sortproof.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  sortproof-types  : Token, Order, Algorithm, ErrorCode ◄ HERE │
//! ├─────────────────────────────────────────────────────────────┤
//! │  sortproof-engine : normalizer, recorder, sort engines       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  sortproof-cli    : input form, config, rendering            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate knows how sorting works. It only fixes the
//! vocabulary shared by the engine and its front ends, and the boundary
//! errors raised when user input does not fit that vocabulary.
//!
//! # Example
//!
//! ```
//! use sortproof_types::{Algorithm, Order, Token, TokenList, TryNew};
//!
//! let values = TokenList::try_new(vec![Token::new("7"), Token::new("A")])?;
//! let order: Order = "desc".parse()?;
//! let algorithm: Algorithm = "bubble".parse()?;
//!
//! assert_eq!(values.len(), 2);
//! assert_eq!(order, Order::Descending);
//! assert_eq!(algorithm, Algorithm::Bubble);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod construct;
mod error;
mod selector;
mod token;

pub use construct::TryNew;
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use selector::{Algorithm, Order, SelectorError};
pub use token::{EmptyTokenList, Token, TokenList};
