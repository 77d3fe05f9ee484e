//! Fallible construction trait.
//!
//! | Pattern | Use When |
//! |---------|----------|
//! | `new()` | Construction always succeeds |
//! | [`TryNew`] | Construction validates an invariant and may fail |
//! | `TryFrom<T>` | Converting from another type |
//!
//! # Example
//!
//! ```
//! use sortproof_types::{Token, TokenList, TryNew};
//!
//! let list = TokenList::try_new(vec![Token::new("3"), Token::new("A")]);
//! assert!(list.is_ok());
//!
//! let empty = TokenList::try_new(Vec::new());
//! assert!(empty.is_err());
//! ```

/// Trait for fallible construction with validation.
///
/// Types implementing `TryNew` do not also offer a plain `new()` performing
/// the same validation; the `try_` prefix keeps fallibility visible at the
/// call site.
pub trait TryNew: Sized {
    /// Error returned when validation fails.
    type Error;

    /// Arguments required for construction (use a tuple for several).
    type Args;

    /// Attempts to construct a new instance.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the arguments violate the type's invariant.
    fn try_new(args: Self::Args) -> Result<Self, Self::Error>;
}
