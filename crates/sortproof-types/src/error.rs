//! Unified error interface for sortproof.
//!
//! Every error type that crosses a crate boundary implements [`ErrorCode`]
//! so front ends can report a stable, machine-readable code next to the
//! human message.
//!
//! # Example
//!
//! ```
//! use sortproof_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum RenderError {
//!     Closed,
//!     Truncated,
//! }
//!
//! impl ErrorCode for RenderError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Closed => "RENDER_CLOSED",
//!             Self::Truncated => "RENDER_TRUNCATED",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Truncated)
//!     }
//! }
//!
//! let err = RenderError::Truncated;
//! assert_eq!(err.code(), "RENDER_TRUNCATED");
//! assert!(err.is_recoverable());
//! ```

/// Machine-readable error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"TOKENS_EMPTY"`
/// - **Domain prefix**: `"SELECTOR_"`, `"TOKENS_"`, `"INPUT_"`, `"CONFIG_"`
/// - **Stable**: codes are part of the CLI's JSON/exit contract
///
/// # Recoverability
///
/// An error is recoverable when the user can fix it by changing what they
/// typed (a missing selector, an unknown algorithm name). Errors caused by
/// the environment or by a broken invariant are not.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the user can correct the error and retry.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows sortproof conventions.
///
/// # Panics
///
/// Panics if the code is empty, lacks `expected_prefix`, or is not
/// UPPER_SNAKE_CASE.
///
/// # Example
///
/// ```
/// use sortproof_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct Oops;
///
/// impl ErrorCode for Oops {
///     fn code(&self) -> &'static str { "DEMO_OOPS" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Oops, "DEMO_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates every variant of an error enum at once.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
