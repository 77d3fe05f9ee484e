//! Configuration resolver trait for layered overrides.
//!
//! ```text
//! ConfigLoader.load()  →  SortproofConfig (base)
//!                              │
//!                              ▼
//!                     ConfigResolver.apply()
//!                              │
//!                              ▼
//!                     SortproofConfig (final)
//! ```

use super::SortproofConfig;

/// Trait for applying configuration overrides on top of loaded config.
///
/// Keeps file/env loading separate from runtime overrides such as
/// command-line flags.
pub trait ConfigResolver {
    /// Applies overrides to the given configuration.
    ///
    /// Only options that were actually given should be applied, preserving
    /// existing values for everything else.
    fn apply(&self, config: &mut SortproofConfig);
}
