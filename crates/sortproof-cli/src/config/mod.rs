//! Configuration management with hierarchical layering.
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌──────────────────────────────────────────────┐
//! │  1. Command-line flags (ConfigResolver)      │
//! ├──────────────────────────────────────────────┤
//! │  2. Environment Variables (SORTPROOF_*)      │
//! ├──────────────────────────────────────────────┤
//! │  3. Project Config (.sortproof/config.toml)  │
//! ├──────────────────────────────────────────────┤
//! │  4. Global Config (~/.sortproof/config.toml) │
//! ├──────────────────────────────────────────────┤
//! │  5. Default Values (compile-time)            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `SORTPROOF_DEBUG` | `debug` | bool |
//! | `SORTPROOF_VERBOSE` | `ui.verbose` | bool |
//! | `SORTPROOF_COLOR` | `ui.color` | bool |
//! | `SORTPROOF_FORMAT` | `ui.format` | `text` \| `json` |
//! | `SORTPROOF_ORDER` | `defaults.order` | `asc` \| `desc` |
//! | `SORTPROOF_ALGORITHM` | `defaults.algorithm` | `insertion` \| `selection` \| `bubble` |
//! | `SORTPROOF_LOG_FILE` | `logging.file_path` (and `logging.file = true`) | PathBuf |
//! | `SORTPROOF_LOG_LEVEL` | `logging.file_level` | String |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.sortproof/config.toml
//! debug = false
//!
//! [defaults]
//! order = "asc"
//! algorithm = "insertion"
//!
//! [ui]
//! verbose = false
//! color = true
//! format = "text"
//!
//! [logging]
//! file = false
//! file_level = "debug"
//! ```

mod error;
mod loader;
mod resolver;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::ConfigResolver;
pub use types::{DefaultsConfig, OutputFormat, SortproofConfig};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".sortproof")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".sortproof";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";

/// File name inside the log directory.
pub const LOG_FILE_NAME: &str = "sortproof.log";
