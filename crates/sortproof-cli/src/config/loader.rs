//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.sortproof/config.toml`)
//! 3. Project config (`.sortproof/config.toml`)
//! 4. Environment variables (`SORTPROOF_*`)
//!
//! Each layer overrides the previous.

use super::types::ConfigLayer;
use super::{
    default_config_path, ConfigError, OutputFormat, SortproofConfig, PROJECT_CONFIG_DIR,
    PROJECT_CONFIG_FILE,
};
use sortproof_types::{Algorithm, Order};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Helper macro for parsing boolean environment variables.
macro_rules! parse_env_bool {
    ($field:expr, $var:literal) => {
        if let Ok(val) = std::env::var($var) {
            $field = parse_bool(&val)
                .ok_or_else(|| ConfigError::invalid_env_var($var, "expected bool"))?;
        }
    };
}

/// Helper macro for environment variables parsed through `FromStr`.
macro_rules! parse_env_value {
    ($field:expr, $ty:ty, $var:literal) => {
        if let Ok(val) = std::env::var($var) {
            $field = val
                .parse::<$ty>()
                .map_err(|e| ConfigError::invalid_env_var($var, e.to_string()))?;
        }
    };
}

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```ignore
/// let config = ConfigLoader::new()
///     .with_project_root("/path/to/project")
///     .skip_env_vars()  // For testing
///     .load()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.sortproof/config.toml).
    global_config_path: Option<PathBuf>,

    /// Project root directory.
    project_root: Option<PathBuf>,

    skip_env: bool,
    skip_global: bool,
    skip_project: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Sets the project root directory.
    ///
    /// Project config will be loaded from `<project_root>/.sortproof/config.toml`.
    #[must_use]
    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Skips environment variable loading.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Skips project config loading.
    #[must_use]
    pub fn skip_project_config(mut self) -> Self {
        self.skip_project = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file exists but cannot be read or
    /// parsed, or if an environment variable holds an invalid value.
    /// Missing config files are silently ignored.
    pub fn load(&self) -> Result<SortproofConfig, ConfigError> {
        let mut config = SortproofConfig::default();

        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = Self::load_file(&global_path)? {
                debug!(path = %global_path.display(), "Loaded global config");
                config.merge(&global_config);
            }
        }

        if !self.skip_project {
            if let Some(ref project_root) = self.project_root {
                let project_config_path = project_root
                    .join(PROJECT_CONFIG_DIR)
                    .join(PROJECT_CONFIG_FILE);

                if let Some(project_config) = Self::load_file(&project_config_path)? {
                    debug!(
                        path = %project_config_path.display(),
                        project = %project_root.display(),
                        "Loaded project config"
                    );
                    config.merge(&project_config);
                }
            }
        }

        if !self.skip_env {
            Self::apply_env_vars(&mut config)?;
        }

        Ok(config)
    }

    /// Loads a config file, returning None if it doesn't exist.
    fn load_file(path: &Path) -> Result<Option<ConfigLayer>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

        let layer =
            ConfigLayer::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))?;

        Ok(Some(layer))
    }

    /// Applies environment variable overrides.
    fn apply_env_vars(config: &mut SortproofConfig) -> Result<(), ConfigError> {
        parse_env_bool!(config.debug, "SORTPROOF_DEBUG");
        parse_env_bool!(config.ui.verbose, "SORTPROOF_VERBOSE");
        parse_env_bool!(config.ui.color, "SORTPROOF_COLOR");

        parse_env_value!(config.ui.format, OutputFormat, "SORTPROOF_FORMAT");

        // Selectors are optional in the config, so wrap after parsing.
        if let Ok(val) = std::env::var("SORTPROOF_ORDER") {
            let order = val
                .parse::<Order>()
                .map_err(|e| ConfigError::invalid_env_var("SORTPROOF_ORDER", e.to_string()))?;
            config.defaults.order = Some(order);
        }
        if let Ok(val) = std::env::var("SORTPROOF_ALGORITHM") {
            let algorithm = val
                .parse::<Algorithm>()
                .map_err(|e| ConfigError::invalid_env_var("SORTPROOF_ALGORITHM", e.to_string()))?;
            config.defaults.algorithm = Some(algorithm);
        }

        // Naming a log directory turns file logging on.
        if let Ok(val) = std::env::var("SORTPROOF_LOG_FILE") {
            config.logging.file = true;
            config.logging.file_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SORTPROOF_LOG_LEVEL") {
            config.logging.file_level = val;
        }

        Ok(())
    }
}

/// Parses a boolean from string.
///
/// Accepts: "true", "false", "1", "0", "yes", "no", "on", "off" (case-insensitive).
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_config_file(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_defaults_only() {
        let config = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .skip_env_vars()
            .load()
            .unwrap();

        assert_eq!(config, SortproofConfig::default());
    }

    #[test]
    fn load_global_config() {
        let temp = TempDir::new().unwrap();
        let config_path = create_config_file(
            temp.path(),
            r#"
debug = true

[defaults]
order = "desc"
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&config_path)
            .skip_project_config()
            .skip_env_vars()
            .load()
            .unwrap();

        assert!(config.debug);
        assert_eq!(config.defaults.order, Some(Order::Descending));
    }

    #[test]
    fn load_project_overrides_global() {
        let global_temp = TempDir::new().unwrap();
        let project_temp = TempDir::new().unwrap();

        let project_dir = project_temp.path().join(PROJECT_CONFIG_DIR);
        std::fs::create_dir_all(&project_dir).unwrap();

        let global_path = create_config_file(
            global_temp.path(),
            r#"
[defaults]
order = "desc"
algorithm = "insertion"

[ui]
color = false
"#,
        );

        create_config_file(
            &project_dir,
            r#"
[defaults]
algorithm = "bubble"

[ui]
format = "json"
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&global_path)
            .with_project_root(project_temp.path())
            .skip_env_vars()
            .load()
            .unwrap();

        // From global
        assert_eq!(config.defaults.order, Some(Order::Descending));
        assert!(!config.ui.color);
        // Overridden by project
        assert_eq!(config.defaults.algorithm, Some(Algorithm::Bubble));
        assert_eq!(config.ui.format, OutputFormat::Json);
    }

    #[test]
    fn project_can_restore_default_bools() {
        let global_temp = TempDir::new().unwrap();
        let project_temp = TempDir::new().unwrap();

        let project_dir = project_temp.path().join(PROJECT_CONFIG_DIR);
        std::fs::create_dir_all(&project_dir).unwrap();

        let global_path = create_config_file(
            global_temp.path(),
            r#"
debug = true

[ui]
color = false
verbose = true
"#,
        );

        create_config_file(
            &project_dir,
            r#"
debug = false

[ui]
color = true
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&global_path)
            .with_project_root(project_temp.path())
            .skip_env_vars()
            .load()
            .unwrap();

        assert!(config.ui.color);
        assert!(!config.debug);
        // Not mentioned by the project, so the global value stays.
        assert!(config.ui.verbose);
    }

    #[test]
    fn missing_config_files_ok() {
        let config = ConfigLoader::new()
            .with_global_config("/nonexistent/sortproof/config.toml")
            .with_project_root("/nonexistent/project")
            .skip_env_vars()
            .load()
            .unwrap();

        assert_eq!(config, SortproofConfig::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let config_path = create_config_file(temp.path(), "debug = \"sometimes\"");

        let err = ConfigLoader::new()
            .with_global_config(&config_path)
            .skip_project_config()
            .skip_env_vars()
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool("on"), Some(true));

        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool(" off "), Some(false));

        assert_eq!(parse_bool("invalid"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn env_var_override() {
        // This test modifies env vars, run in isolation
        std::env::set_var("SORTPROOF_ALGORITHM", "Selection");
        std::env::set_var("SORTPROOF_FORMAT", "json");

        let config = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .load()
            .unwrap();

        assert_eq!(config.defaults.algorithm, Some(Algorithm::Selection));
        assert_eq!(config.ui.format, OutputFormat::Json);

        std::env::set_var("SORTPROOF_ALGORITHM", "quick");
        let err = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("SORTPROOF_ALGORITHM"));

        // Cleanup
        std::env::remove_var("SORTPROOF_ALGORITHM");
        std::env::remove_var("SORTPROOF_FORMAT");
    }
}
