//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use serde::{Deserialize, Serialize};
use sortproof_types::{Algorithm, Order};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers. Files are
/// read as a [`ConfigLayer`], where every field is optional.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SortproofConfig {
    /// Enable debug logging on the terminal.
    pub debug: bool,

    /// Fallback selectors used when the command line names none.
    pub defaults: DefaultsConfig,

    /// Output configuration.
    pub ui: UiConfig,

    /// Persistent log file configuration.
    pub logging: LoggingConfig,
}

impl SortproofConfig {
    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Applies one file layer on top of this config.
    ///
    /// Every field the layer sets wins, including a value equal to the
    /// default; fields it leaves out keep their current value.
    pub fn merge(&mut self, layer: &ConfigLayer) {
        if let Some(debug) = layer.debug {
            self.debug = debug;
        }

        self.defaults.merge(&layer.defaults);
        self.ui.merge(&layer.ui);
        self.logging.merge(&layer.logging);
    }
}

/// One config file as written.
///
/// Keeps "absent" apart from "set to the default" so that a project file
/// can turn back on what the global file turned off.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigLayer {
    pub debug: Option<bool>,
    pub defaults: DefaultsConfig,
    pub ui: UiLayer,
    pub logging: LoggingLayer,
}

impl ConfigLayer {
    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// `[ui]` as written in a config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiLayer {
    pub verbose: Option<bool>,
    pub color: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// `[logging]` as written in a config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingLayer {
    pub file: Option<bool>,
    pub file_path: Option<PathBuf>,
    pub file_level: Option<String>,
}

/// Default arrangement and algorithm.
///
/// ```toml
/// [defaults]
/// order = "desc"
/// algorithm = "bubble"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub order: Option<Order>,
    pub algorithm: Option<Algorithm>,
}

impl DefaultsConfig {
    fn merge(&mut self, other: &Self) {
        if other.order.is_some() {
            self.order = other.order;
        }
        if other.algorithm.is_some() {
            self.algorithm = other.algorithm;
        }
    }
}

/// How a trace is written to stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Heading plus one `Step n:` line per frame.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}': expected 'text' or 'json'")),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UiConfig {
    /// Info-level logging and a run summary on stderr.
    pub verbose: bool,

    /// Highlight markers and exchanges with ANSI colors (terminals only).
    pub color: bool,

    /// Output format.
    pub format: OutputFormat,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl UiConfig {
    fn merge(&mut self, layer: &UiLayer) {
        if let Some(verbose) = layer.verbose {
            self.verbose = verbose;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
    }
}

/// Persistent log file configuration.
///
/// ```toml
/// [logging]
/// file = true
/// file_path = "/tmp/sortproof-logs"
/// file_level = "trace"
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Write log lines to `<dir>/sortproof.log`.
    pub file: bool,

    /// Log directory. Defaults to `~/.sortproof/logs`.
    pub file_path: Option<PathBuf>,

    /// Filter directive for the file layer, independent of the terminal.
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: false,
            file_path: None,
            file_level: "debug".into(),
        }
    }
}

impl LoggingConfig {
    fn merge(&mut self, layer: &LoggingLayer) {
        if let Some(file) = layer.file {
            self.file = file;
        }
        if layer.file_path.is_some() {
            self.file_path.clone_from(&layer.file_path);
        }
        if let Some(ref level) = layer.file_level {
            self.file_level.clone_from(level);
        }
    }

    /// Directory the log file is written into.
    #[must_use]
    pub fn resolved_file_path(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(|| super::default_config_dir().join("logs"))
    }

    /// `EnvFilter` directive for the file layer.
    ///
    /// A blank level falls back to `debug`.
    #[must_use]
    pub fn file_filter_directive(&self) -> String {
        let level = self.file_level.trim();
        if level.is_empty() {
            "debug".to_string()
        } else {
            level.to_string()
        }
    }
}
