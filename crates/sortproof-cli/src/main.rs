//! sortproof - sorting algorithms as numbered proof steps
//!
//! ```text
//! $ sortproof -o asc -a insertion "3,1,2"
//! Insertion sort (ascending)
//! Step 1: 3 |   1   2
//! Step 2: 3   1 |   2
//! Step 3: 1   3 |   2
//! Step 4: 1   3   2 |
//! Step 5: 1   2   3 |
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`SORTPROOF_*`)
//! 3. Project config (`.sortproof/config.toml` under `--project`, default: current directory)
//! 4. Global config (`~/.sortproof/config.toml`)
//! 5. Default values (lowest priority)
//!
//! `[defaults] order` and `algorithm` stand in for `--order` and
//! `--algorithm` when those are omitted.
//!
//! # Environment Variables
//!
//! - `SORTPROOF_DEBUG`, `SORTPROOF_VERBOSE`, `SORTPROOF_COLOR`: booleans
//! - `SORTPROOF_ORDER`, `SORTPROOF_ALGORITHM`: default selectors
//! - `SORTPROOF_FORMAT`: `text` or `json`
//! - `SORTPROOF_LOG_FILE`: enable file logging into this directory
//! - `SORTPROOF_LOG_LEVEL`: file log filter (default: `debug`)

mod config;
mod input;
mod render;
mod tracing_writer;

use anyhow::Result;
use clap::Parser;
use config::{
    ConfigError, ConfigLoader, ConfigResolver, OutputFormat, SortproofConfig, LOG_FILE_NAME,
};
use input::{Form, SortRequest};
use render::TextRenderer;
use sortproof_engine::run_algorithm;
use sortproof_types::ErrorCode;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Show how insertion, selection and bubble sort reorder a list, one step at a time
#[derive(Parser, Debug)]
#[command(name = "sortproof")]
#[command(version, about, long_about = None)]
struct Args {
    /// Comma-separated integers and uppercase letters, e.g. "7,1,A,8,10,C"
    /// (read from stdin when omitted; put `--` before input starting with '-')
    input: Option<String>,

    /// Arrangement: asc | desc
    #[arg(short, long)]
    order: Option<String>,

    /// Algorithm: insertion | selection | bubble
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Output format (also: SORTPROOF_FORMAT)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable ANSI highlighting
    #[arg(long)]
    no_color: bool,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long)]
    project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable info logging and a run summary on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Enable file logging into this directory (also: SORTPROOF_LOG_FILE)
    #[arg(long, value_name = "DIR")]
    log_file: Option<PathBuf>,

    /// Override file log level (also: SORTPROOF_LOG_LEVEL, default: debug)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    show_config: bool,
}

/// Command-line flags as the highest-priority config layer.
///
/// Unset flags leave the loaded value alone: `--debug` absent does not
/// force `debug = false`.
#[derive(Debug, Default)]
struct CliOverrides {
    debug: bool,
    verbose: bool,
    no_color: bool,
    format: Option<OutputFormat>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl CliOverrides {
    fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            verbose: args.verbose,
            no_color: args.no_color,
            format: args.format,
            log_file: args.log_file.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

impl ConfigResolver for CliOverrides {
    fn apply(&self, config: &mut SortproofConfig) {
        if self.debug {
            config.debug = true;
        }
        if self.verbose {
            config.ui.verbose = true;
        }
        if self.no_color {
            config.ui.color = false;
        }
        if let Some(format) = self.format {
            config.ui.format = format;
        }
        if let Some(ref dir) = self.log_file {
            config.logging.file = true;
            config.logging.file_path = Some(dir.clone());
        }
        if let Some(ref level) = self.log_level {
            config.logging.file_level.clone_from(level);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let project_root = args.project.clone().unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });

    let mut config = ConfigLoader::new()
        .with_project_root(&project_root)
        .load()
        .map_err(|e| anyhow::anyhow!("Config error [{}]: {e}", e.code()))?;
    CliOverrides::from_args(&args).apply(&mut config);

    init_tracing(&config);

    info!(path = %project_root.display(), "Project root");
    if config.logging.file {
        info!(
            path = %config.logging.resolved_file_path().join(LOG_FILE_NAME).display(),
            level = %config.logging.file_level,
            "File logging enabled"
        );
    }

    if args.show_config {
        print!("{}", config.to_toml().map_err(ConfigError::from)?);
        return Ok(());
    }

    let raw = match args.input {
        Some(ref text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let form = Form {
        input: &raw,
        order: args.order.as_deref(),
        algorithm: args.algorithm.as_deref(),
    };
    let request = SortRequest::from_form(&form, &config.defaults)
        .inspect_err(|e| debug!(code = e.code(), "Rejected input"))?;

    let trace = run_algorithm(request.values, request.order, request.algorithm);
    let stats = trace.stats();
    info!(
        algorithm = %trace.algorithm(),
        order = %trace.order(),
        steps = trace.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        rounds = stats.rounds,
        "Trace complete"
    );

    let stdout = io::stdout();
    let color = config.ui.color && stdout.is_terminal();
    let mut out = stdout.lock();
    match config.ui.format {
        OutputFormat::Text => TextRenderer::new(color).render(&trace, &mut out)?,
        OutputFormat::Json => render::render_json(&trace, &mut out)?,
    }

    Ok(())
}

/// Installs independent terminal and file filters.
///
/// Terminal (stderr): debug > verbose > `RUST_LOG` > `warn`.
/// File: `logging.file_level`, only when file logging is on.
fn init_tracing(config: &SortproofConfig) {
    let terminal_filter = if config.debug {
        EnvFilter::new("debug")
    } else if config.ui.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let terminal_layer = fmt::layer()
        .with_target(false)
        .with_ansi(config.ui.color && io::stderr().is_terminal())
        .with_writer(io::stderr);

    let log_file = if config.logging.file {
        tracing_writer::open_log_file(&config.logging.resolved_file_path(), LOG_FILE_NAME)
    } else {
        None
    };

    if let Some(file) = log_file {
        let file_filter = EnvFilter::new(config.logging.file_filter_directive());
        let file_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(tracing_writer::FileMakeWriter::new(file));

        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .with(file_layer.with_filter(file_filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .init();
    }
}
