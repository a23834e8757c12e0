//! CLI argument definitions for the recipe preprocessor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use recipe_model::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    version,
    about = "Convert the raw recipe table into a clean JSON array",
    long_about = "Convert the raw recipe CSV into a clean JSON array.\n\n\
                  List-valued columns are decoded, four nutrition values are kept,\n\
                  and allergens are derived from ingredient text. With no arguments\n\
                  reads RAW_recipes.csv and writes clean_recipes.json."
)]
pub struct Cli {
    /// Source recipe table (CSV).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Destination JSON document.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Print a table of record statistics after writing.
    #[arg(long)]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
