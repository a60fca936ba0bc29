//! CLI argument definitions for `cmor-dims`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cmor_model::{ValidationMode, parse_user_mapping_entry};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cmor-dims",
    version,
    about = "Map dataset dimensions onto standardized CMIP dimension names",
    long_about = "Classify the dimensions of a dataset from their attributes, names and\n\
                  coordinate values, then map them onto the standardized dimension names\n\
                  required by a CMOR variable table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map the dimensions of a dataset description.
    Map(MapArgs),

    /// List the target dimension catalog.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// JSON file with a `dimensions` array.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Required target dimension names, comma separated (e.g. time,plev19,lat,lon).
    #[arg(long = "required", value_name = "NAMES", value_delimiter = ',')]
    pub required: Vec<String>,

    /// TOML config file with a [dimension_mapping] table.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target catalog file (TOML or CSV). Defaults to $CMOR_DIMENSION_CATALOG,
    /// then the built-in catalog.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Validation mode (overrides the config file).
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Reject user mappings that contradict the catalog.
    #[arg(long = "no-override")]
    pub no_override: bool,

    /// Skip mapping entirely and report every dimension as unmapped.
    #[arg(long = "disable")]
    pub disable: bool,

    /// Explicit user mapping, repeatable.
    #[arg(long = "map", value_name = "SRC=DST", value_parser = parse_map_entry)]
    pub map: Vec<(String, String)>,

    /// Print the mapping result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Target catalog file (TOML or CSV).
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

fn parse_map_entry(raw: &str) -> Result<(String, String), String> {
    parse_user_mapping_entry(raw).map_err(|e| e.to_string())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Ignore,
    Warn,
    Error,
}

impl From<ModeArg> for ValidationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Ignore => ValidationMode::Ignore,
            ModeArg::Warn => ValidationMode::Warn,
            ModeArg::Error => ValidationMode::Error,
        }
    }
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
