//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "facets",
    version,
    about = "Inspect facet panels and replay selection scripts",
    long_about = "Load a facets panel fixture (facet definitions, options, display config)\n\
                  and either list it or replay scripted selection actions against the\n\
                  selection store, printing the resulting selection and filter expression."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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
    /// List the facets and options of a panel fixture.
    Inspect(InspectArgs),

    /// Replay a selection script against a panel fixture.
    Replay(ReplayArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Panel fixture (JSON with config, facets and options).
    #[arg(value_name = "PANEL")]
    pub panel: PathBuf,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Panel fixture (JSON with config, facets and options).
    #[arg(value_name = "PANEL")]
    pub panel: PathBuf,

    /// Script of actions (JSON array).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print the final store state as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
