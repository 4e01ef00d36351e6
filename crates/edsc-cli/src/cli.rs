//! CLI argument definitions for the `edsc` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use edsc_cli::forward::ForwardPreset;

#[derive(Parser)]
#[command(
    name = "edsc",
    version,
    about = "Encode, decode and inspect shareable search links",
    long_about = "Encode search state snapshots into shareable links and decode links back\n\
                  into search state.\n\n\
                  Also builds the query strings forwarded to the metadata search service."
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
    /// Encode a state snapshot into a link.
    Encode(EncodeArgs),

    /// Decode a link into search state JSON.
    Decode(DecodeArgs),

    /// Show the parameters carried by a link.
    Params(ParamsArgs),

    /// List the link keys and the state fields they carry.
    Fields,

    /// Build the query string forwarded for a parameter record.
    Forward(ForwardArgs),
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// JSON file holding `{ "pathname": ..., "state": ... }`.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Path to prefix the query with (overrides the snapshot's pathname).
    #[arg(long = "pathname", value_name = "PATH")]
    pub pathname: Option<String>,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// A full link, a path with a query, or a bare query string.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct ParamsArgs {
    /// A full link, a path with a query, or a bare query string.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Print the parsed record as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ForwardArgs {
    /// JSON object with the request parameters.
    #[arg(value_name = "PARAMS")]
    pub params: PathBuf,

    /// Keys whose arrays are written as `key[]` (repeatable).
    #[arg(long = "non-indexed", value_name = "KEY", conflicts_with = "preset")]
    pub non_indexed: Vec<String>,

    /// Apply the permitted and non-indexed key lists of a request type.
    #[arg(long = "preset", value_enum)]
    pub preset: Option<ForwardPreset>,
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
