//! CLI argument definitions.

use crate::cli::validators::{parse_bits, parse_timestamp_arg};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cut a clip out of an audio file by start and end timestamp.
///
/// Timestamps may be written as MM:SS, HH:MM:SS, seconds (90, 90.5) or
/// milliseconds (5000ms). Without --start/--end the tool asks for them.
#[derive(Debug, Parser)]
#[command(name = "audiotrim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Audio file to trim (prompted for when omitted).
    pub input: Option<PathBuf>,

    /// Trim options.
    #[command(flatten)]
    pub trim: TrimArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for trimming.
#[derive(Debug, Default, Args)]
pub struct TrimArgs {
    /// Start of the clip. Together with --end, skips all prompts.
    #[arg(
        short,
        long,
        value_parser = parse_timestamp_arg,
        allow_hyphen_values = true,
        requires = "end"
    )]
    pub start: Option<i64>,

    /// End of the clip (exclusive).
    #[arg(
        short,
        long,
        value_parser = parse_timestamp_arg,
        allow_hyphen_values = true,
        requires = "start"
    )]
    pub end: Option<i64>,

    /// Output file (default: <input stem>_trimmed.<input extension>).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output container format (default: the input file's extension).
    #[arg(short, long, env = "AUDIOTRIM_FORMAT")]
    pub format: Option<String>,

    /// Output sample depth: 16, 24, or 32 (float).
    #[arg(long, value_parser = parse_bits, env = "AUDIOTRIM_BITS")]
    pub bits: Option<u16>,

    /// Configuration file (default: platform config directory).
    #[arg(long, env = "AUDIOTRIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
