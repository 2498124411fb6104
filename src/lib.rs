//! audiotrim - cut a clip out of an audio file by timestamp.
//!
//! Timestamps are parsed into milliseconds ([`timestamp`]), clamped to the
//! source clip and sliced by the [`trimmer`], and written back out through
//! the [`audio`] backend.

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod timestamp;
pub mod trimmer;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{
    Config, config_file_path, load_config_file, render_config, save_config, validate_config,
};
use std::path::PathBuf;
use tracing::warn;

pub use error::{Error, Result};

/// Main entry point for the audiotrim CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.trim.verbose, cli.trim.quiet);

    let config_path = resolve_config_path(cli.trim.config.clone());

    if let Some(command) = cli.command {
        return handle_command(command, config_path.as_ref());
    }

    let config = match &config_path {
        Some(path) => load_config_file(path)?,
        None => Config::default(),
    };
    validate_config(&config)?;

    trimmer::command::execute(cli.input, &cli.trim, &config)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout is reserved for prompts and results
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `--config` wins; otherwise the platform default, if one exists.
fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| match config_file_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("{e}; using built-in defaults");
            None
        }
    })
}

fn handle_command(command: Command, config_path: Option<&PathBuf>) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config_path),
    }
}

fn handle_config_command(action: ConfigAction, config_path: Option<&PathBuf>) -> Result<()> {
    let path = config_path.ok_or(Error::ConfigDirNotFound)?;

    match action {
        ConfigAction::Init => {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config_file(path)?;
            validate_config(&config)?;
            print!("{}", render_config(&config)?);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
