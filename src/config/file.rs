//! Reading and writing the TOML config file.

use crate::config::Config;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load configuration from a TOML file.
///
/// A missing file is not an error: the built-in defaults are returned.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    debug!("Loaded config from {}", path.display());
    toml::from_str(&contents).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render configuration as pretty TOML.
pub fn render_config(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|source| Error::ConfigSerialize { source })
}

/// Write configuration to `path`, creating missing parent directories.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let write_error = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    std::fs::write(path, render_config(config)?).map_err(write_error)
}
