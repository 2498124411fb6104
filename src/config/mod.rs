//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{load_config_file, render_config, save_config};
pub use paths::{config_dir, config_file_path};
pub use types::{Config, ExportConfig, OutputConfig};
pub use validate::validate_config;
