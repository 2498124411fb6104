//! CLI argument parsing and terminal interaction.

mod args;
mod prompt;
pub mod validators;

pub use args::{Cli, Command, ConfigAction, TrimArgs};
pub use prompt::Prompter;
