//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod demo;
mod fields;
mod show;
mod write;

pub use completions::handle_completions;
pub use demo::handle_demo;
pub use fields::handle_fields;
pub use show::handle_show;
pub use write::handle_write;

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolve a log file argument that must already exist
fn existing_log(config: &Config, file: &Path) -> Result<PathBuf> {
    let path = config.resolve_log_path(file);
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::FileNotFound { path })
    }
}
