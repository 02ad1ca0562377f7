//! Command implementations for pgogen CLI

pub mod clean;
pub mod completions;
pub mod list;
pub mod run;
pub mod version;

use std::path::PathBuf;

use crate::error::{PgogenError, Result};

/// Resolve the workspace path from the CLI argument or current directory
pub fn workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| PgogenError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
