//! Error types and handling for pgogen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pgogen operations
#[derive(Error, Diagnostic, Debug)]
pub enum PgogenError {
    // Package errors
    #[error("Invalid package path: {path}")]
    #[diagnostic(
        code(pgogen::package::invalid_path),
        help(
            "Package paths may contain letters, digits, '_', '-' and '/' and must not contain '..' segments"
        )
    )]
    InvalidPackagePath { path: String },

    // External command errors
    #[error("Command '{program}' failed with exit code {code}")]
    #[diagnostic(
        code(pgogen::command::failed),
        help("Re-run with -v to see the full command line")
    )]
    CommandFailed { program: String, code: i32 },

    #[error("Command '{program}' terminated by a signal")]
    #[diagnostic(code(pgogen::command::killed))]
    CommandKilled { program: String },

    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(
        code(pgogen::command::spawn_failed),
        help("Check that the Go toolchain is installed and on PATH")
    )]
    CommandSpawnFailed { program: String, reason: String },

    // Workspace errors
    #[error("No go.mod found in: {path}")]
    #[diagnostic(
        code(pgogen::workspace::no_go_module),
        help("Run pgogen from the root of a Go module, or pass -w <dir>")
    )]
    NotAGoModule { path: String },

    // Profile errors
    #[error("No benchmark produced a CPU profile; nothing to merge")]
    #[diagnostic(
        code(pgogen::profile::none_collected),
        help("Check that the configured packages contain Benchmark functions")
    )]
    NoProfilesCollected,

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(pgogen::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pgogen::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(pgogen::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(pgogen::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Glob pattern error: {message}")]
    #[diagnostic(code(pgogen::fs::glob_failed))]
    GlobFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pgogen::fs::io_error))]
    IoError { message: String },
}

impl PgogenError {
    /// Process exit code to terminate with for this error.
    ///
    /// A failed external command propagates the child's own exit code;
    /// everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PgogenError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for PgogenError {
    fn from(err: std::io::Error) -> Self {
        PgogenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PgogenError {
    fn from(err: serde_yaml::Error) -> Self {
        PgogenError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PgogenError>;
