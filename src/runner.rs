//! External process execution
//!
//! Commands are spawned with `std::process::Command` from a list of discrete
//! arguments; nothing is ever routed through a shell, so arguments are never
//! re-interpreted. Non-zero exits are fail-fast by default, with an explicit
//! opt-out for non-critical steps.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{PgogenError, Result};

/// One external command invocation
#[derive(Debug, Clone)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    stdout_to: Option<PathBuf>,
    check: bool,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
            stdout_to: None,
            check: true,
        }
    }

    /// Run the child in `dir` instead of the current directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Redirect the child's stdout into the file at `path` (truncating)
    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_to = Some(path.into());
        self
    }

    /// Treat a non-zero exit as success.
    ///
    /// Spawn failures (program not found) still error; only the child's own
    /// exit status is tolerated.
    pub fn tolerate_failure(mut self) -> Self {
        self.check = false;
        self
    }

    /// Human-readable form for verbose output
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Execute the command and block until it exits.
    ///
    /// Returns `Err(CommandFailed)` carrying the child's exit code on a
    /// strict non-zero exit; the caller's `main` terminates the process
    /// with that same code.
    pub fn run(&self) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }

        if let Some(path) = &self.stdout_to {
            let sink = File::create(path).map_err(|e| PgogenError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            command.stdout(Stdio::from(sink));
        }

        let status = command
            .status()
            .map_err(|e| PgogenError::CommandSpawnFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if status.success() || !self.check {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(PgogenError::CommandFailed {
                program: self.program.clone(),
                code,
            }),
            None => Err(PgogenError::CommandKilled {
                program: self.program.clone(),
            }),
        }
    }
}

/// Run `program` with `args` in `cwd`, failing fast on a non-zero exit
pub fn run_command(program: &str, args: Vec<String>, cwd: &Path) -> Result<()> {
    CommandLine::new(program, args).current_dir(cwd).run()
}
