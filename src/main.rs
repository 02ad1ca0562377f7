//! pgogen - PGO profile generator
//!
//! A command line tool that benchmarks the configured packages of a Go
//! module, collects their CPU profiles and merges them into a single
//! cpuprofile.pprof ready for profile-guided optimization (`go build -pgo`).

use clap::Parser;
use std::path::PathBuf;

mod cleanup;
mod cli;
mod commands;
mod config;
mod error;
mod gotool;
mod package;
mod profile;
mod runner;

use cli::{Cli, Commands};
use error::{PgogenError, Result};

/// Check that the workspace directory is the root of a Go module
fn check_go_module(workspace: Option<PathBuf>) -> Result<()> {
    let dir = commands::workspace_path(workspace)?;

    if !dir.join("go.mod").is_file() {
        return Err(PgogenError::NotAGoModule {
            path: dir.display().to_string(),
        });
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Commands that touch or delete workspace files require a go.mod there.
    // list, version and completions can run anywhere.
    let needs_go_module = matches!(cli.command, Commands::Run(_) | Commands::Clean(_));

    if needs_go_module {
        if let Err(e) = check_go_module(cli.workspace.clone()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(cli.workspace, args, cli.verbose),
        Commands::Clean(args) => commands::clean::run(cli.workspace, args, cli.verbose),
        Commands::List(args) => commands::list::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        // A failed external command terminates with the child's own exit code
        std::process::exit(e.exit_code());
    }
}
