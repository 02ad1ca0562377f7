//! List command implementation
//!
//! Shows the configured packages with the profile filename each one will
//! produce, flagging entries that would fail validation.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::config::PgogenConfig;
use crate::error::Result;
use crate::package;
use crate::profile;

/// Run list command
pub fn run(workspace: Option<PathBuf>, _args: ListArgs) -> Result<()> {
    let workspace = super::workspace_path(workspace)?;
    let config = PgogenConfig::load(&workspace)?;

    println!("Configured packages ({}):", config.packages.len());
    println!();
    for pkg in &config.packages {
        if package::validate_package_path(pkg) {
            println!(
                "  {}",
                Style::new().bold().yellow().apply_to(pkg)
            );
            println!("    Profile: {}", profile::profile_filename(pkg));
        } else {
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to(pkg),
                Style::new().bold().red().apply_to("(invalid)")
            );
        }
    }
    println!();
    println!("Benchtime: {}", config.benchtime);
    println!("Go binary: {}", config.go);

    Ok(())
}
