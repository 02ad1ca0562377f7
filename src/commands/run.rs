//! Run command implementation
//!
//! The full profile workflow: clean stale artifacts, benchmark every
//! configured package with its own CPU profile, merge the collected profiles
//! into one, copy it into place and optionally render an SVG.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cleanup;
use crate::cli::RunArgs;
use crate::config::PgogenConfig;
use crate::error::{PgogenError, Result};
use crate::gotool;
use crate::profile;
use crate::runner::CommandLine;

/// Run the full profile generation workflow
pub fn run(workspace: Option<PathBuf>, args: RunArgs, verbose: bool) -> Result<()> {
    let workspace = super::workspace_path(workspace)?;
    let mut config = PgogenConfig::load(&workspace)?;
    if let Some(benchtime) = args.benchtime {
        config.benchtime = benchtime;
    }
    config.validate()?;

    step("Cleaning stale artifacts");
    cleanup::clean_artifacts(&workspace)?;

    step("Collecting CPU profiles");
    let collected = collect_profiles(&workspace, &config, verbose)?;
    if collected.is_empty() {
        return Err(PgogenError::NoProfilesCollected);
    }

    step("Merging profiles");
    merge_profiles(&workspace, &config, &collected, verbose)?;

    if args.skip_svg {
        println!("  Skipping SVG rendering");
    } else {
        step("Rendering SVG");
        render_svg(&workspace, &config, verbose)?;
    }

    if args.keep_intermediate {
        println!("  Keeping intermediate profiles");
    } else {
        step("Removing intermediate files");
        cleanup::clean_intermediate(&workspace, &collected)?;
    }

    println!();
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Done:"),
        workspace.join(profile::FINAL_PROFILE).display()
    );

    Ok(())
}

/// Benchmark each configured package; returns the profiles found on disk.
///
/// A package whose benchmarks exit zero but write no profile (no Benchmark
/// functions) is reported and skipped rather than failing the run.
fn collect_profiles(
    workspace: &Path,
    config: &PgogenConfig,
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let mut collected = Vec::new();

    for package in &config.packages {
        let filename = profile::profile_filename(package);
        println!("  {} {}", Style::new().bold().apply_to("Profiling"), package);

        let cmd = CommandLine::new(
            &config.go,
            gotool::benchmark_args(package, &config.benchtime, &filename),
        )
        .current_dir(workspace);

        if verbose {
            println!("    $ {}", cmd.display());
        }
        cmd.run()?;

        let path = workspace.join(&filename);
        if path.exists() {
            collected.push(path);
        } else {
            println!("    No profile produced for {package}, skipping");
        }
    }

    Ok(collected)
}

/// Merge the collected profiles and copy the result to `cpuprofile.pprof`
fn merge_profiles(
    workspace: &Path,
    config: &PgogenConfig,
    collected: &[PathBuf],
    verbose: bool,
) -> Result<()> {
    // pprof resolves the input files against the child's working directory,
    // so pass workspace-relative names
    let names: Vec<String> = collected
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();

    let merged = workspace.join(profile::MERGED_PROFILE);
    let cmd = CommandLine::new(&config.go, gotool::merge_args(names))
        .current_dir(workspace)
        .stdout_to(&merged);
    if verbose {
        println!("    $ {} > {}", cmd.display(), profile::MERGED_PROFILE);
    }
    cmd.run()?;

    let final_path = workspace.join(profile::FINAL_PROFILE);
    std::fs::copy(&merged, &final_path).map_err(|e| PgogenError::FileWriteFailed {
        path: final_path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Render `cpuprofile.svg`. Non-critical: a pprof failure here (usually a
/// missing graphviz) does not abort the run.
fn render_svg(workspace: &Path, config: &PgogenConfig, verbose: bool) -> Result<()> {
    let svg = workspace.join(profile::FINAL_SVG);
    let cmd = CommandLine::new(&config.go, gotool::svg_args())
        .current_dir(workspace)
        .stdout_to(&svg)
        .tolerate_failure();
    if verbose {
        println!("    $ {} > {}", cmd.display(), profile::FINAL_SVG);
    }
    cmd.run()
}

fn step(label: &str) {
    println!("{}", Style::new().bold().cyan().apply_to(label));
}
