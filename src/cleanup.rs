//! Artifact cleanup
//!
//! Removes profile artifacts and compiled test binaries from the workspace
//! root. Only the two fixed glob patterns are ever matched, only against
//! file names in the top level of the workspace, so nothing else can be
//! deleted.

use std::fs;
use std::path::{Path, PathBuf};

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{PgogenError, Result};
use crate::profile;

/// Check if a glob pattern matches a file name
///
/// Uses wax for platform-independent glob matching.
pub fn matches_glob(pattern: &str, file_name: &str) -> bool {
    let candidate = CandidatePath::from(file_name);
    match Glob::new(pattern) {
        Ok(glob) => glob.matched(&candidate).is_some(),
        Err(_) => pattern == file_name,
    }
}

/// Regular files directly under `dir` whose names match `pattern`
pub fn matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    // Validate the pattern up front so a bad one is a real error, not a
    // silent no-match
    Glob::new(pattern).map_err(|e| PgogenError::GlobFailed {
        message: e.to_string(),
    })?;

    let mut matches = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if matches_glob(pattern, name) {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches)
}

/// Remove all profile artifacts and test binaries from `dir`.
///
/// Matches `cpuprofile*.pprof` and `*.test` in the top level of `dir` only;
/// returns the removed paths for reporting.
pub fn clean_artifacts(dir: &Path) -> Result<Vec<PathBuf>> {
    remove_matching(dir, &[profile::PROFILE_GLOB, profile::TEST_BINARY_GLOB])
}

/// Remove the intermediate files left after a successful merge.
///
/// Per-package profiles, the raw merge output and test binaries go; the
/// final `cpuprofile.pprof` and `cpuprofile.svg` stay.
pub fn clean_intermediate(dir: &Path, per_package: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for path in per_package {
        if path.exists() {
            fs::remove_file(path)?;
            removed.push(path.clone());
        }
    }
    let merged = dir.join(profile::MERGED_PROFILE);
    if merged.exists() {
        fs::remove_file(&merged)?;
        removed.push(merged);
    }
    removed.extend(remove_matching(dir, &[profile::TEST_BINARY_GLOB])?);
    Ok(removed)
}

fn remove_matching(dir: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for pattern in patterns {
        for path in matching_files(dir, pattern)? {
            fs::remove_file(&path)?;
            removed.push(path);
        }
    }
    Ok(removed)
}
