//! Clean command implementation

use std::path::PathBuf;

use crate::cleanup;
use crate::cli::CleanArgs;
use crate::error::Result;

/// Run clean command
pub fn run(workspace: Option<PathBuf>, _args: CleanArgs, verbose: bool) -> Result<()> {
    let workspace = super::workspace_path(workspace)?;
    let removed = cleanup::clean_artifacts(&workspace)?;

    if removed.is_empty() {
        println!("Nothing to clean.");
        return Ok(());
    }

    if verbose {
        for path in &removed {
            println!("Removed {}", path.display());
        }
    }
    println!(
        "Removed {} file{}.",
        removed.len(),
        if removed.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_empty_workspace() {
        let temp = TempDir::new().unwrap();
        let result = run(Some(temp.path().to_path_buf()), CleanArgs {}, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_clean_removes_artifacts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("cpuprofile.pprof"), b"").unwrap();
        std::fs::write(temp.path().join("server.test"), b"").unwrap();
        std::fs::write(temp.path().join("important.txt"), b"keep").unwrap();

        run(Some(temp.path().to_path_buf()), CleanArgs {}, true).unwrap();

        assert!(!temp.path().join("cpuprofile.pprof").exists());
        assert!(!temp.path().join("server.test").exists());
        assert!(temp.path().join("important.txt").exists());
    }
}
