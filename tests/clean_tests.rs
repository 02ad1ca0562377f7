//! Integration tests for the clean command

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn pgogen_cmd() -> Command {
    Command::cargo_bin("pgogen").unwrap()
}

fn go_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("go.mod"), "module example.com/app\n").unwrap();
    temp
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn test_clean_removes_artifacts_and_preserves_others() {
    let temp = go_workspace();
    touch(temp.path(), "cpuprofile.pprof");
    touch(temp.path(), "cpuprofile-cmd__server.pprof");
    touch(temp.path(), "cpuprofile-merged.pprof");
    touch(temp.path(), "server.test");
    touch(temp.path(), "important.txt");

    pgogen_cmd()
        .args(["-w", temp.path().to_str().unwrap(), "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 4 files"));

    assert!(!temp.path().join("cpuprofile.pprof").exists());
    assert!(!temp.path().join("cpuprofile-cmd__server.pprof").exists());
    assert!(!temp.path().join("cpuprofile-merged.pprof").exists());
    assert!(!temp.path().join("server.test").exists());
    assert!(temp.path().join("important.txt").exists());
    assert!(temp.path().join("go.mod").exists());
}

#[test]
fn test_clean_does_not_match_other_pprof_files() {
    let temp = go_workspace();
    touch(temp.path(), "other.pprof");
    touch(temp.path(), "not_a_test.txt");

    pgogen_cmd()
        .args(["-w", temp.path().to_str().unwrap(), "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));

    assert!(temp.path().join("other.pprof").exists());
    assert!(temp.path().join("not_a_test.txt").exists());
}

#[test]
fn test_clean_verbose_reports_each_file() {
    let temp = go_workspace();
    touch(temp.path(), "server.test");

    pgogen_cmd()
        .args(["-w", temp.path().to_str().unwrap(), "-v", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server.test"));
}

#[test]
fn test_clean_requires_go_module() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "cpuprofile.pprof");

    pgogen_cmd()
        .args(["-w", temp.path().to_str().unwrap(), "clean"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("go.mod"));

    // Nothing is deleted outside a Go module
    assert!(temp.path().join("cpuprofile.pprof").exists());
}
