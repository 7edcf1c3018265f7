//! Tests for the `lunonex-sql-splitter` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use lunonex_sql_splitter::config::DELIMITER;

fn splitter() -> Command {
    Command::cargo_bin("lunonex-sql-splitter").unwrap()
}

fn document() -> String {
    format!("-- preamble\n{DELIMITER}1 OF 3\nAAA\n{DELIMITER}2 OF 3\nBBB\n{DELIMITER}3 OF 3\nCCC\n")
}

#[test]
fn test_split_file_argument() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("LUNONEX-SETUP.sql");
    fs::write(&input, document()).unwrap();

    splitter()
        .arg("split")
        .arg(&input)
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Part 1"))
        .stdout(predicate::str::contains("Created Part 2"))
        .stdout(predicate::str::contains("Created Part 3"));

    assert!(dir.path().join("SUPABASE-PART-1-SOCIAL-PLATFORM.sql").exists());
    assert!(dir.path().join("SUPABASE-PART-2-TIERS-MARKETPLACES.sql").exists());
    assert!(dir.path().join("SUPABASE-PART-3-CUSTOMIZATION.sql").exists());
}

#[test]
fn test_split_stdin() {
    let dir = tempdir().unwrap();

    splitter()
        .args(["split", "-", "-o"])
        .arg(dir.path())
        .write_stdin(format!("{DELIMITER}2 OF 3\nBBB"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Part 2"))
        .stdout(predicate::str::contains("Created Part 1").not());

    let written =
        fs::read_to_string(dir.path().join("SUPABASE-PART-2-TIERS-MARKETPLACES.sql")).unwrap();
    assert_eq!(written, format!("{DELIMITER}PART2 OF 3\nBBB"));
}

#[test]
fn test_split_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();

    splitter()
        .args(["split", "--dry-run", "--output"])
        .arg(dir.path())
        .write_stdin(document())
        .assert()
        .success()
        .stdout(predicate::str::contains("SUPABASE-PART-3-CUSTOMIZATION.sql"))
        .stdout(predicate::str::contains("Created").not());

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_split_without_markers_succeeds_silently() {
    let dir = tempdir().unwrap();

    splitter()
        .args(["split", "--output"])
        .arg(dir.path())
        .write_stdin("SELECT 1;\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_split_missing_output_dir_fails() {
    let dir = tempdir().unwrap();

    splitter()
        .args(["split", "--output"])
        .arg(dir.path().join("missing"))
        .write_stdin(document())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_split_missing_input_fails() {
    let dir = tempdir().unwrap();

    splitter()
        .arg("split")
        .arg(dir.path().join("nope.sql"))
        .arg("--output")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}
