//! Integration tests for the pillpal binary.
//!
//! These tests verify end-to-end behavior including:
//! - Adding medications and listing them back
//! - Daily plan expansion and bucketing
//! - Dose logging and history/streak output

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pillpal"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Medication schedule and reminder tracker",
        ));
}

#[test]
fn test_add_then_list() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["add", "--name", "Metformin", "--time", "08:00", "--time", "20:00"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Metformin'"));

    cli()
        .arg("meds")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Metformin"))
        .stdout(predicate::str::contains("08:00, 20:00"))
        .stdout(predicate::str::contains("repeats: daily"));

    assert!(data_dir.join("medications.json").exists());
}

#[test]
fn test_today_buckets_daily_medication() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["add", "--name", "Metformin", "--time", "08:00", "--time", "20:00", "--daily"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["today", "--date", "2025-08-26"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tue, Aug 26, 2025"))
        .stdout(predicate::str::contains("Morning"))
        .stdout(predicate::str::contains("Evening"))
        .stdout(predicate::str::contains("2 dose(s) total"));
}

#[test]
fn test_weekly_mask_only_matches_active_days() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Mon/Wed only
    cli()
        .args(["add", "--name", "Alendronate", "--time", "07:00", "--days", "1010000"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    // 2025-08-25 is a Monday
    cli()
        .args(["today", "--date", "2025-08-25"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alendronate"));

    // 2025-08-26 is a Tuesday
    cli()
        .args(["today", "--date", "2025-08-26"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No doses scheduled"));
}

#[test]
fn test_log_then_history_shows_streak() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["add", "--name", "Metformin", "--time", "08:00"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    for date in ["2025-08-24", "2025-08-25"] {
        cli()
            .args([
                "log", "--med", "Metformin", "--time", "08:00", "--status", "taken", "--date",
                date,
            ])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("Logged"));
    }

    cli()
        .args(["history", "--days", "36500"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-08-25"))
        .stdout(predicate::str::contains("Streak: 2 day(s)"));

    assert!(data_dir.join("doses.csv").exists());
}

#[test]
fn test_missed_dose_breaks_streak() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["add", "--name", "Metformin", "--time", "08:00"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    for (date, status) in [
        ("2025-08-23", "taken"),
        ("2025-08-24", "missed"),
        ("2025-08-25", "taken"),
    ] {
        cli()
            .args([
                "log", "--med", "Metformin", "--time", "08:00", "--status", status, "--date",
                date,
            ])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    cli()
        .args(["history", "--days", "36500"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak: 1 day(s)"));
}

#[test]
fn test_add_rejects_malformed_time() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["add", "--name", "Warfarin", "--time", "25:99"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("25:99"));

    // Nothing was stored
    assert!(!data_dir.join("medications.json").exists());
}

#[test]
fn test_log_unknown_medication_fails() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["log", "--med", "Nothing", "--time", "08:00", "--status", "taken"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown medication"));
}
