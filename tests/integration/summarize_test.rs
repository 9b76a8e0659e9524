//! Integration tests for summarizing a gas report.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{
    deployments, fixtures_dir, gas_avg, row, run_gas_avg, workspace_with_fixture,
    workspace_with_rows,
};

// ============================================================================
// Default invocation
// ============================================================================

#[test]
fn no_arguments_summarizes_gas_report_with_default_preset() {
    let dir = workspace_with_fixture();

    let (stdout, stderr, exit_code) = run_gas_avg(dir.path(), &[]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @"Total of averages: 415000");
}

#[test]
fn arbitrator_preset_totals_competition_contracts() {
    let dir = workspace_with_fixture();

    let (stdout, _stderr, exit_code) = run_gas_avg(dir.path(), &["--preset", "arbitrator"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(
        stdout.trim_end(),
        @"Total of averages for the Arbitrator Audit Competition: 240000"
    );
}

#[test]
fn summarize_subcommand_matches_top_level_flags() {
    let dir = workspace_with_fixture();

    let (top_level, _, _) = run_gas_avg(dir.path(), &["-p", "arbitrator"]);
    let (subcommand, _, _) = run_gas_avg(dir.path(), &["summarize", "-p", "arbitrator"]);

    assert_eq!(top_level, subcommand);
}

#[test]
fn report_path_can_be_given_explicitly() {
    let dir = TempDir::new().unwrap();
    let report = fixtures_dir().join("gas-report.txt");

    gas_avg(dir.path())
        .args(["--report", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Total of averages: 415000\n");
}

#[test]
fn running_twice_gives_identical_output() {
    let dir = workspace_with_fixture();

    let (first, _, _) = run_gas_avg(dir.path(), &[]);
    let (second, _, _) = run_gas_avg(dir.path(), &[]);

    assert_eq!(first, second);
}

// ============================================================================
// Summation rules
// ============================================================================

#[test]
fn no_allow_listed_rows_prints_zero() {
    let dir = workspace_with_rows(&[row("HATToken", "transfer", "51000"), deployments()]);

    gas_avg(dir.path())
        .assert()
        .success()
        .stdout("Total of averages: 0\n");
}

#[test]
fn single_row_total() {
    let dir = workspace_with_rows(&[row("HATVault", "deposit", "12345"), deployments()]);

    gas_avg(dir.path())
        .assert()
        .success()
        .stdout("Total of averages: 12345\n");
}

#[test]
fn two_rows_are_added() {
    let dir = workspace_with_rows(&[
        row("HATVault", "deposit", "100"),
        row("HATClaimsManager", "submitClaim", "250"),
        deployments(),
    ]);

    gas_avg(dir.path())
        .assert()
        .success()
        .stdout("Total of averages: 350\n");
}

#[test]
fn rows_after_deployments_are_not_summed() {
    let dir = workspace_with_rows(&[
        row("HATVault", "deposit", "100"),
        deployments(),
        row("HATVault", "withdraw", "900"),
    ]);

    gas_avg(dir.path())
        .assert()
        .success()
        .stdout("Total of averages: 100\n");
}

#[test]
fn ad_hoc_contracts_and_label() {
    let dir = workspace_with_fixture();

    gas_avg(dir.path())
        .args(["-c", "HATHackersNFT", "-c", "HATArbitrator", "--label", "NFT and arbitrator"])
        .assert()
        .success()
        .stdout("NFT and arbitrator: 150000\n");
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn breakdown_lists_included_rows() {
    let dir = workspace_with_fixture();

    gas_avg(dir.path())
        .args(["--preset", "arbitrator", "--breakdown"])
        .assert()
        .success()
        .stdout(
            "HATArbitrator  dispute  90000\n\
             HATKlerosConnector  notifyArbitrator  150000\n\
             Total of averages for the Arbitrator Audit Competition: 240000\n",
        );
}

#[test]
fn json_output() {
    let dir = workspace_with_fixture();

    let (stdout, _stderr, exit_code) =
        run_gas_avg(dir.path(), &["--preset", "arbitrator", "--format", "json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total"], 240000);
    assert_eq!(value["contracts"][0]["contract"], "HATArbitrator");
    assert_eq!(value["contracts"][0]["line"], 13);
    assert_eq!(value["contracts"][1]["method"], "notifyArbitrator");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_report_fails_without_output() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, exit_code) = run_gas_avg(dir.path(), &[]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("gas-report.txt"));
}

#[test]
fn non_numeric_average_fails_without_output() {
    let dir = workspace_with_rows(&[
        row("HATVault", "deposit", "100"),
        row("HATVault", "withdraw", "n/a"),
        deployments(),
    ]);

    gas_avg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not an integer"))
        .stderr(predicate::str::contains("n/a"));
}

#[test]
fn short_allow_listed_row_fails() {
    let dir = workspace_with_rows(&["|  HATVault  ·  deposit  ·  1".to_string(), deployments()]);

    gas_avg(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Line 9 has 3 field(s)"));
}

#[test]
fn overflowing_total_fails_without_output() {
    let max = u64::MAX.to_string();
    let dir = workspace_with_rows(&[
        row("HATVault", "deposit", &max),
        row("HATVault", "withdraw", "1"),
        deployments(),
    ]);

    gas_avg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Line 11: total of average gas overflows"));
}

#[test]
fn report_shorter_than_header_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gas-report.txt"), "one\ntwo\nthree\n").unwrap();

    gas_avg(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("3 line(s)"));
}

#[test]
fn unknown_preset_fails() {
    let dir = workspace_with_fixture();

    gas_avg(dir.path())
        .args(["--preset", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset 'nope'"));
}

#[test]
fn preset_and_contract_conflict_is_a_usage_error() {
    let dir = workspace_with_fixture();

    gas_avg(dir.path())
        .args(["--preset", "vaults", "--contract", "HATVault"])
        .assert()
        .code(2);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = workspace_with_fixture();

    gas_avg(dir.path())
        .arg("-vv")
        .assert()
        .success()
        .stdout("Total of averages: 415000\n")
        .stderr(predicate::str::contains("reached deployments section"));
}

#[test]
fn default_run_writes_nothing_to_stderr() {
    let dir = workspace_with_fixture();

    gas_avg(dir.path()).assert().success().stderr("");
}
