//! E2E tests for the budgetbuddy command line

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn budgetbuddy(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_budgetbuddy"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn budgetbuddy_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_budgetbuddy"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait on command")
}

/// Salary 2000, Rent 800, Food 200
#[test]
fn summary_monthly_totals() {
    let output = budgetbuddy(&["summary", "-e", "tests/data/monthly.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Income:   $2000.00 (1 entries)"));
    assert!(stdout.contains("Expenses: $1000.00 (2 entries)"));
    assert!(stdout.contains("Unused:   $1000.00"));
    assert!(!stdout.contains("Over budget"));
}

#[test]
fn summary_json_reports_overspend() {
    let output = budgetbuddy(&["summary", "-e", "tests/data/over_budget.json", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("summary is valid JSON");
    assert_eq!(summary["income_count"], 1);
    assert_eq!(summary["expense_count"], 2);
    assert_eq!(summary["total_income"], "1000");
    assert_eq!(summary["total_expenses"], "1200");
    assert_eq!(summary["unused_income"], "0");
    assert_eq!(summary["overspend"], "200");
}

#[test]
fn summary_symbol_flag() {
    let output = budgetbuddy(&["--symbol", "£", "summary", "-e", "tests/data/over_budget.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Unused:   £0.00"));
    assert!(stdout.contains("Over budget by £200.00"));
}

#[test]
fn remove_by_position_before_reporting() {
    let output = budgetbuddy(&[
        "list",
        "-e",
        "tests/data/monthly.csv",
        "--remove-expense",
        "0,5",
        "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "index,kind,label,amount",
            "0,income,Salary,2000",
            "0,expense,Food,200",
        ]
    );
}

#[test]
fn invalid_amount_fails_with_row() {
    let output = budgetbuddy(&["summary", "-e", "tests/data/bad_amount.csv"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("entry 2"));
    assert!(stderr.contains("invalid amount '12.5.3'"));
}

#[test]
fn chart_shares() {
    let output = budgetbuddy(&["chart", "-e", "tests/data/monthly.csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("EXPENSE DISTRIBUTION"));
    assert!(stdout.contains("80.0%"));
    assert!(stdout.contains("20.0%"));
    assert!(stdout.contains("Income Used"));
    assert!(stdout.contains("Income Unused"));
}

#[test]
fn chart_without_expenses_from_stdin() {
    let output = budgetbuddy_stdin(
        &["chart", "-e", "-", "--json"],
        "kind,label,amount\nincome,Salary,100\n",
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let chart: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("chart is valid JSON");
    assert_eq!(chart["expense_distribution"].as_array().map(Vec::len), Some(0));
    assert_eq!(chart["income_usage"][0]["label"], "Income Used");
    assert_eq!(chart["income_usage"][0]["percent"], "0.0");
    assert_eq!(chart["income_usage"][1]["percent"], "100.0");

    let output = budgetbuddy_stdin(&["chart", "-e", "-"], "kind,label,amount\nincome,Salary,100\n");
    assert!(String::from_utf8_lossy(&output.stdout).contains("No Expense Data"));
}

#[test]
fn session_reports_bad_lines_and_continues() {
    let output = budgetbuddy(&["session", "tests/data/session.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // the negative refund is rejected, so the session exits non-zero
    assert!(!output.status.success());
    assert!(stderr.contains("line 6"));
    assert!(stderr.contains("invalid amount '-5'"));

    assert!(stdout.contains("Removed 1 expense entries"));
    assert!(stdout.contains("Expenses: $1000.00 (2 entries)"));
    assert!(stdout.contains("Unused:   $1000.00"));
    assert!(!stdout.contains("Typo"));
}

#[test]
fn session_from_stdin() {
    let output = budgetbuddy_stdin(
        &["session"],
        "add income 500 Gift\nadd expense 125.50 Shoes\nsummary\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Unused:   $374.50"));
}

#[test]
fn schema_csv_header() {
    let output = budgetbuddy(&["schema", "csv-header"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "kind,label,amount");
}
