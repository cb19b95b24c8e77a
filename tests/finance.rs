mod common;

use assert_cmd::Command;

use common::fixture_path;

fn finance_output(extra: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("scheme-rollup").expect("binary");
    cmd.arg("finance")
        .arg("--input")
        .arg(fixture_path("registrations.csv"));
    for arg in extra {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("run finance");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

fn table_row<'a>(stdout: &'a str, block: &str) -> Vec<&'a str> {
    stdout
        .lines()
        .find(|line| line.starts_with(block))
        .unwrap_or_else(|| panic!("no row for {block} in:\n{stdout}"))
        .split_whitespace()
        .collect()
}

#[test]
fn block_rows_report_scheme_totals_and_gst() {
    let stdout = finance_output(&[]);
    assert_eq!(
        table_row(&stdout, "Alpha"),
        vec![
            "Alpha", "500.00", "9.00", "9.00", "1.00", "300.00", "13.50", "13.50", "3.00",
            "325.00", "2",
        ]
    );
    assert_eq!(
        table_row(&stdout, "Beta"),
        vec![
            "Beta", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00", "0.00", "150.00",
            "1",
        ]
    );
}

#[test]
fn total_row_matches_grand_totals() {
    let stdout = finance_output(&[]);
    assert_eq!(
        table_row(&stdout, "TOTAL"),
        vec![
            "TOTAL", "500.00", "9.00", "9.00", "1.00", "300.00", "13.50", "13.50", "3.00",
            "475.00", "3",
        ]
    );
}

#[test]
fn district_filter_restricts_totals() {
    let stdout = finance_output(&["--district", "South"]);
    assert!(!stdout.contains("Alpha"));
    let total = table_row(&stdout, "TOTAL");
    assert_eq!(total[9], "150.00");
    assert_eq!(total[10], "1");
}

#[test]
fn json_format_carries_nested_scheme_totals() {
    let stdout = finance_output(&["--format", "json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    let lines = parsed.as_array().expect("array of blocks");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["blockName"], "Alpha");
    assert_eq!(lines[0]["pmksy"]["totalPaid"], 500.0);
    assert_eq!(lines[0]["gstSubmitted"], 325.0);
    assert_eq!(lines[0]["invoicesDue"], 2);
}
