//! Integration tests for the command-line binary

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_electrolyte-normalizer");

#[test]
fn test_missing_csv_reports_path_context() {
    let output = Command::new(BIN)
        .args(["summary", "/no/such/dir/src_data.csv", "--quiet"])
        .output()
        .expect("Failed to run electrolyte-normalizer");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(
            "Error: Failed to process /no/such/dir/src_data.csv: \
             Data resource not found at path: /no/such/dir/src_data.csv"
        ),
        "unexpected stderr: {}",
        stderr
    );
}
