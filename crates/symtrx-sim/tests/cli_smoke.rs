use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_symtrx-sim"))
}

#[test]
fn validate_prints_a_clean_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("report.json");
    let output = binary()
        .args(["validate", "--dims", "3", "8", "--repeats", "1", "--strict", "--out"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_failures"], 0);
    assert_eq!(report["summaries"].as_array().unwrap().len(), 4);
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.trim(), String::from_utf8_lossy(&output.stdout).trim());
}

#[test]
fn sizes_lists_requested_dimensions() {
    let output = binary().args(["sizes", "--max-dim", "4"]).output().unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 4);
    assert_eq!(rows[3]["bisymmetric"], 6);
}

#[test]
fn zero_dimension_is_rejected() {
    let output = binary()
        .args(["validate", "--dims", "0", "--repeats", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
