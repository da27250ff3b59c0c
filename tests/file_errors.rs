use std::fs;
use std::process::Command;

#[test]
fn missing_word_list_aborts_without_output() {
    let exe = env!("CARGO_BIN_EXE_wordshift");
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("table.csv");
    fs::write(&table, "a,o\n").unwrap();
    let out = dir.path().join("pairs.csv");

    let output = Command::new(exe)
        .args([
            dir.path().join("missing.txt").to_str().unwrap(),
            table.to_str().unwrap(),
            out.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"));
    assert!(stderr.contains("loading inputs"));
    assert!(!out.exists());
}

#[test]
fn missing_table_aborts_without_output() {
    let exe = env!("CARGO_BIN_EXE_wordshift");
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    fs::write(&words, "cat\n").unwrap();
    let out = dir.path().join("pairs.csv");

    let output = Command::new(exe)
        .args([
            words.to_str().unwrap(),
            dir.path().join("missing.csv").to_str().unwrap(),
            out.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.csv"));
    assert!(!out.exists());
}

#[test]
fn unwritable_output_reports_cause() {
    let exe = env!("CARGO_BIN_EXE_wordshift");
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let table = dir.path().join("table.csv");
    fs::write(&words, "cat\n").unwrap();
    fs::write(&table, "a,o\n").unwrap();
    let out = dir.path().join("no_such_dir").join("pairs.csv");

    let output = Command::new(exe)
        .args([
            words.to_str().unwrap(),
            table.to_str().unwrap(),
            out.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("writing results"));
}
