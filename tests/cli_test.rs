//! Tests for the dict-cli binary

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn dict_cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dict-cli"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_cli_runs_demo_and_exports() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dictionary.txt");

    let output = dict_cli()
        .arg("--output")
        .arg(&path)
        .output()
        .expect("Failed to run dict-cli");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Translations of 'planet': планета"));
    assert!(stdout.contains("successfully."));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Word: planet\nTranslations: планета\n----\n"
    );
}

#[test]
fn test_cli_fails_when_export_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("dictionary.txt");

    let output = dict_cli()
        .arg("--output")
        .arg(&path)
        .output()
        .expect("Failed to run dict-cli");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error exporting dictionary: "));
}

#[test]
fn test_cli_rejects_unknown_dictionary() {
    let output = dict_cli()
        .args(["--dictionary", "en-de"])
        .output()
        .expect("Failed to run dict-cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown dictionary type: en-de"));
}
