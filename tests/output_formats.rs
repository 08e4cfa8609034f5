use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn dev_diary(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("dev-diary").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_repos_json_output() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("alpha/.git")).unwrap();
    fs::create_dir_all(dir.path().join("beta/.git")).unwrap();

    let mut cmd = dev_diary(dir.path());
    cmd.arg("repos")
        .arg(dir.path())
        .args(["--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "repositories""#))
        .stdout(predicate::str::contains(r#""entries":"#))
        .stdout(predicate::str::contains(r#""name": "alpha""#));

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert!(value.get("query").is_none());
}

#[test]
fn test_dirs_json_output_with_query() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("scan/project-x")).unwrap();
    fs::create_dir_all(dir.path().join("scan/other")).unwrap();

    let output = dev_diary(dir.path())
        .arg("dirs")
        .arg(dir.path().join("scan"))
        .args(["--query", "prjx", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["query"], "prjx");
    let entries = value["entries"].as_array().unwrap();
    assert!(entries
        .iter()
        .any(|e| e["path"].as_str().unwrap().ends_with("project-x")));
    for entry in entries {
        assert!(entry["score"].is_number());
        assert_eq!(entry["indices"].as_array().unwrap().len(), 4);
    }
}

#[test]
fn test_diaries_xml_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("dev-diary-2026-01-01.md"), "a").unwrap();

    dev_diary(dir.path())
        .arg("diaries")
        .arg("--output")
        .arg(&out)
        .args(["--format", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<?xml"))
        .stdout(predicate::str::contains("<listing>"))
        .stdout(predicate::str::contains("<kind>diary files</kind>"))
        .stdout(predicate::str::contains(r#"date="2026-01-01""#));
}

#[test]
fn test_invalid_format() {
    let dir = tempdir().unwrap();

    dev_diary(dir.path())
        .arg("repos")
        .arg(dir.path())
        .args(["--format", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_default_text_format() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("alpha/.git")).unwrap();

    dev_diary(dir.path())
        .arg("repos")
        .arg(dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha  "))
        .stdout(predicate::str::contains("<?xml").not())
        .stdout(predicate::str::contains(r#""kind""#).not());
}
