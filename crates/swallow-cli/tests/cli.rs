//! Command-line tests for the `swallow` binary.

use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn swallow() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_swallow")))
}

#[test]
fn scan_writes_metadata_file() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("Foo.java"), "// note\nclass Foo { void bar() {} void baz() {} }\n").unwrap();
    let output = dir.path().join("out.json");

    swallow()
        .arg("scan")
        .arg(&src)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata written to"))
        .stdout(predicate::str::contains("Root: "))
        .stdout(predicate::str::contains("Files: 1"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json[0]["className"], "Foo");
    assert_eq!(json[0]["comments"][0], "note");
    assert_eq!(json[0]["methods"][1]["methodName"], "baz");
}

#[test]
fn scan_empty_directory_to_stdout() {
    let dir = TempDir::new().unwrap();

    swallow()
        .args(["--quiet", "scan", "--stdout"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn scan_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.json");

    swallow()
        .arg("scan")
        .arg(dir.path().join("does-not-exist"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Discovery error"));

    assert!(!output.exists());
}

#[test]
fn scan_with_broken_file_still_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Bad.java"), "class Bad {").unwrap();
    fs::write(dir.path().join("Good.java"), "class Good {}").unwrap();
    let output = dir.path().join("out.json");

    let assert = swallow()
        .arg("scan")
        .arg(dir.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Bad.java"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("Skipped").count(), 1);
    assert!(!stderr.contains("Skipping"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"Good\""));
    assert!(!content.contains("\"Bad\""));
}

#[test]
fn scan_text_format_and_show() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Foo.java"), "class Foo { void bar() {} }").unwrap();
    let json_path = dir.path().join("meta.json");

    swallow()
        .args(["-q", "scan", "--stdout", "--format", "text"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Class: Foo").and(predicate::str::contains("  - bar")));

    swallow()
        .args(["-q", "scan"])
        .arg(dir.path())
        .arg("-o")
        .arg(&json_path)
        .assert()
        .success();

    swallow()
        .arg("show")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Class: Foo"));
}

#[test]
fn show_missing_document_fails() {
    let dir = TempDir::new().unwrap();

    swallow()
        .arg("show")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Metadata not found"));
}
