//! Process-level tests for the `filetool` binary
//!
//! Every invocation runs in an empty directory with an empty HOME so that no
//! annotation files leak in from the machine running the tests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn filetool(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("filetool").unwrap();
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env_remove("MTP_DESCRIBE_VERSION")
        .env_remove("RUST_LOG");
    cmd
}

fn describe_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "describe should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_mtp_describe_prints_document() {
    let sandbox = TempDir::new().unwrap();
    let document = describe_output(filetool(&sandbox).arg("--mtp-describe"));

    assert_eq!(document["name"], "filetool");
    assert_eq!(document["version"], "1.2.0");
    assert_eq!(document["specVersion"], "2026-02-07");
    assert_eq!(
        document["commands"]["convert"]["stdin"]["contentType"],
        "text/plain"
    );
    assert_eq!(
        document["commands"]["validate"]["examples"][0]["output"],
        r#"{"valid": true, "errors": []}"#
    );
}

#[test]
fn test_mtp_describe_output_is_one_compact_line() {
    let sandbox = TempDir::new().unwrap();
    filetool(&sandbox)
        .arg("--mtp-describe")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"name\":\"filetool\""))
        .stdout(predicate::str::ends_with("}\n"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}

#[test]
fn test_mtp_describe_after_subcommand() {
    let sandbox = TempDir::new().unwrap();
    let document = describe_output(filetool(&sandbox).args(["convert", "--mtp-describe"]));
    assert!(document["commands"].get("convert").is_some());
}

#[test]
fn test_switch_is_not_part_of_document() {
    let sandbox = TempDir::new().unwrap();
    let document = describe_output(filetool(&sandbox).arg("--mtp-describe"));
    for command in document["commands"].as_object().unwrap().values() {
        for arg in command["args"].as_array().unwrap() {
            assert_ne!(arg["name"], "--mtp-describe");
            assert_ne!(arg["name"], "--help");
        }
    }
}

#[test]
fn test_normal_invocation_is_unchanged() {
    let sandbox = TempDir::new().unwrap();
    filetool(&sandbox)
        .args(["convert", "data.csv", "--format", "yaml", "--pretty"])
        .assert()
        .success()
        .stdout("Converting data.csv to yaml\n(pretty-printed)\n");
}

#[test]
fn test_switch_after_terminator_is_a_value() {
    let sandbox = TempDir::new().unwrap();
    filetool(&sandbox)
        .args(["validate", "--", "--mtp-describe"])
        .assert()
        .success()
        .stdout("Validating --mtp-describe\n");
}

#[test]
fn test_usage_errors_still_reported() {
    let sandbox = TempDir::new().unwrap();
    filetool(&sandbox)
        .arg("convert")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn test_environment_overrides_version() {
    let sandbox = TempDir::new().unwrap();
    let document = describe_output(
        filetool(&sandbox)
            .env("MTP_DESCRIBE_VERSION", "1.2.0-dev")
            .arg("--mtp-describe"),
    );
    assert_eq!(document["version"], "1.2.0-dev");
}

#[test]
fn test_project_annotation_file_is_merged() {
    let sandbox = TempDir::new().unwrap();
    let dir = sandbox.path().join(".mtp");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("describe.toml"),
        "[commands.validate.arg_descriptions]\nstrict = \"Fail on warnings\"\n",
    )
    .unwrap();

    let document = describe_output(filetool(&sandbox).arg("--mtp-describe"));
    let validate = &document["commands"]["validate"];
    assert_eq!(validate["args"][1]["description"], "Fail on warnings");
    assert_eq!(validate["args"][0]["description"], "File to validate");
}

#[test]
fn test_numeric_looking_version_from_environment() {
    let sandbox = TempDir::new().unwrap();
    let document = describe_output(
        filetool(&sandbox)
            .env("MTP_DESCRIBE_VERSION", "2.0")
            .arg("--mtp-describe"),
    );
    assert_eq!(document["version"], "2.0");
}

#[test]
fn test_annotation_file_merges_with_compiled_in_annotations() {
    let sandbox = TempDir::new().unwrap();
    let dir = sandbox.path().join(".mtp");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("describe.json"),
        r#"{"commands": {"convert": {"arg_descriptions": {"pretty": "Indent"}}}}"#,
    )
    .unwrap();

    let document = describe_output(filetool(&sandbox).arg("--mtp-describe"));
    let convert = &document["commands"]["convert"];
    assert_eq!(convert["args"][0]["description"], "Input file path");
    assert_eq!(convert["args"][2]["description"], "Indent");
    assert_eq!(convert["stdin"]["contentType"], "text/plain");
}

#[test]
fn test_misspelled_annotation_key_is_reported() {
    let sandbox = TempDir::new().unwrap();
    let dir = sandbox.path().join(".mtp");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("describe.json"),
        r#"{"commands": {"convert": {"argDescriptions": {"pretty": "Indent"}}}}"#,
    )
    .unwrap();

    let output = filetool(&sandbox).arg("--mtp-describe").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("argDescriptions"));
}
