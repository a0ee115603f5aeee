use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn docket(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docket").unwrap();
    cmd.current_dir(dir)
        .env("DOCKET_FILE", dir.join("docket.json"));
    cmd
}

fn first_id(dir: &Path, search: &str) -> String {
    let assert = docket(dir)
        .args(["list", "--search", search, "--format", "json"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    rows[0]["id"].as_str().expect("record id").to_string()
}

#[test]
fn init_add_list_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    docket(dir.path())
        .args([
            "add",
            "--name",
            "Refund request",
            "--category",
            "Billing",
            "--priority",
            "high",
            "--input",
            "I want my money back",
        ])
        .assert()
        .success();

    let assert = docket(dir.path())
        .args([
            "list",
            "--category",
            "Billing",
            "--priority",
            "high",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Refund request");
    assert_eq!(rows[0]["status"], "draft");
}

#[test]
fn add_without_required_fields_names_them() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    docket(dir.path())
        .args(["add", "--input", "hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required fields"))
        .stderr(predicate::str::contains("name"))
        .stderr(predicate::str::contains("category"));
}

#[test]
fn rm_twice_fails_the_second_time() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    let id = first_id(dir.path(), "Technical Question");

    docket(dir.path()).args(["rm", id.as_str()]).assert().success();
    docket(dir.path())
        .args(["rm", id.as_str()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no test case with id"));
}

#[test]
fn import_reports_per_row_and_skips_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    let csv = "Name,Category,Priority,Input,Expected Output\n\
               Product Inquiry,Sales,medium,What features does the premium plan offer?,Premium includes advanced analytics.\n\
               ,Billing,high,How do I update my payment method?,\n\
               Feature Request,Product,urgent,Can you add dark mode?,\n";
    std::fs::write(dir.path().join("rows.csv"), csv).unwrap();

    docket(dir.path())
        .args(["import", "rows.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("2 imported, 1 rejected"))
        .stderr(predicate::str::contains("missing required fields: name"));

    // two seeds from init plus the two accepted rows
    let assert = docket(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 4);

    // the unrecognized priority defaulted to medium
    let assert = docket(dir.path())
        .args(["list", "--search", "dark mode", "--format", "json"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows[0]["priority"], "medium");
    assert_eq!(rows[0]["status"], "draft");
}

#[test]
fn import_dry_run_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    let csv = "Name,Category,Input\nNew Case,Sales,a question\n";
    std::fs::write(dir.path().join("rows.csv"), csv).unwrap();

    docket(dir.path())
        .args(["import", "rows.csv", "--dry-run"])
        .assert()
        .success();

    let assert = docket(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn generate_then_approve_walks_the_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    docket(dir.path())
        .args([
            "add",
            "--name",
            "Greeting",
            "--category",
            "Smoke",
            "--input",
            "Say hello",
        ])
        .assert()
        .success();

    let id = first_id(dir.path(), "Greeting");

    docket(dir.path())
        .args(["generate", id.as_str(), "--generator", "fake"])
        .assert()
        .success()
        .stderr(predicate::str::contains("needs_review"));

    docket(dir.path()).args(["approve", id.as_str()]).assert().success();

    let assert = docket(dir.path()).args(["show", id.as_str()]).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let record: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(record["status"], "ready");
    assert!(record["expected_output"]
        .as_str()
        .unwrap()
        .contains("Say hello"));

    // a ready case cannot be approved a second time
    docket(dir.path())
        .args(["approve", id.as_str()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be approved"));
}

#[test]
fn edit_reenters_review_and_snapshot_survives_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    let id = first_id(dir.path(), "Customer Support Query");

    docket(dir.path())
        .args(["edit", id.as_str(), "--expected", "A fresh canned reply"])
        .assert()
        .success()
        .stderr(predicate::str::contains("needs_review"));

    // ids and order survive the save/load cycle
    let assert = docket(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows[0]["id"].as_str().unwrap(), id);
    assert_eq!(rows[0]["status"], "needs_review");
    assert_eq!(rows[1]["name"], "Technical Question");
}

#[test]
fn stats_and_categories_summarize_the_docket() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    docket(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("2 test cases"))
        .stderr(predicate::str::contains("draft"));

    docket(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Support"))
        .stdout(predicate::str::contains("Technical"));
}

#[test]
fn unknown_filter_values_are_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    docket(dir.path()).arg("init").assert().success();

    docket(dir.path())
        .args(["list", "--priority", "urgent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown priority filter"));
}
