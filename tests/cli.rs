//! End-to-end CLI tests.
//!
//! Each test runs `vx` against its own temp data directory via
//! `VX_DATA_DIR`. Stdout is piped, so the binary runs in JSON mode
//! and outputs are parsed as such.

use assert_cmd::Command;
use tempfile::TempDir;

fn vx(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vx").unwrap();
    cmd.env("VX_DATA_DIR", data_dir.path());
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    serde_json::from_str(stdout.trim()).unwrap()
}

fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    serde_json::from_str(stderr.trim()).unwrap()
}

#[test]
fn add_list_sql_round_trip() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir)
        .args(["add", "buccaneer", "Buccaneer", "18000"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let added = stdout_json(&out);
    assert_eq!(added["model"], "buccaneer");
    assert_eq!(added["price"], 18000.0);
    assert_eq!(added["category"], "muscle");

    let out = vx(&dir)
        .args(["add", "adder", "Adder", "1000000", "--category", "super"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let out = vx(&dir).arg("list").output().unwrap();
    let list = stdout_json(&out);
    assert_eq!(list["count"], 2);
    assert_eq!(list["vehicles"][0]["model"], "buccaneer");
    assert_eq!(list["vehicles"][1]["model"], "adder");

    let out = vx(&dir).arg("sql").output().unwrap();
    assert!(out.status.success());
    let sql = stdout_json(&out);
    assert_eq!(sql["count"], 2);
    assert_eq!(
        sql["sql"],
        "INSERT INTO `vehicles` (name, model, price, category) VALUES\n\
         \t('Buccaneer','buccaneer',18000,'muscle'),\n\
         \t('Adder','adder',1000000,'super');"
    );
}

#[test]
fn invalid_price_rejected_without_mutation() {
    let dir = TempDir::new().unwrap();

    for bad in ["-5", "abc", "0"] {
        let out = vx(&dir)
            .args(["add", "adder", "Adder", bad])
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(4), "price {bad} should be rejected");
        let err = stderr_json(&out);
        assert_eq!(err["error"]["code"], "INVALID_PRICE");
    }

    // The garage is untouched by any of the rejected submissions.
    let out = vx(&dir).arg("list").output().unwrap();
    assert_eq!(stdout_json(&out)["count"], 0);
}

#[test]
fn empty_required_fields_rejected() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir).args(["add", "  ", "Adder", "100"]).output().unwrap();
    assert_eq!(out.status.code(), Some(4));
    assert_eq!(stderr_json(&out)["error"]["code"], "REQUIRED_FIELD");

    let out = vx(&dir).args(["add", "adder", " ", "100"]).output().unwrap();
    assert_eq!(out.status.code(), Some(4));

    let out = vx(&dir).arg("list").output().unwrap();
    assert_eq!(stdout_json(&out)["count"], 0);
}

#[test]
fn sql_on_empty_garage_is_a_user_error() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir).arg("sql").output().unwrap();
    assert_eq!(out.status.code(), Some(4));
    let err = stderr_json(&out);
    assert_eq!(err["error"]["code"], "EMPTY_GARAGE");
    assert!(err["error"]["hint"].as_str().unwrap().contains("vx add"));
}

#[test]
fn duplicate_category_add_is_skipped() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir)
        .args(["category", "add", "Off Road Racer"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let added = stdout_json(&out);
    assert_eq!(added["value"], "off_road_racer");
    assert_eq!(added["added"], true);

    let out = vx(&dir)
        .args(["category", "add", "Off Road Racer"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_json(&out)["added"], false);

    let out = vx(&dir).args(["category", "list"]).output().unwrap();
    let list = stdout_json(&out);
    let customs: Vec<_> = list["categories"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["custom"] == true)
        .collect();
    assert_eq!(customs.len(), 1);
    assert_eq!(customs[0]["value"], "off_road_racer");
}

#[test]
fn category_list_without_store_shows_builtins() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir).args(["category", "list"]).output().unwrap();
    assert!(out.status.success());
    let list = stdout_json(&out);
    assert_eq!(list["count"], 11);
    assert_eq!(list["categories"][0]["value"], "muscle");
}

#[test]
fn remove_by_id_prefix() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir)
        .args(["add", "adder", "Adder", "100"])
        .output()
        .unwrap();
    let id = stdout_json(&out)["id"].as_str().unwrap().to_string();

    let out = vx(&dir).args(["remove", &id[..8]]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_json(&out)["id"], id.as_str());

    let out = vx(&dir).arg("list").output().unwrap();
    assert_eq!(stdout_json(&out)["count"], 0);
}

#[test]
fn remove_unknown_id_exits_not_found_with_current_ids() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir)
        .args(["add", "adder", "Adder", "100"])
        .output()
        .unwrap();
    let existing = stdout_json(&out)["id"].as_str().unwrap().to_string();

    let out = vx(&dir).args(["remove", "veh_missing"]).output().unwrap();
    assert_eq!(out.status.code(), Some(3));
    let err = stderr_json(&out);
    assert_eq!(err["error"]["code"], "VEHICLE_NOT_FOUND");
    assert!(err["error"]["hint"].as_str().unwrap().contains(&existing));
}

#[test]
fn clear_empties_the_garage() {
    let dir = TempDir::new().unwrap();

    vx(&dir)
        .args(["add", "adder", "Adder", "100"])
        .assert()
        .success();
    vx(&dir)
        .args(["add", "zentorno", "Zentorno", "200"])
        .assert()
        .success();

    let out = vx(&dir).arg("clear").output().unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_json(&out)["removed"], 2);

    let out = vx(&dir).arg("list").output().unwrap();
    assert_eq!(stdout_json(&out)["count"], 0);
}

#[test]
fn sql_out_writes_statement_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("vehicles.sql");

    vx(&dir)
        .args(["add", "buccaneer", "Buccaneer", "18000"])
        .assert()
        .success();

    vx(&dir)
        .args(["sql", "--out", target.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(&target).unwrap();
    assert_eq!(
        written,
        "INSERT INTO `vehicles` (name, model, price, category) VALUES\n\
         \t('Buccaneer','buccaneer',18000,'muscle');\n"
    );
}

#[test]
fn copy_without_clipboard_helper_is_a_share_error() {
    let dir = TempDir::new().unwrap();

    vx(&dir)
        .args(["add", "buccaneer", "Buccaneer", "18000"])
        .assert()
        .success();

    // With an empty PATH no clipboard helper can spawn, so the helper
    // loop falls through to the share error.
    let out = vx(&dir)
        .env("PATH", "")
        .args(["sql", "--copy"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(5));
    let err = stderr_json(&out);
    assert_eq!(err["error"]["code"], "SHARE_ERROR");
    assert_eq!(err["error"]["retryable"], false);
}

#[test]
fn silent_add_prints_only_the_id() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir)
        .args(["add", "adder", "Adder", "100", "--silent"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.trim().starts_with("veh_"));
    assert_eq!(stdout.trim().lines().count(), 1);
}

#[test]
fn dry_run_add_does_not_persist() {
    let dir = TempDir::new().unwrap();

    vx(&dir)
        .args(["add", "adder", "Adder", "100", "--dry-run"])
        .assert()
        .success();

    let out = vx(&dir).arg("list").output().unwrap();
    assert_eq!(stdout_json(&out)["count"], 0);
}

#[test]
fn flag_aliases_work_for_positionals() {
    let dir = TempDir::new().unwrap();

    let out = vx(&dir)
        .args(["add", "--model", "adder", "--name", "Adder", "--price", "100"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_json(&out)["model"], "adder");
}
