use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/airline_routes.json")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("flightmap-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("FLIGHTMAP_DATA")
        .arg("--no-logo");
    cmd
}

#[test]
fn airport_details_are_shown() {
    let mut cmd = cli();
    cmd.arg("--data").arg(fixture_path()).args(["airport", "hkg"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HKG – Hong Kong, Hong Kong"))
        .stdout(predicate::str::contains("Routes:    2 outgoing"));
}

#[test]
fn airport_json_flattens_fields() {
    let mut cmd = cli();
    cmd.arg("--data")
        .arg(fixture_path())
        .args(["--format", "json", "airport", "SYD"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["code"], "SYD");
    assert_eq!(value["country"], "Australia");
    assert_eq!(value["outgoing_routes"], 2);
}

#[test]
fn unknown_airport_lookup_fails() {
    let mut cmd = cli();
    cmd.arg("--data").arg(fixture_path()).args(["airport", "HKX"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown airport 'HKX'"))
        .stderr(predicate::str::contains("HKG"));
}

#[test]
fn airports_are_listed_and_filtered() {
    let mut cmd = cli();
    cmd.arg("--data").arg(fixture_path()).arg("airports");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("7 airports"))
        .stdout(predicate::str::contains("ZZZ").not());

    let mut cmd = cli();
    cmd.arg("--data")
        .arg(fixture_path())
        .args(["airports", "--country", "australia"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ASP – Alice Springs, Australia\nSYD"))
        .stdout(predicate::str::contains("2 airports"));
}

#[test]
fn data_directory_and_env_var_are_accepted() {
    let dir = tempdir().expect("create temp dir");
    fs::copy(fixture_path(), dir.path().join("airline_routes.json")).expect("copy fixture");

    let mut cmd = cli();
    cmd.arg("--data").arg(dir.path()).args(["airport", "SIN"]);
    cmd.assert().success();

    let mut cmd = cli();
    cmd.env("FLIGHTMAP_DATA", dir.path()).args(["airport", "BKK"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suvarnabhumi Airport"));
}

#[test]
fn missing_dataset_is_reported() {
    let dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.arg("--data")
        .arg(dir.path().join("nope.json"))
        .arg("airports");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to locate the airline route dataset"));
}
