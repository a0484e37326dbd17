use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/metro_network.json")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("metro-cli");
    cmd.env("METRO_DATASET", fixture_path()).env("RUST_LOG", "error");
    cmd
}

#[test]
fn route_by_name_prints_summary() {
    cli()
        .args(["route", "--from", "Rithala", "--to", "Noida City Centre"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Rithala -> Noida City Centre (Shortest Distance)",
        ))
        .stdout(predicate::str::contains("Distance: 23.6 km"))
        .stdout(predicate::str::contains("Number of Stations: 9"))
        .stdout(predicate::str::contains("Ticket Fare: ₹55"))
        .stdout(predicate::str::contains("Change to Blue Line"))
        .stdout(predicate::str::contains("Arrive at Noida City Centre"));
}

#[test]
fn route_by_time_uses_hop_estimate_for_distance() {
    cli()
        .args(["route", "--from", "1", "--to", "18", "--metric", "time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Shortest Time)"))
        .stdout(predicate::str::contains("Estimated Travel Time: 41 minutes"))
        .stdout(predicate::str::contains("Distance: 15.0 km"))
        .stdout(predicate::str::contains("Ticket Fare: ₹45"));
}

#[test]
fn route_json_output_is_structured() {
    let output = cli()
        .args(["--format", "json", "route", "--from", "1", "--to", "18"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["fare"], 55);
    assert_eq!(value["metric"], "distance");
    assert_eq!(value["line_changes"], 4);
    assert_eq!(value["path"], serde_json::json!([1, 2, 3, 4, 5, 15, 16, 17, 18]));
}

#[test]
fn unknown_station_name_suggests_close_match() {
    cli()
        .args(["route", "--from", "Rajiv Chok", "--to", "Rithala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown station 'Rajiv Chok'"))
        .stderr(predicate::str::contains("Rajiv Chowk"));
}

#[test]
fn same_station_is_rejected() {
    cli()
        .args(["route", "--from", "5", "--to", "Kashmere Gate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Source and destination stations cannot be the same.",
        ));
}

#[test]
fn fare_lookup_does_not_need_a_dataset() {
    let temp = tempdir().expect("create temp dir");
    cargo_bin_cmd!("metro-cli")
        .env("METRO_DATASET", temp.path().join("absent.json"))
        .env("RUST_LOG", "error")
        .args(["fare", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fare for 12.0 km: ₹40"));
}

#[test]
fn fare_table_lists_every_band() {
    cli()
        .args(["fare", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to 2 km"))
        .stdout(predicate::str::contains("over 34 km"))
        .stdout(predicate::str::contains("₹70"));
}

#[test]
fn stations_can_be_filtered_by_line() {
    cli()
        .args(["stations", "--line", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mundka"))
        .stdout(predicate::str::contains("Ashok Park Main"))
        .stdout(predicate::str::contains("Rithala").not());
}

#[test]
fn missing_dataset_reports_path() {
    let temp = tempdir().expect("create temp dir");
    let missing = temp.path().join("nowhere.json");
    cargo_bin_cmd!("metro-cli")
        .env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(&missing)
        .args(["route", "--from", "1", "--to", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.json"));
}
