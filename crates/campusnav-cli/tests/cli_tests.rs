//! Integration tests for the dataset inspection commands.
//!
//! These tests use `assert_cmd` to verify:
//! - summary, nodes, edges and buildings output in text and JSON
//! - data directory resolution through the flag and environment variable
//! - exit codes for missing or malformed datasets

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Path to the campus fixture directory.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav");
    cmd.env("RUST_LOG", "error").env_remove("CAMPUSNAV_DATA_DIR");
    cmd
}

#[test]
fn summary_reports_counts() {
    cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Graph: nodes=9, arcs=18 (directed=false, unit=meter, schema=1.0.0)",
        ))
        .stdout(predicate::str::contains("Buildings: 6"));
}

#[test]
fn summary_json_is_parseable() {
    let output = cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .args(["--format", "json", "summary"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["nodes"], 9);
    assert_eq!(value["arcs"], 18);
    assert_eq!(value["directed"], false);
    assert_eq!(value["buildings"], 6);
}

#[test]
fn data_dir_from_environment() {
    cli()
        .env("CAMPUSNAV_DATA_DIR", fixture_path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes=9"));
}

#[test]
fn nodes_lists_flags() {
    cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes (9):"))
        .stdout(predicate::str::contains("BH-MG        Bima Hall main gate [stair]"))
        .stdout(predicate::str::contains("BH-SG        Bima Hall side gate [curb]"))
        .stdout(predicate::str::contains("[no location]"));
}

#[test]
fn buildings_lists_gates() {
    cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .arg("buildings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buildings (6):"))
        .stdout(predicate::str::contains(
            "BimaHall     Bima Hall (gates: BH-MG, BH-SG, BH-BG)",
        ))
        .stdout(predicate::str::contains("Pavilion (gates: none)"));
}

#[test]
fn buildings_json_keeps_order() {
    let output = cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .args(["--format", "json", "buildings"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let ids: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|b| b["id"].as_str().expect("id"))
        .collect();
    assert_eq!(
        ids,
        vec!["BimaHall", "ChambitHall", "Library", "Kiosk", "Annex", "Pavilion"]
    );
}

#[test]
fn edges_lists_every_arc() {
    cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .arg("edges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arcs (18):"))
        .stdout(predicate::str::contains("  PLZ -> BH-MG  34.5 m [stair] (geometry: 2 points)"))
        .stdout(predicate::str::contains("  BH-MG -> PLZ  34.5 m [stair] (geometry: 2 points)"))
        .stdout(predicate::str::contains("  RMP -> CH-MG  54.7 m [curb]"));
}

#[test]
fn edges_json_reverses_geometry_on_reverse_arcs() {
    let output = cli()
        .arg("--data-dir")
        .arg(fixture_path())
        .args(["--format", "json", "edges"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let arcs = value.as_array().expect("array");
    assert_eq!(arcs.len(), 18);

    let find = |from: &str, to: &str| {
        arcs.iter()
            .find(|arc| arc["from"] == from && arc["to"] == to)
            .unwrap_or_else(|| panic!("arc {from} -> {to}"))
    };
    let forward = find("PLZ", "BH-MG");
    let reverse = find("BH-MG", "PLZ");

    assert_eq!(forward["geometry"][0]["lat"], 37.6193);
    assert_eq!(forward["geometry"][1]["lat"], 37.61941);
    assert_eq!(reverse["geometry"][0]["lat"], 37.61941);
    assert_eq!(reverse["geometry"][1]["lat"], 37.6193);
    assert_eq!(forward["weight"], reverse["weight"]);
    assert_eq!(reverse["has_stair"], true);
    assert!(reverse.get("target").is_none());
}

#[test]
fn missing_dataset_fails() {
    let temp = TempDir::new().expect("create temp dir");
    cli()
        .arg("--data-dir")
        .arg(temp.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load campus dataset"))
        .stderr(predicate::str::contains("campus dataset not found"));
}

#[test]
fn malformed_dataset_fails() {
    let temp = TempDir::new().expect("create temp dir");
    fs::write(
        temp.path().join("node.json"),
        r#"[ { "id": "A", "lat": 0.0, "lng": 0.0 } ]"#,
    )
    .expect("write nodes");
    fs::write(
        temp.path().join("edge.json"),
        r#"[ { "from": "A", "to": "B" } ]"#,
    )
    .expect("write edges");

    cli()
        .arg("--data-dir")
        .arg(temp.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("edge to references unknown node: B"));
}
