use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/airports.dot")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    cargo_bin_cmd!("flightfinder-cli")
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("FLIGHTFINDER_DATASET")
        .arg("--dataset")
        .arg(fixture_path());
    cmd
}

#[test]
fn cheapest_route_is_printed() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("San Francisco")
        .arg("--to")
        .arg("Tokyo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from San Francisco to Tokyo (2 hops):",
        ))
        .stdout(predicate::str::contains("STOP  Amsterdam (Netherlands) +1,230"))
        .stdout(predicate::str::contains("Total cost: 2,010"));
}

#[test]
fn airport_names_ignore_case() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("chicago")
        .arg("--to")
        .arg("NEW YORK");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 500"));
}

#[test]
fn basic_format_outputs_minimal_path() {
    let mut cmd = prepare_command();
    cmd.arg("--format")
        .arg("basic")
        .arg("route")
        .arg("--from")
        .arg("Tokyo")
        .arg("--to")
        .arg("Liberia")
        .arg("--max-nodes")
        .arg("3");

    cmd.assert()
        .success()
        .stdout(predicate::eq("+ Tokyo\n| Amsterdam\n- Liberia\ncost 2180\n"));
}

#[test]
fn exact_nodes_forces_longer_route() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Tokyo")
        .arg("--to")
        .arg("Liberia")
        .arg("--exact-nodes")
        .arg("4")
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["cost"], 2900.0);
    assert_eq!(value["bound"]["type"], "exactly");
    assert_eq!(value["bound"]["nodes"], 4);
    let names: Vec<_> = value["steps"]
        .as_array()
        .expect("steps array")
        .iter()
        .map(|step| step["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Tokyo", "Chicago", "New York", "Liberia"]);
}

#[test]
fn node_bound_flags_are_exclusive() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Tokyo")
        .arg("--to")
        .arg("Liberia")
        .arg("--max-nodes")
        .arg("3")
        .arg("--exact-nodes")
        .arg("3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_airport_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Chicgo")
        .arg("--to")
        .arg("Tokyo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown airport 'Chicgo'"))
        .stderr(predicate::str::contains("Did you mean 'Chicago'?"));
}

#[test]
fn tight_bound_suggests_raising_it() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Tokyo")
        .arg("--to")
        .arg("Liberia")
        .arg("--max-nodes")
        .arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("visiting at most 2 airports"))
        .stderr(predicate::str::contains("--max-nodes"));
}

#[test]
fn unreachable_airport_reports_no_route() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Reykjavik")
        .arg("--to")
        .arg("Tokyo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between Reykjavik (Iceland) and Tokyo (Japan).",
        ));
}

#[test]
fn nearest_in_region_is_printed() {
    let mut cmd = prepare_command();
    cmd.arg("nearest")
        .arg("--from")
        .arg("Tokyo")
        .arg("--region")
        .arg("USA");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cheapest airport in USA from Tokyo:"))
        .stdout(predicate::str::contains("GOAL  Chicago (USA)"))
        .stdout(predicate::str::contains("Total cost: 1,500"));
}

#[test]
fn nearest_basic_format_is_one_line() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "basic", "nearest", "--from", "San Francisco"])
        .args(["--region", "Netherlands"]);

    cmd.assert().success().stdout(predicate::eq(
        "Cheapest airport in Netherlands from San Francisco: Amsterdam (cost 1230)\n",
    ));
}

#[test]
fn nearest_failures_are_explained() {
    let mut cmd = prepare_command();
    cmd.args(["nearest", "--from", "San Francisco", "--region", "Iceland"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "No airport in region 'Iceland' can be reached from San Francisco (USA).",
        ));

    let mut cmd = prepare_command();
    cmd.args(["nearest", "--from", "San Francisco", "--region", "Mars"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No airports exist in region 'Mars'"));
}

#[test]
fn airports_lists_every_airport() {
    let mut cmd = prepare_command();
    cmd.arg("airports");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Reykjavik"))
        .stdout(predicate::str::contains("Costa Rica"))
        .stdout(predicate::str::contains("7 airports"));
}

#[test]
fn airports_json_includes_route_counts() {
    let mut cmd = prepare_command();
    cmd.args(["airports", "--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let rows = value.as_array().expect("array of airports");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["name"], "San Francisco");
    assert_eq!(rows[0]["routes"], 2);
    assert_eq!(rows[4]["name"], "Tokyo");
    assert_eq!(rows[4]["routes"], 3);
    assert_eq!(rows[6]["routes"], 0);
}

#[test]
fn dataset_can_come_from_environment() {
    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env("FLIGHTFINDER_DATASET", fixture_path())
        .args(["route", "--from", "Chicago", "--to", "Liberia"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 1,400"));
}

#[test]
fn missing_dataset_fails_with_context() {
    let temp_dir = tempdir().expect("create temp dir");
    let missing = temp_dir.path().join("absent.dot");

    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(&missing)
        .arg("airports");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset from"))
        .stderr(predicate::str::contains("dataset not found"));
}

#[test]
fn ambiguous_airport_name_is_reported() {
    let temp_dir = tempdir().expect("create temp dir");
    let dataset = temp_dir.path().join("paris.dot");
    std::fs::write(
        &dataset,
        "graph g {\n  p1 [label=\"Paris,France\"];\n  p2 [label=\"Paris,USA\"];\n  dal [label=\"Dallas,USA\"];\n  p2 -> dal [cost=200];\n}\n",
    )
    .expect("write dataset");

    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--dataset")
        .arg(&dataset)
        .arg("route")
        .arg("--from")
        .arg("Paris")
        .arg("--to")
        .arg("Dallas");

    cmd.assert().failure().stderr(predicate::str::contains(
        "Airport name 'Paris' matches several airports: Paris (France), Paris (USA).",
    ));
}

#[test]
fn dataset_without_header_is_rejected() {
    let temp_dir = tempdir().expect("create temp dir");
    let dataset = temp_dir.path().join("headless.dot");
    std::fs::write(&dataset, "  a [label=\"Alpha,North\"];\n}\n").expect("write dataset");

    let mut cmd = cli();
    cmd.env("RUST_LOG", "error")
        .arg("--dataset")
        .arg(&dataset)
        .arg("airports");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse dataset at line 1"));
}
