use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn tinait() -> Command {
    let exe = assert_cmd::cargo_bin!("tinait");
    let mut cmd = Command::new(exe);
    cmd.env_remove("TINAIT_LOG");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("JSON line"))
        .collect()
}

#[test]
fn classify_reports_every_predicate() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "small.g6", "Bw\nBg\n");

    let assert = tinait()
        .args(["classify", input.to_string_lossy().as_ref()])
        .assert()
        .success();
    let reports = json_lines(&assert.get_output().stdout);
    assert_eq!(reports.len(), 2);

    let triangle = &reports[0];
    assert_eq!(triangle["index"], 1);
    assert_eq!(triangle["order"], 3);
    assert_eq!(triangle["size"], 3);
    assert_eq!(triangle["edges"], "{{1,2},{1,3},{2,3}}");
    let values = triangle["values"].as_object().expect("values map");
    assert_eq!(values.len(), 7);
    for (key, value) in values {
        assert_eq!(value, &Value::Bool(true), "{key}");
    }

    let path = &reports[1];
    assert_eq!(path["edges"], "{{1,2},{2,3}}");
    assert_eq!(path["values"]["euler"], false);
    assert_eq!(path["values"]["closed"], true);
}

#[test]
fn classify_selected_types_only() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // The claw K1,3 and the 4-cycle.
    let input = fixture(tmp.path(), "four.g6", "Cs\nCl\n");

    let assert = tinait()
        .args(["classify", "--type", "closed", "--type", "chordal"])
        .arg(&input)
        .assert()
        .success();
    let reports = json_lines(&assert.get_output().stdout);
    assert_eq!(reports.len(), 2);

    let claw = reports[0]["values"].as_object().expect("values map");
    assert_eq!(claw.len(), 2);
    assert_eq!(claw["closed"], false);
    assert_eq!(claw["chordal"], true);

    assert_eq!(reports[1]["values"]["chordal"], false);
    assert_eq!(reports[1]["values"]["closed"], false);
}

#[test]
fn compute_invariants_by_column() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let k4 = "4 {1,2},{1,3},{1,4},{2,3},{2,4},{3,4}\n";
    let input = fixture(tmp.path(), "k4.txt", k4);

    let assert = tinait()
        .args(["compute", "--format", "list"])
        .args(["--value", "clique", "--value", "girth"])
        .arg(&input)
        .assert()
        .success();
    let reports = json_lines(&assert.get_output().stdout);
    let values = &reports[0]["values"];
    assert_eq!(values["cliqueNr"], 4);
    assert_eq!(values["maxCliques"], 1);
    assert_eq!(values["girth"], 3);
    assert!(values.get("detourNr").is_none());
}

#[test]
fn config_limits_exponential_invariants() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "k4.g6", "C~\n");
    let config = fixture(
        tmp.path(),
        "tinait.json",
        r#"{ "max_exponential_order": 3 }"#,
    );

    let assert = tinait()
        .args(["compute", "--all", "--config"])
        .arg(&config)
        .arg(&input)
        .assert()
        .success();
    let reports = json_lines(&assert.get_output().stdout);
    let values = &reports[0]["values"];
    assert!(values["cliqueNr"].is_null());
    assert!(values["detourNr"].is_null());
    assert_eq!(values["minDeg"], 3);
    assert_eq!(values["girth"], 3);
}

#[test]
fn config_selects_the_input_format() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "path.txt", "3 {1,2},{2,3}\n");
    let config = fixture(tmp.path(), "tinait.json", r#"{ "format": "list" }"#);

    let assert = tinait()
        .args(["classify", "--type", "cone", "--config"])
        .arg(&config)
        .arg(&input)
        .assert()
        .success();
    let reports = json_lines(&assert.get_output().stdout);
    assert_eq!(reports[0]["values"]["cone"], true);
}

#[test]
fn convert_between_formats() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "path.g6", "Bg\n");
    let out = tmp.path().join("path.txt");

    tinait()
        .args(["convert", "--to", "list", "--out"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success();
    let written = fs::read_to_string(&out).expect("read output");
    assert_eq!(written, "3 {1,2},{2,3}\n");

    let assert = tinait()
        .args(["convert", "--to", "adjacency"])
        .arg(&input)
        .assert()
        .success();
    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "Graph 1, order 3.\n  1 : 2;\n  2 : 1 3;\n  3 : 2;\n\n"
    );
}

#[test]
fn convert_with_closed_labeling() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let star_and_c4 = "3 {1,3},{2,3}\n4 {1,2},{2,3},{3,4},{1,4}\n";
    let input = fixture(tmp.path(), "star.txt", star_and_c4);

    let assert = tinait()
        .args(["convert", "--format", "list", "--to", "edges"])
        .args(["--labeling", "closed"])
        .arg(&input)
        .assert()
        .success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{{1,2},{3,2}}\n");
    // The 4-cycle has no closed labeling and is skipped.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("graph 2"));
}

#[test]
fn closed_labeling_skips_graphs_that_are_not_closed() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // The claw is chordal but not claw-free, so it is not closed; the path is.
    let input = fixture(tmp.path(), "claw.g6", "Cs\nBg\n");
    let ungated = fixture(tmp.path(), "tinait.json", r#"{ "gate_closed": false }"#);

    for config in [None, Some(&ungated)] {
        let mut cmd = tinait();
        cmd.args(["convert", "--to", "edges", "--labeling", "closed"]);
        if let Some(config) = config {
            cmd.arg("--config").arg(config);
        }
        let assert = cmd.arg(&input).assert().success();
        let output = assert.get_output();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "{{1,2},{2,3}}\n");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("graph 1: skipped, not closed"), "{stderr}");
    }
}

#[test]
fn cones_exports_their_bases() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "mixed.g6", "Bw\nBg\nCs\nCl\n");

    let assert = tinait().arg("cones").arg(&input).assert().success();
    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "A_\nA?\nB?\n"
    );
}

#[test]
fn single_vertex_cone_has_no_base_to_export() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "k1.g6", "@\nBw\n");

    let assert = tinait().arg("cones").arg(&input).assert().success();
    assert_eq!(String::from_utf8_lossy(&assert.get_output().stdout), "A_\n");
}

#[test]
fn malformed_record_stops_the_stream() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "broken.g6", "Bw\nB!\nBg\n");

    let assert = tinait()
        .args(["classify", "--type", "connected"])
        .arg(&input)
        .assert()
        .code(1);
    let output = assert.get_output();
    assert_eq!(json_lines(&output.stdout).len(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("g6 parse error"));
}

#[test]
fn usage_errors_exit_with_code_two() {
    tinait().args(["convert", "-"]).assert().code(2);
    tinait().args(["classify", "--bogus"]).assert().code(2);
    tinait().args(["convert", "--to", "dot"]).assert().code(2);
    tinait().arg("--help").assert().code(2);
}

#[test]
fn unknown_capability_is_an_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = fixture(tmp.path(), "one.g6", "Bw\n");

    let assert = tinait()
        .args(["classify", "--type", "planar"])
        .arg(&input)
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("unknown predicate: planar"));
}
