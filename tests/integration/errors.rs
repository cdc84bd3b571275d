//! Error scenarios: missing files, cycles, and exit behavior.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn mutual_cycle_fails_naming_both_files_and_writes_nothing() {
    let project = TestProject::new().unwrap();
    project.write("app.js", "var app = {};\n").unwrap();
    project.write("a.js", "app.require(\"b\");\nvar a = 1;\n").unwrap();
    project.write("b.js", "app.require(\"a\");\nvar b = 2;\n").unwrap();
    let out = project.root().join("bundle.js");

    project
        .combiner()
        .args(["-o", out.to_str().unwrap(), "a.js"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("a.js").and(predicate::str::contains("b.js")))
        .stderr(predicate::str::contains("circular"));

    assert!(!out.exists(), "no output file may be left behind");
}

#[test]
fn missing_dependency_names_path_and_referencing_file() {
    let project = TestProject::new().unwrap();
    project
        .write("a.css", "@import url(\"missing.css\");\n.a{}\n")
        .unwrap();

    project
        .combiner()
        .arg("a.css")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("missing.css").and(predicate::str::contains("a.css")));
}

#[test]
fn missing_entry_file_is_fatal() {
    let project = TestProject::new().unwrap();

    project
        .combiner()
        .arg("nope.css")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("nope.css"));
}

#[test]
fn missing_kernel_file_is_reported_for_scripts() {
    let project = TestProject::new().unwrap();
    project.write("a.js", "var a = 1;\n").unwrap();

    project
        .combiner()
        .arg("a.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("app.js").and(predicate::str::contains("a.js")));
}

#[test]
fn three_file_cycle_is_still_fatal() {
    let project = TestProject::new().unwrap();
    project.write("app.js", "var app = {};\n").unwrap();
    project.write("a.js", "app.require(\"b\");\n").unwrap();
    project.write("b.js", "app.require(\"c\");\n").unwrap();
    project.write("c.js", "app.require(\"a\");\n").unwrap();

    project
        .combiner()
        .arg("a.js")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("circular"));
}

#[test]
fn unknown_flag_fails_with_usage() {
    let project = TestProject::new().unwrap();
    project.write("a.css", ".a{}\n").unwrap();

    project
        .combiner()
        .args(["--bogus", "a.css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("usage")));
}

#[test]
fn invalid_utf8_input_is_a_decode_error() {
    let project = TestProject::new().unwrap();
    project.write_bytes("bad.css", &[0xff, 0xfe, 0x0a]).unwrap();

    project
        .combiner()
        .arg("bad.css")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.css"));
}
