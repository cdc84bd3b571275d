//! Output sinks, separators, and charsets.

use std::fs;

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn separator_marks_each_file() {
    let project = TestProject::new().unwrap();
    project
        .write("a.css", "@import url(\"b.css\");\n.a{}\n")
        .unwrap();
    project.write("b.css", ".b{}\n").unwrap();

    project
        .combiner()
        .args(["-s", "a.css"])
        .assert()
        .success()
        .stdout("\n/*------b.css------*/\n.b{}\n\n/*------a.css------*/\n.a{}\n");
}

#[test]
fn output_file_receives_the_bundle() {
    let project = TestProject::new().unwrap();
    project
        .write("a.css", "@import url(\"b.css\");\n.a{}\n")
        .unwrap();
    project.write("b.css", ".b{}\n").unwrap();
    let out = project.root().join("bundle.css");

    project
        .combiner()
        .args(["-o", out.to_str().unwrap(), "a.css"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out).unwrap(), ".b{}\n.a{}\n");
}

#[test]
fn latin1_round_trips_high_bytes() {
    let project = TestProject::new().unwrap();
    // "café" in ISO-8859-1: the e-acute is the single byte 0xE9
    let raw = b".caf\xe9{margin:0}\n";
    project.write_bytes("a.css", raw).unwrap();

    let assert = project
        .combiner()
        .args(["--charset", "iso-8859-1", "a.css"])
        .assert()
        .success();
    assert_eq!(assert.get_output().stdout, raw.to_vec());
}

#[test]
fn unknown_charset_falls_back_to_utf8() {
    let project = TestProject::new().unwrap();
    project.write("a.css", ".a{}\n").unwrap();

    project
        .combiner()
        .args(["--charset", "ebcdic", "a.css"])
        .assert()
        .success()
        .stdout(".a{}\n")
        .stderr(predicate::str::contains("charset"));
}

#[test]
fn quiet_run_emits_only_the_bundle() {
    let project = TestProject::new().unwrap();
    project.write("a.css", ".a{}\n").unwrap();

    project
        .combiner()
        .args(["-q", "a.css"])
        .assert()
        .success()
        .stdout(".a{}\n")
        .stderr("");
}

#[test]
fn verbose_run_logs_processing_to_stderr() {
    let project = TestProject::new().unwrap();
    project.write("a.css", ".a{}\n").unwrap();

    project
        .combiner()
        .args(["-v", "a.css"])
        .assert()
        .success()
        .stdout(".a{}\n")
        .stderr(predicate::str::contains("a.css"));
}
