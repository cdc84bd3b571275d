//! Script combination end to end.

use crate::common::TestProject;

/// Scripts always pull in the kernel first, then requires in depth order.
#[test]
fn kernel_then_required_module_then_entry() {
    let project = TestProject::new().unwrap();
    project.write("app.js", "var app = {};\n").unwrap();
    project.write("util/sub.js", "var sub = 2;\n").unwrap();
    project
        .write("a.js", "app.require(\"util.sub\");\nvar a = 1;\n")
        .unwrap();

    project
        .combiner()
        .arg("a.js")
        .assert()
        .success()
        .stdout("var app = {};\nvar sub = 2;\nvar a = 1;\n");
}

#[test]
fn kernel_gains_no_dependencies_and_sorts_first() {
    let project = TestProject::new().unwrap();
    // the kernel mentions require and the class helper but must not
    // depend on anything
    project
        .write("app.js", "new app.Class({});\nvar app = {};\n")
        .unwrap();
    project.write("main.js", "var m = 1;\n").unwrap();

    project
        .combiner()
        .arg("main.js")
        .assert()
        .success()
        .stdout("new app.Class({});\nvar app = {};\nvar m = 1;\n");
}

#[test]
fn class_usage_pulls_in_the_helper() {
    let project = TestProject::new().unwrap();
    project.write("app.js", "var app = {};\n").unwrap();
    project
        .write("app/_kernel/Class.js", "app.Class = function(){};\n")
        .unwrap();
    project
        .write("widget.js", "var W = new app.Class({});\n")
        .unwrap();

    project
        .combiner()
        .arg("widget.js")
        .assert()
        .success()
        .stdout("var app = {};\napp.Class = function(){};\nvar W = new app.Class({});\n");
}

#[test]
fn guarded_require_assignment_is_neutralized() {
    let project = TestProject::new().unwrap();
    project.write("app.js", "var app = {};\n").unwrap();
    project
        .write(
            "loader.js",
            "app.require = function(name) {\n  load(name);\n};\nvar x = 1;\n",
        )
        .unwrap();

    project
        .combiner()
        .arg("loader.js")
        .assert()
        .success()
        .stdout("var app = {};\napp.require = function(){};\nvar x = 1;\n");
}

#[test]
fn custom_namespace_is_honored() {
    let project = TestProject::new().unwrap();
    project.write("fx.js", "var fx = {};\n").unwrap();
    project.write("ui/grid.js", "var grid = 1;\n").unwrap();
    project
        .write("main.js", "fx.require(\"ui.grid\");\nvar m = 1;\n")
        .unwrap();

    project
        .combiner()
        .args(["--namespace", "fx", "--type", "js", "main.js"])
        .assert()
        .success()
        .stdout("var fx = {};\nvar grid = 1;\nvar m = 1;\n");
}

#[test]
fn duplicate_requires_emit_the_module_once() {
    let project = TestProject::new().unwrap();
    project.write("app.js", "var app = {};\n").unwrap();
    project.write("util/sub.js", "var sub = 2;\n").unwrap();
    project
        .write(
            "a.js",
            "app.require(\"util.sub\");\napp.require(\"util.sub\");\nvar a = 1;\n",
        )
        .unwrap();

    let assert = project.combiner().arg("a.js").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("var sub = 2;").count(), 1);
}
