use std::fs;
use std::path::Path;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

macro_rules! classcopy {
    () => {
        assert_cmd::cargo::cargo_bin_cmd!("classcopy")
    };
}

fn write(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write file");
}

fn create_maven_project() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write(
        &dir.path().join("classcopy.toml"),
        br#"source-roots = ["src/main/java", "src/test/java"]
output-root = "target/classes"
root-matching = "path-segment"
"#,
    );
    write(
        &dir.path().join("src/main/java/com/acme/Greeter.java"),
        b"class Greeter {}",
    );
    write(
        &dir.path().join("target/classes/com/acme/Greeter.class"),
        b"greeter",
    );
    write(
        &dir.path().join("target/classes/com/acme/Greeter$Inner.class"),
        b"inner",
    );
    write(
        &dir.path().join("target/classes/com/acme/GreeterFactory.class"),
        b"factory",
    );
    dir
}

#[test]
fn resolve_prints_identity() {
    let project = create_maven_project();

    classcopy!()
        .args(["resolve", "src/main/java/com/acme/Greeter.java"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(contains("Package:     com/acme"))
        .stdout(contains("Base name:   Greeter"));
}

#[test]
fn resolve_reports_unmatched_file() {
    let project = create_maven_project();
    write(&project.path().join("tools/Gen.java"), b"class Gen {}");

    classcopy!()
        .args(["resolve", "tools/Gen.java"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(contains("is not under any source root"));
}

#[test]
fn resolve_json() {
    let project = create_maven_project();

    classcopy!()
        .args([
            "resolve",
            "--format",
            "json",
            "src/main/java/com/acme/Greeter.java",
        ])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(contains("\"base_name\": \"Greeter\""));
}

#[test]
fn find_lists_artifacts_without_copying() {
    let project = create_maven_project();

    classcopy!()
        .args(["find", "src/main/java/com/acme/Greeter.java"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(contains("Greeter.class"))
        .stdout(contains("Greeter$Inner.class"))
        .stdout(contains("GreeterFactory.class").not());

    assert!(
        !project
            .path()
            .join("src/main/java/com/acme/Greeter.class")
            .exists()
    );
}

#[test]
fn find_reports_missing_output_directory() {
    let project = create_maven_project();
    write(
        &project.path().join("src/test/java/org/sample/SampleTest.java"),
        b"class SampleTest {}",
    );

    classcopy!()
        .args(["find", "src/test/java/org/sample/SampleTest.java"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(contains("cannot list build output directory"));
}

#[test]
fn missing_config_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");

    classcopy!()
        .args(["resolve", "Foo.java"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("error: no classcopy.toml found"));
}
