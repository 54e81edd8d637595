use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_description(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write description");
    path
}

fn readme_gen() -> Command {
    Command::cargo_bin("readme-gen").expect("binary")
}

#[test]
fn generate_renders_json_description_to_stdout() {
    let temp = TempDir::new().expect("tempdir");
    let description = write_description(
        temp.path(),
        "project.json",
        r#"{
            "projectName": "Test Project",
            "description": "This is a test project"
        }"#,
    );

    readme_gen()
        .arg("generate")
        .arg(&description)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Test Project"))
        .stdout(predicate::str::contains("This is a test project"))
        .stdout(predicate::str::contains("## Contributing"))
        .stdout(predicate::str::contains("MIT License"));
}

#[test]
fn generate_renders_toml_description() {
    let temp = TempDir::new().expect("tempdir");
    let description = write_description(
        temp.path(),
        "project.toml",
        r#"
        projectName = "Tomlet"
        description = "Reads descriptions from TOML"
        templateType = "CLI"
        includeBadges = false
        "#,
    );

    readme_gen()
        .arg("generate")
        .arg(&description)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tomlet"))
        .stdout(predicate::str::contains("## Commands"))
        .stdout(predicate::str::contains("*Documentation coming soon...*"));
}

#[test]
fn generate_writes_output_file() {
    let temp = TempDir::new().expect("tempdir");
    let description = write_description(
        temp.path(),
        "project.json",
        r#"{"projectName": "Filed", "description": "Writes to disk"}"#,
    );
    let output = temp.path().join("README.md");

    readme_gen()
        .arg("generate")
        .arg(&description)
        .args(["-o", output.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let readme = fs::read_to_string(&output).expect("read README");
    assert!(readme.contains("# Filed"));
    assert!(readme.contains("Writes to disk"));
}

#[test]
fn generate_fails_for_missing_required_fields() {
    let temp = TempDir::new().expect("tempdir");
    let description = write_description(
        temp.path(),
        "project.json",
        r#"{"projectName": "No description"}"#,
    );

    readme_gen()
        .arg("generate")
        .arg(&description)
        .assert()
        .failure()
        .stderr(predicate::str::contains("description is required"));
}

#[test]
fn generate_fails_for_unreadable_file() {
    readme_gen()
        .arg("generate")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn export_requires_a_repository_url() {
    let temp = TempDir::new().expect("tempdir");
    let description = write_description(
        temp.path(),
        "project.json",
        r#"{"projectName": "No repo", "description": "Cannot publish"}"#,
    );

    readme_gen()
        .arg("export")
        .arg(&description)
        .args(["--token", "dummy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository URL"));
}

#[test]
fn export_requires_a_token() {
    let temp = TempDir::new().expect("tempdir");
    let description = write_description(
        temp.path(),
        "project.json",
        r#"{"projectName": "X", "description": "Y"}"#,
    );

    readme_gen()
        .arg("export")
        .arg(&description)
        .env_remove("GITHUB_TOKEN")
        .assert()
        .failure();
}
