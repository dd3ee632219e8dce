//! Integration tests for the crudgen binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GARAGE: &str = r#"{
    "name": "Car Garage",
    "data": { "objects": [
        { "name": "cars", "name_singular": "car",
          "structure": [
            { "name": "brand", "type": "text", "required": true, "in_list": true },
            { "name": "price", "type": "float" }
          ],
          "child_of": ["owners"] },
        { "name": "owners", "name_singular": "owner",
          "structure": [ { "name": "name", "type": "string", "in_list": true } ] }
    ] }
}"#;

const GHOST: &str = r#"{
    "name": "Garage",
    "data": { "objects": [
        { "name": "cars", "name_singular": "car", "structure": [], "child_of": ["ghost"] }
    ] }
}"#;

/// A crudgen invocation isolated from the user's config and environment.
fn crudgen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crudgen").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CRUDGEN_GENERATION__STRICT_RELATIONS")
        .env_remove("CRUDGEN_GENERATION__OUTPUT_DIR")
        .env_remove("CRUDGEN_OUTPUT__FORMAT")
        .arg("--no-color");
    cmd
}

fn write_project(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_is_usage_error() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path()).assert().failure().code(2);
}

#[test]
fn generate_writes_application() {
    let temp = TempDir::new().unwrap();
    let project = write_project(temp.path(), "garage.json", GARAGE);
    let out = temp.path().join("site");

    crudgen(temp.path())
        .arg("generate")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated"));

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<title>Car Garage</title>"));
    assert!(index.contains("app/components/owners/owners.services.js"));

    let edit = fs::read_to_string(out.join("app/components/cars/views/cars.edit.html")).unwrap();
    assert!(edit.contains("ng-model=\"vm.car.owner_id\""));
    assert!(edit.contains("step=\"0.01\""));
    assert!(!edit.contains("{%"));

    assert!(!out.join("app/components/base").exists());
}

#[test]
fn generate_defaults_to_camel_case_directory() {
    let temp = TempDir::new().unwrap();
    let project = write_project(temp.path(), "garage.json", GARAGE);

    crudgen(temp.path())
        .arg("generate")
        .arg(&project)
        .assert()
        .success();

    assert!(temp.path().join("carGarage/index.html").is_file());
}

#[test]
fn existing_output_needs_force() {
    let temp = TempDir::new().unwrap();
    let project = write_project(temp.path(), "garage.json", GARAGE);
    let out = temp.path().join("site");
    fs::create_dir(&out).unwrap();

    crudgen(temp.path())
        .arg("generate")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    crudgen(temp.path())
        .arg("generate")
        .arg(&project)
        .arg("-o")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();
    assert!(out.join("app/app.states.js").is_file());
}

#[test]
fn rerun_with_force_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let project = write_project(temp.path(), "garage.json", GARAGE);
    let out = temp.path().join("site");
    let states = out.join("app/app.states.js");

    crudgen(temp.path())
        .args(["generate", "garage.json", "-o", "site"])
        .assert()
        .success();
    let first = fs::read(&states).unwrap();

    crudgen(temp.path())
        .arg("generate")
        .arg(&project)
        .args(["-o", "site", "--force"])
        .assert()
        .success();
    assert_eq!(fs::read(&states).unwrap(), first);
}

#[test]
fn dry_run_lists_files_and_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "garage.json", GARAGE);

    crudgen(temp.path())
        .args(["--output-format", "plain", "generate", "garage.json", "-o", "site", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("app/components/cars/views/cars.edit.html"));

    assert!(!temp.path().join("site").exists());
}

#[test]
fn dry_run_json_summary() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "ghost.json", GHOST);

    let assert = crudgen(temp.path())
        .args(["--output-format", "json", "generate", "ghost.json", "--dry-run"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["dry_run"], true);
    assert_eq!(summary["unresolved_relations"][0][1], "ghost");
    assert!(
        summary["files"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f == "app/components/cars/cars.edit.controller.js")
    );
}

#[test]
fn unresolved_relation_warns_in_permissive_mode() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "ghost.json", GHOST);

    crudgen(temp.path())
        .args(["generate", "ghost.json", "-o", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'ghost' is not declared"));
}

#[test]
fn strict_generation_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "ghost.json", GHOST);

    crudgen(temp.path())
        .args(["generate", "ghost.json", "-o", "site", "--strict"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ghost"));

    assert!(!temp.path().join("site").exists());
}

#[test]
fn missing_project_is_not_found() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path())
        .args(["generate", "nope.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_project_is_user_error() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "broken.json", "{ \"name\": ");

    crudgen(temp.path())
        .args(["generate", "broken.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn missing_templates_directory_is_not_found() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "garage.json", GARAGE);

    crudgen(temp.path())
        .args(["generate", "garage.json", "--templates", "no-such-base"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn check_reports_warnings_and_strict_errors() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "ghost.json", GHOST);

    crudgen(temp.path())
        .args(["check", "ghost.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost"))
        .stdout(predicate::str::contains("valid"));

    crudgen(temp.path())
        .args(["check", "ghost.json", "--strict"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn strict_relations_from_config_file() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "ghost.json", GHOST);
    fs::write(
        temp.path().join("crudgen.toml"),
        "[generation]\nstrict_relations = true\n",
    )
    .unwrap();

    crudgen(temp.path())
        .args(["-c", "crudgen.toml", "check", "ghost.json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_config_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path())
        .args(["-c", "absent.toml", "config", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn init_then_config_get() {
    let temp = TempDir::new().unwrap();

    crudgen(temp.path())
        .args(["-c", "crudgen.toml", "init"])
        .assert()
        .success();
    assert!(temp.path().join("crudgen.toml").is_file());

    crudgen(temp.path())
        .args(["-c", "crudgen.toml", "config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = \"auto\""));

    crudgen(temp.path())
        .args(["-c", "crudgen.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen.toml"));
}

#[test]
fn unknown_config_key_is_config_error() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path())
        .args(["config", "get", "nope.nothing"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    crudgen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudgen"));
}
