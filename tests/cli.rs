//! End-to-end tests for the gmake binary

mod common;

use assert_cmd::Command;
use common::create_test_config;
use gmake::cli::App;
use predicates::prelude::*;

#[test]
fn test_echo_with_vars() {
    let (dir, path) = create_test_config(
        r#"
vars:
  greeting: hi
hello: "@echo {{greeting}} world"
"#,
    );

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("@echo: hi world"));
}

#[test]
fn test_verbose_reports_skipped_comments() {
    let (dir, path) = create_test_config(
        r#"
build: |
  # compile step
  @echo done
"#,
    );

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .arg("-v")
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping comment: # compile step"));

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping comment").not());
}

#[test]
fn test_default_config_name() {
    let (dir, _path) = create_test_config("hello: \"@echo from default\"\n");

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("@echo: from default"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .args(["-c", "nope.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_launch_failure_exit_code() {
    let (dir, path) = create_test_config(
        r#"
build: |
  gmake-definitely-not-installed
  @echo unreachable
"#,
    );

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unreachable").not())
        .stderr(predicate::str::contains("gmake-definitely-not-installed"));
}

#[test]
#[cfg(unix)]
fn test_check_status_flag() {
    let (dir, path) = create_test_config("build: |\n  false\n  @echo after\n");

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("@echo: after"));

    Command::cargo_bin("gmake")
        .unwrap()
        .current_dir(dir.path())
        .arg("-c")
        .arg(&path)
        .arg("--check-status")
        .assert()
        .failure()
        .stdout(predicate::str::contains("@echo: after").not());
}

#[test]
fn test_app_loads_config() {
    let (_dir, path) = create_test_config("a: \"@echo a\"\nb: \"@echo b\"\n");
    let app = App::with_config_file(path).unwrap();
    assert_eq!(app.config().block_names(), vec!["a", "b"]);
}
