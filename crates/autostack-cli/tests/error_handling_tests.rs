//! Tests for error handling, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn autostack(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("autostack").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("AUTOSTACK_DEFAULTS__BACKEND")
        .env_remove("AUTOSTACK_DEFAULTS__FRONTEND")
        .env_remove("AUTOSTACK_FRONTEND__PROGRAM")
        .env_remove("AUTOSTACK_FRONTEND__ARGS");
    cmd
}

#[test]
fn test_error_invalid_project_name() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "nested/shop"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_error_unknown_backend() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "shop", "--backend", "django"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fastapi"));
}

#[test]
fn test_error_strict_rejects_unimplemented_frontend() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "shop", "--frontend", "vue", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("vue"))
        .stderr(predicate::str::contains("--strict"));

    assert!(!tmp.path().join("shop").exists());
}

#[test]
fn test_error_strict_rejects_unimplemented_backend() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "shop", "--backend", "flask", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("flask"));
}

#[test]
fn test_error_missing_output_directory_aborts() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "shop", "--output", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not create project directory"));

    assert!(!tmp.path().join("missing").exists());
}

#[test]
fn test_error_missing_config_file() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["--config", "nope.toml", "init", "shop"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_invalid_config_default() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .env("AUTOSTACK_DEFAULTS__BACKEND", "django")
        .args(["init", "shop"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.backend"));

    assert!(!tmp.path().join("shop").exists());
}

#[test]
fn test_error_quiet_conflicts_with_verbose() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["-q", "-v", "init", "shop"])
        .assert()
        .code(2);
}

#[cfg(unix)]
#[test]
fn test_error_failing_frontend_tool_keeps_earlier_files() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let tool = tmp.path().join("broken-vite.sh");
    fs::write(&tool, "#!/bin/sh\necho 'npm ERR! network down' >&2\nexit 1\n").unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

    let config = tmp.path().join("autostack.toml");
    fs::write(
        &config,
        format!("[frontend]\nprogram = \"{}\"\nargs = []\n", tool.display()),
    )
    .unwrap();

    autostack(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["init", "shop", "--frontend", "react", "--with-docker"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("network down"))
        .stderr(predicate::str::contains("Generation incomplete"));

    let root = tmp.path().join("shop");
    assert!(root.join("README.md").is_file());
    assert!(root.join("backend/main.py").is_file());
    assert!(root.join("docker-compose.yml").is_file());
    assert!(!root.join("client/Dockerfile.frontend").exists());
}
