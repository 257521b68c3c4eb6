//! Integration tests for the `autostack` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config file and environment.
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

/// A config file whose frontend tool is `script`.
#[cfg(unix)]
fn tool_config(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let tool = dir.join("fake-vite.sh");
    fs::write(&tool, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

    let config = dir.join("autostack.toml");
    fs::write(
        &config,
        format!(
            "[frontend]\nprogram = \"{}\"\nargs = []\n",
            tool.display()
        ),
    )
    .unwrap();
    config
}

#[test]
fn help_lists_init() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_help_lists_options() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--backend"))
        .stdout(predicate::str::contains("--frontend"))
        .stdout(predicate::str::contains("--with-docker"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn init_creates_minimal_project() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'shop' created"));

    let root = tmp.path().join("shop");
    assert!(fs::read_to_string(root.join("README.md")).unwrap().contains("shop"));
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("backend/main.py").is_file());
    assert!(root.join("backend/requirements.txt").is_file());
    assert!(!root.join("Dockerfile").exists());
    assert!(!root.join("client").exists());
}

#[test]
fn init_into_output_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("code")).unwrap();
    autostack(tmp.path())
        .args(["init", "shop", "--output", "code", "--with-ci"])
        .assert()
        .success();

    assert!(tmp.path().join("code/shop/.github/workflows/ci.yml").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args([
            "init",
            "shop",
            "--frontend",
            "react",
            "--with-docker",
            "--with-tests",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("Dockerfile.frontend"));

    assert!(!tmp.path().join("shop").exists());
}

#[test]
fn json_output_is_the_report() {
    let tmp = TempDir::new().unwrap();
    let out = autostack(tmp.path())
        .args(["--output-format", "json", "init", "shop", "--with-docker"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["project_name"], "shop");
    assert_eq!(report["aborted"], false);
    let steps: Vec<&str> = report["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["step"].as_str().unwrap())
        .collect();
    assert_eq!(steps, ["root", "common_files", "backend", "docker"]);
}

#[test]
fn vue_is_accepted_with_a_warning() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .args(["init", "shop", "--frontend", "vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not supported yet"));

    assert!(!tmp.path().join("shop/client").exists());
}

#[test]
fn frontend_default_comes_from_environment() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path())
        .env("AUTOSTACK_DEFAULTS__FRONTEND", "vue")
        .args(["init", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frontend 'vue'"));
}

#[test]
fn tests_twice_appends_pytest_twice() {
    let tmp = TempDir::new().unwrap();
    for _ in 0..2 {
        autostack(tmp.path())
            .args(["init", "shop", "--with-tests"])
            .assert()
            .success();
    }

    let requirements = fs::read_to_string(tmp.path().join("shop/backend/requirements.txt")).unwrap();
    assert_eq!(requirements.matches("pytest").count(), 2);
    assert!(tmp.path().join("shop/backend/tests/test_main.py").is_file());
}

#[cfg(unix)]
#[test]
fn react_with_docker_uses_frontend_tool() {
    let tmp = TempDir::new().unwrap();
    let config = tool_config(tmp.path(), "mkdir -p \"$1\"");

    autostack(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["init", "shop", "--frontend", "react", "--with-docker"])
        .assert()
        .success();

    let root = tmp.path().join("shop");
    assert!(root.join("client/Dockerfile.frontend").is_file());
    assert!(
        fs::read_to_string(root.join("docker-compose.yml"))
            .unwrap()
            .contains("frontend:")
    );
}

#[test]
fn dry_run_after_real_run_previews_overwrites() {
    let tmp = TempDir::new().unwrap();
    autostack(tmp.path()).args(["init", "shop"]).assert().success();

    let out = autostack(tmp.path())
        .args(["--output-format", "json", "init", "shop", "--with-tests", "--dry-run"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let actions: Vec<(String, String)> = report["steps"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|s| s["manifest"].as_array().unwrap().iter())
        .map(|e| {
            (
                e["path"].as_str().unwrap().to_string(),
                e["action"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert!(actions.iter().any(|(p, a)| p.ends_with("README.md") && a == "overwrote"));
    assert!(
        actions
            .iter()
            .any(|(p, a)| p.ends_with("requirements.txt") && a == "appended")
    );

    let requirements = fs::read_to_string(tmp.path().join("shop/backend/requirements.txt")).unwrap();
    assert!(!requirements.contains("pytest"));
}
