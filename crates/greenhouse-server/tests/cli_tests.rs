use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command isolated from GREENHOUSE_* variables
fn greenhouse_cmd() -> Command {
    let mut cmd = Command::cargo_bin("greenhouse").expect("Failed to find greenhouse binary");
    for var in [
        "GREENHOUSE_DATABASE_FILE",
        "GREENHOUSE_HOST",
        "GREENHOUSE_PORT",
        "GREENHOUSE_PAGE_SIZE",
        "GREENHOUSE_CORS_ORIGINS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help_output() {
    greenhouse_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-file"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--page-size"))
        .stdout(predicate::str::contains("--cors-origin"));
}

#[test]
fn test_cli_version_output() {
    greenhouse_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("greenhouse"));
}

#[test]
fn test_cli_invalid_port() {
    greenhouse_cmd()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn test_cli_zero_page_size_is_rejected() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    greenhouse_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--page-size",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize greenhouse"))
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_cli_port_in_use() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let occupied = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let port = occupied.local_addr().unwrap().port().to_string();

    greenhouse_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--host",
            "127.0.0.1",
            "--port",
            &port,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to bind"));

    // The schema is created before the listener is bound.
    assert!(db_path.exists());
}

#[test]
fn test_cli_database_file_from_env() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("env_test.db");

    let occupied = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let port = occupied.local_addr().unwrap().port().to_string();

    greenhouse_cmd()
        .env("GREENHOUSE_DATABASE_FILE", &db_path)
        .env("GREENHOUSE_PORT", &port)
        .assert()
        .failure();

    assert!(db_path.exists());
}
