//! End-to-end tests for the `gastos` binary against a temporary data directory

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gastos(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gastos").unwrap();
    cmd.env("GASTOS_DATA_DIR", dir.path())
        .env_remove("GASTOS_TOKEN")
        .env_remove("GASTOS_API_URL");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_empty_snapshot_lists_nothing() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["expense", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn test_monthly_report_without_income() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["report", "monthly", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All expenses"))
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn test_config_show_and_set_url() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["config", "set-url", "https://gastos.example.com/"])
        .assert()
        .success();

    gastos(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://gastos.example.com"));
}

#[test]
fn test_config_rejects_non_http_url() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["config", "set-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported URL scheme"));
}

#[test]
fn test_mutation_without_token_fails() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["expense", "add", "Mercado", "120.50", "-c", "Alimentação"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GASTOS_TOKEN"));
}

#[test]
fn test_sync_without_token_fails() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn test_audit_starts_empty() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet."));
}

#[test]
fn test_export_all_writes_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("snapshot.json");

    gastos(&dir)
        .args(["export", "all"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot exported to"));

    let contents = std::fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert_eq!(json["metadata"]["expense_count"], 0);
}

#[test]
fn test_compare_without_guest_fails() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["report", "compare", "--all"])
        .assert()
        .failure();
}

#[test]
fn test_api_url_override_is_not_saved() {
    let dir = TempDir::new().unwrap();
    gastos(&dir)
        .args(["--api-url", "http://other.example:9", "config", "set-guest", "bob"])
        .assert()
        .success();

    gastos(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"))
        .stdout(predicate::str::contains("http://127.0.0.1:8000"))
        .stdout(predicate::str::contains("other.example").not());
}

#[test]
fn test_invalid_date_format_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    gastos(&dir)
        .args(["report", "monthly", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}
