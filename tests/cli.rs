//! End-to-end CLI tests
//!
//! Each test runs the real binary against its own temporary data directory
//! via `MONITY_DATA_DIR`. Passwords go through the `--password` flag so no
//! test ever blocks on a prompt.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSWORD: &str = "Haslo123!";

fn monity(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("monity").unwrap();
    cmd.env("MONITY_DATA_DIR", dir.path());
    cmd.env_remove("MONITY_PASSWORD");
    cmd.env_remove("MONITY_OLD_PASSWORD");
    cmd
}

/// init + register, leaving a logged-in session behind
fn setup_account(dir: &TempDir) {
    monity(dir).arg("init").assert().success();
    monity(dir)
        .args([
            "register",
            "anna@example.com",
            "--name",
            "Anna Kowalska",
            "--password",
            PASSWORD,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Anna Kowalska!"));
}

#[test]
fn init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();

    monity(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"))
        .stdout(predicate::str::contains("Jedzenie"));

    // Re-running init keeps existing data
    monity(&dir).arg("init").assert().success();
}

#[test]
fn register_whoami_logout_flow() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("anna@example.com"));

    monity(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    monity(&dir)
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[UNAUTHORIZED]"));
}

#[test]
fn login_rejects_wrong_password() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);
    monity(&dir).arg("logout").assert().success();

    monity(&dir)
        .args(["login", "anna@example.com", "--password", "Zle123!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[INVALID_CREDENTIALS]"));

    monity(&dir)
        .args(["login", "anna@example.com", "--password", PASSWORD])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as"));
}

#[test]
fn commands_require_login() {
    let dir = TempDir::new().unwrap();
    monity(&dir).arg("init").assert().success();

    monity(&dir)
        .args(["expense", "add", "10", "Jedzenie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[UNAUTHORIZED]"));

    monity(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[UNAUTHORIZED]"));
}

#[test]
fn expense_lifecycle() -> Result<()> {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    let output = monity(&dir)
        .args([
            "expense",
            "add",
            "25,50",
            "Jedzenie",
            "--description",
            "Obiad",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 25.50 zł in Jedzenie"))
        .get_output()
        .clone();

    // The confirmation carries the short ID; later commands accept it
    let stdout = String::from_utf8(output.stdout)?;
    let id = stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("ID: "))
        .expect("add prints the new ID")
        .to_string();

    monity(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Obiad"))
        .stdout(predicate::str::contains("1 wydatek"));

    monity(&dir)
        .args(["expense", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Obiad"))
        .stdout(predicate::str::contains("25.50 zł"));

    monity(&dir)
        .args(["expense", "edit", &id, "--amount", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30.00 zł"));

    monity(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    monity(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nie znaleziono wydatków."));

    Ok(())
}

#[test]
fn category_delete_refused_while_referenced() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["category", "create", "Paliwo", "--color", "#f97316"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Paliwo"));

    monity(&dir)
        .args(["expense", "add", "120", "Paliwo"])
        .assert()
        .success();

    monity(&dir)
        .args(["category", "delete", "Paliwo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[FOREIGN_KEY_VIOLATION]"));
}

#[test]
fn category_list_custom_only_hides_defaults() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["category", "create", "Paliwo", "--color", "#f97316"])
        .assert()
        .success();

    monity(&dir)
        .args(["category", "list", "--custom-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paliwo"))
        .stdout(predicate::str::contains("Jedzenie").not());
}

#[test]
fn summary_and_dashboard_render() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["expense", "add", "100", "Jedzenie"])
        .assert()
        .success();
    monity(&dir)
        .args(["expense", "add", "60", "Transport"])
        .assert()
        .success();

    monity(&dir)
        .args(["summary", "--period", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Razem wydano: 160.00 zł"))
        .stdout(predicate::str::contains("Jedzenie"));

    monity(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cześć, Anna Kowalska!"));

    monity(&dir)
        .args(["trends", "--period", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jedzenie"));
}

#[test]
fn export_writes_files() -> Result<()> {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["expense", "add", "42", "Jedzenie", "--description", "Zakupy"])
        .assert()
        .success();

    let json_path = dir.path().join("export.json");
    monity(&dir)
        .args(["export"])
        .arg(&json_path)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported your data to:"));

    let json = std::fs::read_to_string(&json_path)?;
    assert!(json.contains("anna@example.com"));
    assert!(json.contains("Zakupy"));
    assert!(!json.contains("password_hash"));

    let csv_path = dir.path().join("export.csv");
    monity(&dir)
        .args(["export"])
        .arg(&csv_path)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses to:"));

    let csv = std::fs::read_to_string(&csv_path)?;
    assert!(csv.starts_with("ID,Date,Category,Amount,Description,Recorded At"));
    assert!(csv.contains("42.00"));

    Ok(())
}

#[test]
fn audit_lists_recent_changes() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["expense", "add", "15", "Transport"])
        .assert()
        .success();

    monity(&dir)
        .args(["audit", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE User"))
        .stdout(predicate::str::contains("CREATE Expense"));
}

#[test]
fn config_set_switches_locale() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["config", "set", "locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved locale = en"));

    // Seeded names render in English now
    monity(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Name"));

    monity(&dir)
        .args(["config", "set", "locale", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[INVALID_INPUT]"));
}

#[test]
fn ownership_hides_other_users_expenses() {
    let dir = TempDir::new().unwrap();
    setup_account(&dir);

    monity(&dir)
        .args(["expense", "add", "99", "Jedzenie", "--description", "Moje"])
        .assert()
        .success();

    monity(&dir)
        .args([
            "register",
            "piotr@example.com",
            "--name",
            "Piotr Nowak",
            "--password",
            PASSWORD,
        ])
        .assert()
        .success();

    // Piotr's listing is empty; Anna's expense stays hers
    monity(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nie znaleziono wydatków."));
}
