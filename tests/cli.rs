use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn farm(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("farm").expect("bin");
    cmd.env("FARM_LEDGER_DATA_DIR", home).env_remove("RUST_LOG");
    cmd
}

fn stored(home: &Path, key: &str) -> Vec<serde_json::Value> {
    let path = home.join("data").join(format!("{}.json", key));
    let text = fs::read_to_string(path).expect("snapshot");
    serde_json::from_str(&text).expect("json")
}

fn add_feed(home: &Path) {
    farm(home)
        .args(["expense", "add", "--name", "Feed", "--amount", "25 kg", "--cost", "$40", "--animal", "pigs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: Feed $40.00 for Pigs"));
}

#[test]
fn empty_ledger_lists_nothing() {
    let home = TempDir::new().unwrap();

    farm(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout("No expenses recorded.\n");

    farm(home.path())
        .args(["sale", "list"])
        .assert()
        .success()
        .stdout("No sales recorded.\n");
}

#[test]
fn expense_add_persists_snapshot() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());

    let expenses = stored(home.path(), "farm_expenses");
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["name"], "Feed");
    assert_eq!(expenses[0]["amount"], 25.0);
    assert_eq!(expenses[0]["animal_type"], "Pigs");

    farm(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feed").and(predicate::str::contains("$40.00")));
}

#[test]
fn invalid_cost_is_rejected() {
    let home = TempDir::new().unwrap();

    farm(home.path())
        .args(["expense", "add", "--name", "Feed", "--amount", "1", "--cost", "-5", "--animal", "cow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    farm(home.path())
        .args(["expense", "add", "--name", "Feed", "--amount", "lots", "--cost", "5", "--animal", "cow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity"));
}

#[test]
fn unknown_animal_is_a_usage_error() {
    let home = TempDir::new().unwrap();

    farm(home.path())
        .args(["expense", "add", "--name", "Feed", "--amount", "1", "--cost", "5", "--animal", "llama"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown animal"));
}

#[test]
fn sale_other_category_needs_name() {
    let home = TempDir::new().unwrap();

    farm(home.path())
        .args(["sale", "add", "--category", "other", "--animal", "horse", "--amount", "1", "--cost", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category name"));

    farm(home.path())
        .args([
            "sale", "add", "--category", "other", "--other-name", "Manure", "--animal", "horse",
            "--amount", "1", "--cost", "80", "--buyer", "",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded sale: Manure $80.00"));

    let sales = stored(home.path(), "farm_sales");
    assert_eq!(sales[0]["other_category_name"], "Manure");
    assert!(sales[0]["buyer"].is_null());
}

#[test]
fn edit_and_delete_expense() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());
    let id = stored(home.path(), "farm_expenses")[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    farm(home.path())
        .args(["expense", "edit", &id, "--cost", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost:     $45.00"));

    let expenses = stored(home.path(), "farm_expenses");
    assert_eq!(expenses[0]["cost"], 45.0);
    assert_eq!(expenses[0]["id"], id.as_str());

    farm(home.path())
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));
    assert_eq!(stored(home.path(), "farm_expenses").len(), 1);

    farm(home.path())
        .args(["expense", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));
    assert!(stored(home.path(), "farm_expenses").is_empty());
}

#[test]
fn edit_unknown_id_fails() {
    let home = TempDir::new().unwrap();

    farm(home.path())
        .args(["sale", "edit", "sal-00000000", "--cost", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sale not found"));
}

#[test]
fn stats_show_totals_and_top_groups() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());
    farm(home.path())
        .args(["sale", "add", "--category", "eggs", "--animal", "chicken", "--amount", "30 pcs", "--cost", "12.5"])
        .assert()
        .success();

    farm(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Day\n")
                .and(predicate::str::contains("$12.50"))
                .and(predicate::str::contains("-$27.50"))
                .and(predicate::str::contains("Pigs"))
                .and(predicate::str::contains("Eggs")),
        );

    let output = farm(home.path()).args(["stats", "--json"]).output().unwrap();
    assert!(output.status.success());
    let dashboard: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dashboard["month"]["expense"], 40.0);
    assert_eq!(dashboard["top_sales"][0][0], "Eggs");
}

#[test]
fn stats_for_one_period() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());

    farm(home.path())
        .args(["stats", "--period", "month"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Month\n")
                .and(predicate::str::contains("-$40.00"))
                .and(predicate::str::contains("Top expenses").not()),
        );

    let output = farm(home.path()).args(["stats", "--period", "today", "--json"]).output().unwrap();
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["period"], "day");
    assert_eq!(summary["expense"], 40.0);
    assert_eq!(summary["balance"], -40.0);

    farm(home.path())
        .args(["stats", "--period", "week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown period"));
}

#[test]
fn show_accepts_full_and_uppercase_ids() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());
    let id = stored(home.path(), "farm_expenses")[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    farm(home.path())
        .args(["expense", "show", &format!("exp-{}", id)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feed"));

    let short = format!("EXP-{}", &id[..8]).to_uppercase();
    farm(home.path())
        .args(["expense", "show", &short])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feed"));
}

#[test]
fn export_writes_files() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());

    let csv_path = home.path().join("ledger.csv");
    farm(home.path())
        .args(["export", "csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"));
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Kind,ID,Date,Animal,Name,Category,Buyer,Quantity,Cost\n"));

    let json_path = home.path().join("ledger.json");
    farm(home.path())
        .args(["export", "json", "--pretty"])
        .arg(&json_path)
        .assert()
        .success();
    let export: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(export["metadata"]["expense_count"], 1);
}

#[test]
fn audit_records_mutations() {
    let home = TempDir::new().unwrap();
    add_feed(home.path());

    farm(home.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"));
}

#[test]
fn config_updates_settings() {
    let home = TempDir::new().unwrap();

    farm(home.path())
        .args(["config", "--top-n", "5", "--audit", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top groups:      5"));

    farm(home.path())
        .arg("audit")
        .assert()
        .success()
        .stdout("Audit logging is disabled.\n");
}
