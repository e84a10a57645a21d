//! End-to-end tests for the `truewage` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn truewage(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("truewage").unwrap();
    cmd.env("TRUEWAGE_DATA_DIR", data_dir.path());
    cmd.env_remove("TRUEWAGE_LOG");
    cmd
}

const CAR_COMMUTE: [&str; 13] = [
    "calc",
    "--pay",
    "2000",
    "--frequency",
    "biweekly",
    "--minutes",
    "30",
    "--distance",
    "10",
    "--mpg",
    "25",
    "--gas-price",
    "3.50",
];

fn car_calc(data_dir: &TempDir) -> Command {
    let mut cmd = truewage(data_dir);
    cmd.args(CAR_COMMUTE);
    cmd
}

fn save_downtown(data_dir: &TempDir) {
    car_calc(data_dir)
        .args(["--save", "Downtown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved record: Downtown"));
}

#[test]
fn calc_reports_three_wages() {
    let dir = TempDir::new().unwrap();
    car_calc(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Annual income:          $52,000.00"))
        .stdout(predicate::str::contains("$26.00/hr"))
        .stdout(predicate::str::contains("$25.65/hr"))
        .stdout(predicate::str::contains("TRUE hourly wage:       $22.80/hr"))
        .stdout(predicate::str::contains("Notes:").not());
}

#[test]
fn calc_json_output() {
    let dir = TempDir::new().unwrap();
    let output = car_calc(&dir).arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["annual_income"], 5_200_000);
    assert_eq!(value["inputs"]["pay"]["frequency"], "biweekly");
}

#[test]
fn calc_unknown_frequency_falls_back_with_note() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args([
            "calc", "--pay", "2000", "--frequency", "9", "--minutes", "30", "--distance", "10",
            "--mpg", "25", "--gas-price", "3.50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$22.80/hr"))
        .stdout(predicate::str::contains("Notes:"))
        .stdout(predicate::str::contains("defaulting to bi-weekly"));
}

#[test]
fn calc_car_requires_mpg() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["calc", "--pay", "2000", "--minutes", "30", "--distance", "10", "--gas-price", "3.50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mpg is required for car commutes"));
}

#[test]
fn calc_rejects_zero_mpg() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args([
            "calc", "--pay", "2000", "--minutes", "30", "--distance", "10", "--mpg", "0",
            "--gas-price", "3.50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transport parameter 'mpg'"));
}

#[test]
fn calc_rejects_oversized_paycheck() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["calc", "--pay", "90000000000000000", "--minutes", "15", "--mode", "walk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Paycheck amount must be at most"));
}

#[test]
fn calc_rejects_bare_decimal_point() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["calc", "--pay", "2000", "--minutes", "15", "--mode", "walk", "--extra", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid extra daily cost: '.'"));
}

#[test]
fn calc_walking_commute_has_no_costs() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["calc", "--pay", "2000", "--minutes", "15", "--mode", "walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After commute costs:    $26.00/hr"));
}

#[test]
fn quick_uses_flat_maintenance() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args([
            "quick", "--pay", "2000", "--minutes", "30", "--distance", "10", "--mpg", "25",
            "--gas-price", "3.50", "--name", "Sam",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using fuel + $0.30/mile"))
        .stdout(predicate::str::contains("=== Results for Sam ==="))
        .stdout(predicate::str::contains("Commute costs:       $88.00"));
}

#[test]
fn saved_record_lifecycle() {
    let dir = TempDir::new().unwrap();
    save_downtown(&dir);

    truewage(&dir)
        .args(["record", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown"));

    truewage(&dir)
        .args(["record", "show", "downtown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downtown"));

    truewage(&dir)
        .args(["record", "delete", "Downtown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted record: Downtown"));

    truewage(&dir)
        .args(["record", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved records."));
}

#[test]
fn duplicate_record_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    save_downtown(&dir);

    car_calc(&dir)
        .args(["--save", "downtown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn show_missing_record_fails() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["record", "show", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record not found: Nowhere"));
}

#[test]
fn project_with_wage() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["project", "Laptop", "--cost", "1140", "--wage", "22.80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WHAT IT COSTS: Laptop"))
        .stdout(predicate::str::contains("= 50.00 hours (6.25 work days, 1.25 work weeks)"));
}

#[test]
fn project_requires_wage_or_record() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .args(["project", "Laptop", "--cost", "1140"])
        .assert()
        .failure();
}

#[test]
fn project_against_record_and_save() {
    let dir = TempDir::new().unwrap();
    save_downtown(&dir);

    truewage(&dir)
        .args(["project", "Gym", "--cost", "50", "--cadence", "monthly", "--record", "Downtown", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("At $22.80/hr (monthly expense)"))
        .stdout(predicate::str::contains("Per year:"))
        .stdout(predicate::str::contains("Saved projection"));

    truewage(&dir)
        .args(["record", "projections", "Downtown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym"));
}

#[test]
fn export_json_and_csv() {
    let dir = TempDir::new().unwrap();
    save_downtown(&dir);

    let output = truewage(&dir).args(["export", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["metadata"]["record_count"], 1);
    assert_eq!(value["records"][0]["name"], "Downtown");

    truewage(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Name,Pay,Frequency"))
        .stdout(predicate::str::contains("Downtown"));
}

#[test]
fn export_to_file() {
    let dir = TempDir::new().unwrap();
    save_downtown(&dir);
    let target = dir.path().join("records.yaml");

    truewage(&dir)
        .args(["export", "--format", "yaml", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 1 record(s)"));

    let contents = std::fs::read_to_string(&target).unwrap();
    assert!(contents.starts_with("# TrueWage Records Export"));
    assert!(contents.contains("Downtown"));
}

#[test]
fn audit_lists_changes() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries."));

    save_downtown(&dir);
    truewage(&dir)
        .args(["record", "delete", "Downtown"])
        .assert()
        .success();

    truewage(&dir)
        .args(["audit", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Record"))
        .stdout(predicate::str::contains("DELETE Record"));
}

#[test]
fn interactive_quick_session() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .arg("interactive")
        .write_stdin("2\nSam\n2000\n8\n5\n30\n10\n25\n3.50\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Results for Sam ==="))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn init_and_config() {
    let dir = TempDir::new().unwrap();
    truewage(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("records.json").exists());

    truewage(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Work weeks per year:        50"))
        .stdout(predicate::str::contains("IRS mileage rate:           $0.67/mile"));
}
