//! End-to-end tests of the `hubfin` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `hubfin` command isolated from the user's configuration.
fn hubfin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hubfin").unwrap();
    cmd.env_remove("HUBFIN_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn tier_minimal_prints_code() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "minimal", "tier", "--score", "720"])
        .assert()
        .success()
        .stdout("good\n");

    hubfin(&home)
        .args(["-f", "minimal", "tier", "--score", "-10"])
        .assert()
        .success()
        .stdout("very-poor\n");
}

#[test]
fn tier_defaults_to_simulated_score() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "minimal", "tier"])
        .assert()
        .success()
        .stdout("good\n");
}

#[test]
fn tier_json_includes_policy() {
    let home = TempDir::new().unwrap();
    let output = hubfin(&home)
        .args(["-f", "json", "tier", "-s", "751"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], 751);
    assert_eq!(json["in_range"], true);
    assert_eq!(json["policy"]["tier"], "excellent");
    assert_eq!(json["policy"]["max_installments"], 48);
}

#[test]
fn policies_lists_every_tier() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "csv", "policies"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("excellent")
                .and(predicate::str::contains("very-poor"))
                .and(predicate::str::contains("100000.00")),
        );
}

#[test]
fn quote_minimal_prints_installment() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "minimal", "quote", "-s", "720", "-a", "12000", "-i", "12"])
        .assert()
        .success()
        .stdout("1134.72\n");
}

#[test]
fn quote_accepts_brazilian_amounts() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "minimal", "quote", "-s", "720", "-a", "12.000,00", "-i", "12"])
        .assert()
        .success()
        .stdout("1134.72\n");
}

#[test]
fn quote_json_reports_acceptance() {
    let home = TempDir::new().unwrap();
    let output = hubfin(&home)
        .args(["-f", "json", "quote", "-s", "800", "-a", "10000", "-i", "24"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["accepted"], true);
    assert_eq!(json["tier"], "excellent");
    assert!(json.get("message").is_none());
}

#[test]
fn quote_rejection_exits_with_message() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["quote", "-s", "250", "-a", "5000", "-i", "48"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Máximo de 6 parcelas"));

    hubfin(&home)
        .args(["quote", "-s", "720", "-a", "500", "-i", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valor mínimo: R$ 1.000,00"));
}

#[test]
fn quote_rejects_unparseable_amount() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["quote", "-s", "720", "-a", "doze mil"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn quote_far_above_tier_term_is_rejected() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["quote", "-s", "720", "-a", "12000", "-i", "5000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Máximo de 36 parcelas"));

    let output = hubfin(&home)
        .args(["-f", "json", "quote", "-s", "720", "-a", "12000", "-i", "5000"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["accepted"], false);
    assert_eq!(json["installment_amount"]["amount"].as_f64().unwrap(), 240.0);
}

#[test]
fn quote_reads_dot_grouped_thousands() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "minimal", "quote", "-s", "720", "-a", "R$ 1.500", "-i", "6"])
        .assert()
        .success();
}

#[test]
fn quote_echoes_applicant_details() {
    let home = TempDir::new().unwrap();
    let details = [
        "--purpose",
        "vehicle",
        "--income",
        "6.500,00",
        "--employment",
        "self-employed",
    ];

    hubfin(&home)
        .args(["quote", "-s", "720", "-a", "12000", "-i", "12"])
        .args(details)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Compra de Veículo")
                .and(predicate::str::contains("R$ 6.500,00"))
                .and(predicate::str::contains("Autônomo")),
        );

    let output = hubfin(&home)
        .args(["-f", "json", "quote", "-s", "720", "-a", "12000", "-i", "12"])
        .args(details)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["request"]["purpose"], "vehicle");
    assert_eq!(json["request"]["employment_status"], "self-employed");
    assert_eq!(json["request"]["monthly_income"]["amount"].as_f64().unwrap(), 6500.0);
}

#[test]
fn schedule_has_one_row_per_installment() {
    let home = TempDir::new().unwrap();
    let output = hubfin(&home)
        .args(["-f", "json", "schedule", "-s", "720", "-a", "12000", "-i", "12"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["period"], 1);
    assert_eq!(rows[11]["balance"]["amount"].as_f64().unwrap(), 0.0);
    assert_eq!(rows[11]["balance"]["currency"], "BRL");
}

#[test]
fn schedule_refuses_rejected_request() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["schedule", "-s", "720", "-a", "80000", "-i", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valor máximo permitido"));
}

#[test]
fn options_follow_tier_limit() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-f", "minimal", "options", "-s", "480"])
        .assert()
        .success()
        .stdout("6,12,24\n");

    hubfin(&home)
        .args(["-f", "minimal", "options", "-s", "100"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn options_reject_non_positive_amounts() {
    let home = TempDir::new().unwrap();
    for amount in ["--amount=0", "--amount=-500"] {
        hubfin(&home)
            .args(["options", "-s", "720", amount])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid amount"));
    }

    hubfin(&home)
        .args(["-f", "csv", "options", "-s", "100", "--amount", "6000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6,"));
}

#[test]
fn config_file_overrides_defaults() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("hubfin.toml");
    std::fs::write(&path, "simulated_score = 800\nminimum_principal = 500.0\n").unwrap();

    hubfin(&home)
        .args(["-f", "minimal", "tier"])
        .env("HUBFIN_CONFIG", &path)
        .assert()
        .success()
        .stdout("excellent\n");

    hubfin(&home)
        .args(["-f", "minimal", "quote", "-a", "600", "-i", "6"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    std::fs::write(&path, "default_installments = 0\n").unwrap();

    hubfin(&home)
        .arg("--config")
        .arg(&path)
        .arg("tier")
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_installments"));
}

#[test]
fn config_init_writes_defaults_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("new.toml");

    hubfin(&home)
        .args(["-q", "config", "init"])
        .arg(&path)
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("simulated_score = 720"));

    hubfin(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    hubfin(&home)
        .args(["-q", "config", "init", "--force"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn verbose_logs_go_to_stderr() {
    let home = TempDir::new().unwrap();
    hubfin(&home)
        .args(["-v", "-f", "minimal", "tier", "-s", "720"])
        .assert()
        .success()
        .stdout("good\n");
}
