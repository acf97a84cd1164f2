//! Integration tests for the aero CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd. Each
//! test gets its own temp directory holding the state file and config dir.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an aero command bound to the temp state file
fn aero(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aero").unwrap();
    cmd.env_remove("AERO_DATA")
        .env_remove("AERO_FORMAT")
        .env_remove("AERO_LOG")
        .env("XDG_CONFIG_HOME", tmp.path().join("config"))
        .env("XDG_DATA_HOME", tmp.path().join("data"))
        .arg("--data")
        .arg(tmp.path().join("aerocode.json"));
    cmd
}

/// Run a creation command with `-f id` and return the printed id
fn create(tmp: &TempDir, args: &[&str]) -> String {
    let output = aero(tmp).args(["-f", "id"]).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "create failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn create_aircraft(tmp: &TempDir, code: &str) -> String {
    create(
        tmp,
        &[
            "aircraft",
            "new",
            "--code",
            code,
            "--model",
            "Jet",
            "--category",
            "commercial",
            "--capacity",
            "180",
            "--range",
            "5000",
        ],
    )
}

fn create_part(tmp: &TempDir, name: &str, supplier: &str) -> String {
    create(
        tmp,
        &[
            "part",
            "new",
            "--name",
            name,
            "--origin",
            "imported",
            "--supplier",
            supplier,
        ],
    )
}

fn create_stage(tmp: &TempDir, name: &str, due: &str) -> String {
    create(tmp, &["stage", "new", "--name", name, "--due", due])
}

fn create_employee(tmp: &TempDir, id: &str) -> Command {
    let mut cmd = aero(tmp);
    cmd.args([
        "employee",
        "new",
        "--id",
        id,
        "--name",
        "Ana",
        "--phone",
        "555-0101",
        "--address",
        "Hangar 2",
        "--username",
        "ana",
        "--password",
        "hunter2",
        "--level",
        "2",
    ]);
    cmd
}

// ============================================================================
// Entity registration
// ============================================================================

#[test]
fn test_aircraft_new_and_list() {
    let tmp = TempDir::new().unwrap();
    let id = create_aircraft(&tmp, "AC001");
    assert!(!id.is_empty());

    aero(&tmp)
        .args(["aircraft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AC001"))
        .stdout(predicate::str::contains("1 aircraft(s) found."));

    assert!(tmp.path().join("aerocode.json").exists());
}

#[test]
fn test_list_preserves_insertion_order() {
    let tmp = TempDir::new().unwrap();
    let first = create_part(&tmp, "Wing", "Acme");
    let second = create_part(&tmp, "Tail", "Bolt");

    aero(&tmp)
        .args(["-f", "id", "part", "list"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", first, second));
}

#[test]
fn test_blank_field_is_rejected() {
    let tmp = TempDir::new().unwrap();
    aero(&tmp)
        .args([
            "part", "new", "--name", "   ", "--origin", "domestic", "--supplier", "Acme",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));

    aero(&tmp)
        .args(["part", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No parts found."));
}

#[test]
fn test_invalid_category_is_rejected() {
    let tmp = TempDir::new().unwrap();
    aero(&tmp)
        .args([
            "aircraft", "new", "--code", "X", "--model", "Y", "--category", "cargo",
            "--capacity", "1", "--range", "1",
        ])
        .assert()
        .failure();
}

#[test]
fn test_zero_capacity_or_range_is_rejected() {
    let tmp = TempDir::new().unwrap();
    for (capacity, range) in [("0", "5000"), ("180", "0")] {
        aero(&tmp)
            .args([
                "aircraft", "new", "--code", "AC001", "--model", "Jet", "--category",
                "commercial", "--capacity", capacity, "--range", range,
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("0 is not in 1.."));
    }

    aero(&tmp)
        .args(["aircraft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No aircraft found."));
}

#[test]
fn test_rm_removes_record() {
    let tmp = TempDir::new().unwrap();
    let keep = create_part(&tmp, "Wing", "Acme");
    let gone = create_part(&tmp, "Tail", "Acme");

    aero(&tmp)
        .args(["part", "rm", &gone])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed part"));

    aero(&tmp)
        .args(["-f", "id", "part", "list"])
        .assert()
        .success()
        .stdout(format!("{}\n", keep));
}

#[test]
fn test_rm_unknown_id_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    aero(&tmp)
        .args(["test", "rm", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));
}

// ============================================================================
// Employees
// ============================================================================

#[test]
fn test_employee_duplicate_id_is_rejected() {
    let tmp = TempDir::new().unwrap();
    create_employee(&tmp, "E1").assert().success();
    create_employee(&tmp, "E1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already registered"));
}

#[test]
fn test_employee_list_masks_passwords() {
    let tmp = TempDir::new().unwrap();
    create_employee(&tmp, "E1").assert().success();

    aero(&tmp)
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 - Engenheiro"))
        .stdout(predicate::str::contains("hunter2").not());

    aero(&tmp)
        .args(["employee", "list", "--show-passwords"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

// ============================================================================
// Stage workflow
// ============================================================================

#[test]
fn test_stage_finish_before_start_fails() {
    let tmp = TempDir::new().unwrap();
    let stage = create_stage(&tmp, "Paint", "2024-03-01");

    aero(&tmp)
        .args(["stage", "finish", &stage])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status transition"));
}

#[test]
fn test_stage_start_then_finish() {
    let tmp = TempDir::new().unwrap();
    let stage = create_stage(&tmp, "Paint", "2024-03-01");

    aero(&tmp)
        .args(["stage", "start", &stage])
        .assert()
        .success()
        .stdout(predicate::str::contains("in_progress"));
    aero(&tmp)
        .args(["stage", "finish", &stage])
        .assert()
        .success();
    aero(&tmp)
        .args(["stage", "start", &stage])
        .assert()
        .failure();

    aero(&tmp)
        .args(["-f", "json", "stage", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"completed\""));
}

// ============================================================================
// Associations
// ============================================================================

#[test]
fn test_duplicate_link_warns_and_succeeds() {
    let tmp = TempDir::new().unwrap();
    let aircraft = create_aircraft(&tmp, "AC001");
    let part = create_part(&tmp, "Wing", "Acme");

    aero(&tmp)
        .args(["link", "add", "part-aircraft", &part, &aircraft])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added link"));
    aero(&tmp)
        .args(["link", "add", "part-aircraft", &part, &aircraft])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    aero(&tmp)
        .args(["-f", "id", "link", "list", "part-aircraft"])
        .assert()
        .success()
        .stdout(format!("part-aircraft:{}:{}\n", part, aircraft));
}

#[test]
fn test_link_to_unknown_entity_fails() {
    let tmp = TempDir::new().unwrap();
    let aircraft = create_aircraft(&tmp, "AC001");

    aero(&tmp)
        .args(["link", "add", "part-aircraft", "999", &aircraft])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No part found"));
}

#[test]
fn test_link_by_aircraft_code() {
    let tmp = TempDir::new().unwrap();
    create_aircraft(&tmp, "AC001");
    let stage = create_stage(&tmp, "Assembly", "2024-05-20");

    aero(&tmp)
        .args(["link", "add", "stage-aircraft", &stage, "AC001"])
        .assert()
        .success();

    aero(&tmp)
        .args(["line", "AC001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assembly"))
        .stdout(predicate::str::contains(format!("next: aero stage start {}", stage)));
}

#[test]
fn test_deleted_endpoint_shows_as_missing() {
    let tmp = TempDir::new().unwrap();
    let aircraft = create_aircraft(&tmp, "AC001");
    let part = create_part(&tmp, "Wing", "Acme");
    aero(&tmp)
        .args(["link", "add", "part-aircraft", &part, &aircraft])
        .assert()
        .success();
    aero(&tmp).args(["part", "rm", &part]).assert().success();

    aero(&tmp)
        .args(["link", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(missing)"));

    aero(&tmp)
        .args(["link", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found 1 dangling"));

    aero(&tmp)
        .args(["report", "AC001", "--customer", "Delta", "--delivery", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma peça associada."));
}

#[test]
fn test_employee_stage_assignment() {
    let tmp = TempDir::new().unwrap();
    create_employee(&tmp, "E1").assert().success();
    let stage = create_stage(&tmp, "Assembly", "2024-05-20");

    aero(&tmp)
        .args(["link", "add", "employee-stage", "E1", &stage])
        .assert()
        .success();

    aero(&tmp)
        .args(["-f", "csv", "link", "list", "employee-stage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("employee-stage,E1,Ana,{},Assembly", stage)));
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_full_production_report() {
    let tmp = TempDir::new().unwrap();
    let aircraft = create_aircraft(&tmp, "AC001");
    let part = create_part(&tmp, "Wing", "Acme");
    let stage = create_stage(&tmp, "Assembly", "2024-05-20");
    let test = create(
        &tmp,
        &["test", "new", "--category", "electrical", "--result", "approved"],
    );

    for (kind, left) in [
        ("part-aircraft", &part),
        ("stage-aircraft", &stage),
        ("test-aircraft", &test),
    ] {
        aero(&tmp)
            .args(["link", "add", kind, left, &aircraft])
            .assert()
            .success();
    }

    aero(&tmp)
        .args(["report", "AC001", "--customer", "Delta", "--delivery", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RELATÓRIO FINAL DE PRODUÇÃO"))
        .stdout(predicate::str::contains("Cliente: Delta"))
        .stdout(predicate::str::contains("Data de Entrega: 01/06/2024"))
        .stdout(predicate::str::contains(
            "- Wing (Fornecedor: Acme) - Status: Em Produção",
        ))
        .stdout(predicate::str::contains(
            "- Assembly (Prazo: 20/05/2024) - Status: Pendente",
        ))
        .stdout(predicate::str::contains("- Teste Elétrico: Aprovado"));
}

#[test]
fn test_report_written_to_file() {
    let tmp = TempDir::new().unwrap();
    let aircraft = create_aircraft(&tmp, "AC001");
    let out = tmp.path().join("relatorio.txt");

    aero(&tmp)
        .args(["report", &aircraft, "--customer", "Delta", "--delivery", "March 5", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("=========================================\n"));
    assert!(content.contains("Data de Entrega: March 5\n"));
    assert!(content.contains("Tipo: Comercial\n"));
    assert!(content.contains("Nenhuma etapa associada."));
    assert!(content.ends_with("\n========================================="));
}

#[test]
fn test_report_unknown_aircraft_fails() {
    let tmp = TempDir::new().unwrap();
    aero(&tmp)
        .args(["report", "AC404", "--customer", "Delta", "--delivery", "2024-06-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No aircraft found"));
}

// ============================================================================
// Persistence and misc
// ============================================================================

#[test]
fn test_malformed_state_starts_empty() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("aerocode.json"), "{ not json").unwrap();

    aero(&tmp)
        .args(["aircraft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No aircraft found."));
}

#[test]
fn test_state_file_is_json_snapshot() {
    let tmp = TempDir::new().unwrap();
    create_aircraft(&tmp, "AC001");

    let raw = fs::read_to_string(tmp.path().join("aerocode.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["aircraft"][0]["code"], "AC001");
    assert!(value["parts_aircraft"].as_array().unwrap().is_empty());
}

#[test]
fn test_config_path_shows_state_file() {
    let tmp = TempDir::new().unwrap();
    aero(&tmp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aerocode.json"));
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    aero(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aero"));
}
