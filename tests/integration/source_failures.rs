use crate::common::BIN;
use predicates::prelude::*;
use serde_json::json;

fn record() -> serde_json::Value {
  json!({
    "Acción": "",
    "Fecha": "05/01/2024",
    "Departamento": "Valle",
    "Municipio": "Cali",
    "Usuario": "ana",
    "Tipo Usuario": "Líder",
    "Actividades rutinarias": "Visita",
  })
}

#[test]
fn missing_tab_aborts_the_run() {
  let payload = json!({ "PPLR": [record()] });

  test_support::cmd_with_sheets(BIN, &payload)
    .args(["--sheet", "PPLR=PPLR-disp", "--sheet", "Coop=Coop-disp"])
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("sheet `Coop` not found"));
}

#[test]
fn missing_report_column_is_named() {
  let mut row = record();
  row.as_object_mut().unwrap().remove("Municipio");
  let payload = json!({ "PPLR": [row] });

  test_support::cmd_with_sheets(BIN, &payload)
    .args(["--sheet", "PPLR=PPLR-disp"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Municipio"));
}

#[test]
fn malformed_sheet_flag_is_a_usage_error() {
  test_support::cmd_with_sheets(BIN, &json!({}))
    .args(["--sheet", "PPLR"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("TAB=DISPLAY"));
}

#[test]
fn missing_credentials_fail_without_mock() {
  let td = test_support::tempdir();
  let missing = td.path().join("nope.json");

  test_support::cmd_bin(BIN)
    .env_remove(test_support::SHEETS_MOCK_ENV)
    .args(["--credentials", missing.to_str().unwrap()])
    .assert()
    .failure()
    .stderr(predicate::str::contains("nope.json"));
}
