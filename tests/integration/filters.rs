use crate::common::{column, run_with_fixture, stdout_json};
use serde_json::json;

#[test]
fn departamento_is_an_exact_match() {
  let rows = stdout_json(&run_with_fixture(&["--departamento", "Antioquia"]));
  assert_eq!(column(&rows, "Municipio"), vec!["Medellín", "Bello"]);
}

#[test]
fn repeatable_filters_mean_any_of() {
  let rows = stdout_json(&run_with_fixture(&["--municipio", "Cali", "--municipio", "Popayán"]));
  assert_eq!(column(&rows, "Municipio"), vec!["Cali", "Popayán"]);
}

#[test]
fn filters_combine_across_columns() {
  let rows = stdout_json(&run_with_fixture(&[
    "--departamento",
    "Valle del Cauca",
    "--fecha",
    "05/01/2024",
    "--tipo-usuario",
    "Líder",
  ]));
  assert_eq!(column(&rows, "Municipio"), vec!["Palmira"]);
}

#[test]
fn no_match_is_an_empty_array() {
  let rows = stdout_json(&run_with_fixture(&["--usuario", "nadie"]));
  assert_eq!(rows, json!([]));
}

#[test]
fn options_cascade_from_the_region() {
  let opts = stdout_json(&run_with_fixture(&["--format", "options", "--departamento", "Valle del Cauca"]));

  assert_eq!(opts["Departamento"], json!(["Antioquia", "Cauca", "Valle del Cauca"]));
  assert_eq!(opts["Municipio"], json!(["Cali", "Palmira"]));
  assert_eq!(opts["Usuario"], json!(["1017", "ana.rios", "luis.perez", "sara.gil"]));
  assert_eq!(opts["Fecha"], json!(["06/01/2024", "05/01/2024"]));
  assert_eq!(opts["Elemento esencial LR"], json!(["PPLR-disp"]));
}

#[test]
fn user_options_narrow_once_a_municipio_is_picked() {
  let opts = stdout_json(&run_with_fixture(&[
    "--format",
    "options",
    "--departamento",
    "Valle del Cauca",
    "--municipio",
    "Palmira",
  ]));

  assert_eq!(opts["Usuario"], json!(["ana.rios"]));
  assert_eq!(opts["Tipo usuario"], json!(["Líder"]));
}
