use crate::common::{column, run_with_fixture, stdout_json};

#[test]
fn merged_rows_follow_rank_then_place() {
  let rows = stdout_json(&run_with_fixture(&[]));

  assert_eq!(
    column(&rows, "Elemento esencial LR"),
    vec!["PPLR-disp", "PPLR-disp", "PPLR-disp", "Coop-disp", "Coop-disp"]
  );
  assert_eq!(
    column(&rows, "Municipio"),
    vec!["Medellín", "Cali", "Palmira", "Bello", "Popayán"]
  );
}

#[test]
fn rows_have_exactly_the_seven_display_columns() {
  let rows = stdout_json(&run_with_fixture(&[]));
  let keys: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();

  assert_eq!(
    keys,
    vec![
      "Elemento esencial LR",
      "Fecha",
      "Departamento",
      "Municipio",
      "Usuario",
      "Tipo usuario",
      "Acción diaria"
    ]
  );
}

#[test]
fn text_is_cleaned_and_formatted_cells_pass_through() {
  let rows = stdout_json(&run_with_fixture(&[]));

  assert_eq!(rows[1]["Acción diaria"], "Visita a parroquia");
  assert_eq!(rows[2]["Acción diaria"], "Taller de libertad religiosa");
  assert_eq!(rows[3]["Acción diaria"], "Acompañamiento a iglesia local");
  assert_eq!(rows[4]["Usuario"], "1017");
  assert_eq!(rows[4]["Fecha"], "08/01/2024");

  let raw = serde_json::to_string(&rows).unwrap().to_lowercase();
  assert!(!raw.contains("%20"));
}

#[test]
fn duplicate_rows_across_extra_columns_collapse() {
  let rows = stdout_json(&run_with_fixture(&[]));
  let popayan = column(&rows, "Municipio").iter().filter(|m| *m == "Popayán").count();
  assert_eq!(popayan, 1);
}

#[test]
fn out_flag_writes_file_instead_of_stdout() {
  let td = test_support::tempdir();
  let target = test_support::utf8_join(td.path(), "nested/rows.json");

  let out = run_with_fixture(&["--out", target.as_str()]);
  assert!(out.status.success());
  assert!(out.stdout.is_empty());

  let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&target).unwrap()).unwrap();
  assert_eq!(v.as_array().map(|a| a.len()), Some(5));
}
