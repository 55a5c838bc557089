use crate::common::run_with_fixture;

#[test]
fn cli_csv_snapshot() {
  test_support::init_insta();

  let out = run_with_fixture(&["--format", "csv"]);
  assert!(out.status.success());

  let text = String::from_utf8(out.stdout).unwrap();
  insta::assert_snapshot!(text, @r###"
  Elemento esencial LR,Fecha,Departamento,Municipio,Usuario,Tipo usuario,Acción diaria
  PPLR-disp,05/01/2024,Antioquia,Medellín,luis.perez,Enlace,Reunión con mesa interreligiosa
  PPLR-disp,06/01/2024,Valle del Cauca,Cali,ana.rios,Líder,Visita a parroquia
  PPLR-disp,05/01/2024,Valle del Cauca,Palmira,ana.rios,Líder,Taller de libertad religiosa
  Coop-disp,07/01/2024,Antioquia,Bello,sara.gil,Enlace,Acompañamiento a iglesia local
  Coop-disp,08/01/2024,Cauca,Popayán,1017,Concejal,Mesa de cooperación
  "###);
}

#[test]
fn cli_options_snapshot() {
  test_support::init_insta();

  let out = run_with_fixture(&["--format", "options"]);
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  insta::assert_json_snapshot!(v, @r###"
  {
    "Elemento esencial LR": [
      "PPLR-disp",
      "Coop-disp"
    ],
    "Fecha": [
      "05/01/2024",
      "06/01/2024",
      "07/01/2024",
      "08/01/2024"
    ],
    "Departamento": [
      "Antioquia",
      "Cauca",
      "Valle del Cauca"
    ],
    "Municipio": [
      "Bello",
      "Cali",
      "Medellín",
      "Palmira",
      "Popayán"
    ],
    "Usuario": [
      "1017",
      "ana.rios",
      "luis.perez",
      "sara.gil"
    ],
    "Tipo usuario": [
      "Concejal",
      "Enlace",
      "Líder"
    ],
    "Acción diaria": [
      "Acompañamiento a iglesia local",
      "Mesa de cooperación",
      "Reunión con mesa interreligiosa",
      "Taller de libertad religiosa",
      "Visita a parroquia"
    ]
  }
  "###);
}
