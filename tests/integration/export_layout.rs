use crate::common::run_with_fixture;

#[test]
fn export_writes_layout_named_after_the_report_clock() {
  let td = test_support::tempdir();
  let dir = td.path().join("exports");

  let out = run_with_fixture(&[
    "--departamento",
    "Antioquia",
    "--export",
    dir.to_str().unwrap(),
    "--now-override",
    "2024-01-05T05:15:00Z",
  ]);
  assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

  let path = dir.join("acciones_diarias-2024_01_05-00_15.json");
  let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();

  assert_eq!(doc["target_file_name"], "acciones_diarias-2024_01_05-00_15.pdf");
  assert_eq!(doc["header"]["subtitle"], "Cohorte 05 de enero de 2024 12:15 AM");
  assert_eq!(doc["page"]["orientation"], "landscape");
  assert_eq!(doc["table"]["rows"].as_array().map(|r| r.len()), Some(2));
  assert_eq!(doc["table"]["rows"][1][3], "Bello");
}

#[test]
fn export_honors_tz_flag() {
  let td = test_support::tempdir();

  let out = run_with_fixture(&[
    "--usuario",
    "nadie",
    "--export",
    td.path().to_str().unwrap(),
    "--tz",
    "utc",
    "--now-override",
    "2024-01-05T05:15:00Z",
  ]);
  assert!(out.status.success());

  let path = td.path().join("acciones_diarias-2024_01_05-05_15.json");
  let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
  assert_eq!(doc["table"]["rows"], serde_json::json!([]));
  assert_eq!(doc["table"]["columns"].as_array().map(|c| c.len()), Some(7));
}
