use serde_json::Value;

pub const BIN: &str = "acciones-diarias";

/// The two-tab payload in tests/fixtures/sheets.json.
#[allow(dead_code)]
pub fn fixture_payload() -> Value {
  test_support::read_fixture_json("sheets.json")
}

/// `--sheet` flags selecting the fixture's tabs in rank order.
#[allow(dead_code)]
pub fn fixture_sheet_args() -> Vec<&'static str> {
  vec!["--sheet", "PPLR=PPLR-disp", "--sheet", "Coop=Coop-disp"]
}

/// Run the binary against the fixture payload with extra args.
#[allow(dead_code)]
pub fn run_with_fixture(extra: &[&str]) -> std::process::Output {
  let mut cmd = test_support::cmd_with_sheets(BIN, &fixture_payload());
  cmd.args(fixture_sheet_args()).args(extra).output().unwrap()
}

#[allow(dead_code)]
pub fn stdout_json(out: &std::process::Output) -> Value {
  assert!(
    out.status.success(),
    "command failed: {}",
    String::from_utf8_lossy(&out.stderr)
  );
  serde_json::from_slice(&out.stdout).unwrap()
}

#[allow(dead_code)]
pub fn column(rows: &Value, name: &str) -> Vec<String> {
  rows
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r[name].as_str().unwrap().to_string())
    .collect()
}
