// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render spreadsheet cells held as serde_json::Value into the text the report displays
// role: extension/serde_json
// outputs: CellText trait implemented for serde_json::Value
// invariants: No panics; scalars always render; arrays/objects are reported as non-scalar
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

/// Text rendering for a single spreadsheet cell.
pub trait CellText {
  /// Text for scalar cells; `None` for arrays and objects, which a sheet never yields.
  fn scalar_text(&self) -> Option<String>;

  /// Like `scalar_text`, but falls back to compact JSON for nested values.
  fn cell_text(&self) -> String;
}

impl CellText for Value {
  fn scalar_text(&self) -> Option<String> {
    match self {
      Value::Null => Some(String::new()),
      Value::Bool(true) => Some("True".into()),
      Value::Bool(false) => Some("False".into()),
      Value::Number(n) => Some(n.to_string()),
      Value::String(s) => Some(s.clone()),
      Value::Array(_) | Value::Object(_) => None,
    }
  }

  fn cell_text(&self) -> String {
    self.scalar_text().unwrap_or_else(|| self.to_string())
  }
}
