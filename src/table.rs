// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: In-memory table of spreadsheet cells shared by the merge and cleaning stages
// role: model/table
// inputs: Row mappings (column -> JSON value) as returned by a sheet source
// outputs: Column-ordered Table with rectangular rows
// invariants:
// - every row has exactly `columns.len()` cells
// - column order is first-appearance order of the input mappings
// - a cell missing from a mapping is Value::Null
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::{Map, Value};

use crate::error::PipelineError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
  pub columns: Vec<String>,
  pub rows: Vec<Vec<Value>>,
}

impl Table {
  pub fn new(columns: Vec<String>) -> Self {
    Self { columns, rows: Vec::new() }
  }

  /// Build a table from row mappings; the column set is the union of all keys.
  pub fn from_records(records: &[Map<String, Value>]) -> Self {
    let mut columns: Vec<String> = Vec::new();

    for rec in records {
      for key in rec.keys() {
        if !columns.iter().any(|c| c == key) {
          columns.push(key.clone());
        }
      }
    }

    let rows = records
      .iter()
      .map(|rec| {
        columns
          .iter()
          .map(|c| rec.get(c).cloned().unwrap_or(Value::Null))
          .collect()
      })
      .collect();

    Self { columns, rows }
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|c| c == name)
  }

  pub fn require_column(&self, name: &str, context: &str) -> Result<usize, PipelineError> {
    self.column_index(name).ok_or_else(|| PipelineError::MissingColumn {
      column: name.to_string(),
      context: context.to_string(),
    })
  }

  /// Index of `name`, appending an all-null column when it does not exist yet.
  pub fn ensure_column(&mut self, name: &str) -> usize {
    if let Some(idx) = self.column_index(name) {
      return idx;
    }
    self.columns.push(name.to_string());
    for row in self.rows.iter_mut() {
      row.push(Value::Null);
    }

    self.columns.len() - 1
  }

  pub fn push_row(&mut self, row: Vec<Value>) {
    debug_assert_eq!(row.len(), self.columns.len());
    self.rows.push(row);
  }
}
