// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Project the merged table onto the seven report columns, normalize cell text, and collapse duplicates
// role: processing/clean
// inputs: merged Table (any extra columns allowed)
// outputs: new owned Table with exactly the report columns, all cells text
// invariants:
// - the input table is never mutated
// - no output cell contains "%20" in any letter case; cells are trimmed
// - duplicate rows collapse to their last occurrence; survivors keep relative order
// - cleaning its own output returns the same table
// errors: MissingColumn when a report column is absent
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::PipelineError;
use crate::ext::serde_json::CellText;
use crate::model::Column;
use crate::table::Table;

static TEXT_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
  vec![
    // URL-encoded spaces leak in from form exports
    (Regex::new(r"(?i)%20").unwrap(), " "),
  ]
});

/// Apply every normalization rule in order, then trim.
pub fn clean_text(raw: &str) -> String {
  let mut text = raw.to_string();

  for (re, replacement) in TEXT_RULES.iter() {
    if re.is_match(&text) {
      text = re.replace_all(&text, *replacement).into_owned();
    }
  }

  text.trim().to_string()
}

/// Keep the last occurrence of every distinct row, preserving the survivors' order.
pub fn dedup_keep_last(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
  let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(rows.len());
  let mut kept: Vec<Vec<String>> = Vec::with_capacity(rows.len());

  for row in rows.into_iter().rev() {
    if !seen.contains(&row) {
      seen.insert(row.clone());
      kept.push(row);
    }
  }
  kept.reverse();

  kept
}

/// Clean the merged table into the report table.
pub fn clean_all_columns(table: &Table) -> Result<Table, PipelineError> {
  let mut positions = Vec::with_capacity(Column::ALL.len());
  for col in Column::ALL {
    positions.push(table.require_column(col.source_name(), "merged table")?);
  }

  let cleaned: Vec<Vec<String>> = table
    .rows
    .iter()
    .map(|row| positions.iter().map(|&i| clean_text(&row[i].cell_text())).collect())
    .collect();

  let before = cleaned.len();
  let unique = dedup_keep_last(cleaned);
  tracing::debug!(before, after = unique.len(), "duplicates collapsed");

  let mut out = Table::new(Column::ALL.iter().map(|c| c.source_name().to_string()).collect());
  for row in unique {
    out.push_row(row.into_iter().map(Value::String).collect());
  }

  Ok(out)
}
