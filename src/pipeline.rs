// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Merge every configured sheet into one ranked, sorted, labeled table
// role: processing/merge
// inputs: SheetSource (injected fetch capability); PipelineConfig (ordered sheets, text columns)
// outputs: Table with the union of sheet columns plus the category column
// invariants:
// - output row count equals the sum of fetched row counts
// - rows ordered by (sheet rank, region, sub-region) with a stable sort
// - category cell = display name of the row's sheet; rank never appears as a column
// errors: first failing fetch aborts the merge; missing/non-scalar text columns are TextCast/MissingColumn
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::ext::serde_json::CellText;
use crate::sources::SheetSource;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
  pub rank: usize,
  pub cells: Vec<Value>,
}

/// Concatenated rows that still carry their sheet rank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedTable {
  pub columns: Vec<String>,
  pub rows: Vec<RankedRow>,
}

/// Force `text_columns` of one fetched sheet to text cells.
pub fn cast_text_columns(table: &mut Table, text_columns: &[String], tab: &str) -> Result<(), PipelineError> {
  let context = format!("sheet `{}`", tab);

  for column in text_columns {
    let idx = table.require_column(column, &context)?;

    for row in table.rows.iter_mut() {
      let cell = &mut row[idx];
      match cell.scalar_text() {
        Some(text) => *cell = Value::String(text),
        None => {
          return Err(PipelineError::TextCast {
            column: column.clone(),
            tab: tab.to_string(),
            value: cell.to_string(),
          });
        }
      }
    }
  }

  Ok(())
}

/// Stack ranked tables; columns are unioned in first-appearance order, gaps are null.
pub fn concat_ranked(tables: Vec<(usize, Table)>) -> RankedTable {
  let mut columns: Vec<String> = Vec::new();
  for (_, t) in &tables {
    for c in &t.columns {
      if !columns.contains(c) {
        columns.push(c.clone());
      }
    }
  }

  let mut rows = Vec::with_capacity(tables.iter().map(|(_, t)| t.len()).sum());
  for (rank, t) in tables {
    let positions: Vec<Option<usize>> = columns.iter().map(|c| t.column_index(c)).collect();
    for src in t.rows {
      let cells = positions
        .iter()
        .map(|p| p.map(|i| src[i].clone()).unwrap_or(Value::Null))
        .collect();
      rows.push(RankedRow { rank, cells });
    }
  }

  RankedTable { columns, rows }
}

impl RankedTable {
  /// Stable sort by (rank, region, sub-region) compared as text.
  pub fn sort_by_rank_and_place(&mut self, region: &str, sub_region: &str) -> Result<(), PipelineError> {
    let find = |name: &str| {
      self.columns.iter().position(|c| c == name).ok_or_else(|| PipelineError::MissingColumn {
        column: name.to_string(),
        context: "merged table".to_string(),
      })
    };
    let ri = find(region)?;
    let si = find(sub_region)?;

    self
      .rows
      .sort_by_cached_key(|r| (r.rank, r.cells[ri].cell_text(), r.cells[si].cell_text()));

    Ok(())
  }

  /// Replace ranks with the configured display name in the category column.
  pub fn into_labeled(self, config: &PipelineConfig) -> Table {
    let mut table = Table::new(self.columns);
    let cat = table.ensure_column(&config.category_column);

    for r in self.rows {
      let mut cells = r.cells;
      cells.resize(table.columns.len(), Value::Null);
      let label = config.display_for_rank(r.rank).unwrap_or_default();
      cells[cat] = Value::String(label.to_string());
      table.push_row(cells);
    }

    table
  }
}

/// Fetch, cast, tag, concatenate, sort, and label every configured sheet.
pub fn merge_sheets(source: &dyn SheetSource, config: &PipelineConfig) -> Result<Table> {
  let mut fetched: Vec<(usize, Table)> = Vec::with_capacity(config.sheets.len());

  for (rank, sheet) in config.sheets.iter().enumerate() {
    let mut t = source
      .fetch(&sheet.tab)
      .with_context(|| format!("loading sheet `{}`", sheet.tab))?;
    cast_text_columns(&mut t, &config.text_columns, &sheet.tab)?;
    tracing::debug!(tab = %sheet.tab, rank, rows = t.len(), "sheet cast and tagged");
    fetched.push((rank, t));
  }

  let mut ranked = concat_ranked(fetched);
  ranked.sort_by_rank_and_place(&config.region_column, &config.sub_region_column)?;
  let table = ranked.into_labeled(config);
  tracing::info!(rows = table.len(), sheets = config.sheets.len(), "merged sheets");

  Ok(table)
}
