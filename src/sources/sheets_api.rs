// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Google Sheets API v4 client returning one worksheet as a Table ("get all records" semantics)
// role: sources/sheets-api
// inputs: spreadsheet id; tab name; service account; env ADR_SHEETS_BASE_URL (optional override)
// outputs: Table whose columns are the sheet's header row
// side_effects: Network calls to the token endpoint (once per run) and sheets.googleapis.com
// invariants:
// - tab names are sent as quoted A1 ranges so spaces and accents are safe
// - short rows are padded with empty text up to the header width
// errors: Token, HTTP, and decode failures bubble with the tab name in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::cell::RefCell;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::SheetSource;
use super::credentials::{ServiceAccount, exchange_token};
use crate::ext::serde_json::CellText;
use crate::table::Table;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";
const BASE_URL_ENV: &str = "ADR_SHEETS_BASE_URL";
// Cells as displayed in the sheet, so dates stay `05/01/2024` rather than serial numbers.
const VALUE_RENDER_OPTION: &str = "FORMATTED_VALUE";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchGetResponse {
  #[serde(default)]
  value_ranges: Vec<ValueRange>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
  #[serde(default)]
  values: Vec<Vec<Value>>,
}

/// Quote a tab name as an A1 range (`'It''s'`).
pub fn a1_range(tab: &str) -> String {
  format!("'{}'", tab.replace('\'', "''"))
}

/// First row is the header; every later row becomes one record.
pub fn values_to_table(values: &[Vec<Value>]) -> Table {
  let Some((header, body)) = values.split_first() else {
    return Table::default();
  };

  let columns: Vec<String> = header.iter().map(|v| v.cell_text()).collect();
  let width = columns.len();
  let mut table = Table::new(columns);

  for row in body {
    let cells = (0..width)
      .map(|i| row.get(i).cloned().unwrap_or_else(|| Value::String(String::new())))
      .collect();
    table.push_row(cells);
  }

  table
}

pub struct SheetsHttpApi {
  agent: ureq::Agent,
  base_url: String,
  spreadsheet_id: String,
  account: ServiceAccount,
  token: RefCell<Option<String>>,
}

impl SheetsHttpApi {
  pub fn new(spreadsheet_id: String, account: ServiceAccount) -> Self {
    let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    Self {
      agent: ureq::AgentBuilder::new().build(),
      base_url: base_url.trim_end_matches('/').to_string(),
      spreadsheet_id,
      account,
      token: RefCell::new(None),
    }
  }

  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  fn bearer(&self) -> Result<String> {
    if let Some(t) = self.token.borrow().clone() {
      return Ok(t);
    }
    let t = exchange_token(&self.agent, &self.account)?;
    *self.token.borrow_mut() = Some(t.clone());

    Ok(t)
  }
}

impl SheetSource for SheetsHttpApi {
  fn fetch(&self, tab: &str) -> Result<Table> {
    let token = self.bearer()?;
    let url = format!(
      "{}/v4/spreadsheets/{}/values:batchGet",
      self.base_url, self.spreadsheet_id
    );

    let resp = self
      .agent
      .get(&url)
      .query("ranges", &a1_range(tab))
      .query("valueRenderOption", VALUE_RENDER_OPTION)
      .set("Accept", "application/json")
      .set("User-Agent", "acciones-diarias")
      .set("Authorization", &format!("Bearer {}", token))
      .call()
      .with_context(|| format!("fetching sheet `{}`", tab))?;

    let body: BatchGetResponse = resp
      .into_json()
      .with_context(|| format!("decoding sheet `{}`", tab))?;

    let values = body
      .value_ranges
      .into_iter()
      .next()
      .map(|r| r.values)
      .unwrap_or_default();

    let table = values_to_table(&values);
    tracing::info!(tab, rows = table.len(), "fetched sheet");

    Ok(table)
  }
}
