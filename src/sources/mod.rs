// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Trait seam for fetching one spreadsheet tab as a Table, plus per-run memoization and an env-backed mock
// role: sources/namespace
// inputs: tab names; env ADR_TEST_SHEETS_JSON (mock payloads); credential paths for the HTTP source
// outputs: Box<dyn SheetSource> ready for the merge pipeline
// side_effects: Network calls via sheets_api when no mock is configured
// invariants:
// - a fetch failure is returned to the caller; nothing is retried or skipped
// - CachedSource returns identical tables for repeated fetches of one tab within a run
// errors: UnknownSheet for tabs absent from the mock payload; HTTP/auth errors bubble with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod credentials;
pub mod sheets_api;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::error::PipelineError;
use crate::table::Table;

pub const MOCK_ENV: &str = "ADR_TEST_SHEETS_JSON";

pub trait SheetSource {
  /// Fetch every record of `tab`; the first sheet row provides the column names.
  fn fetch(&self, tab: &str) -> Result<Table>;
}

// --- Lightweight in-memory caching wrapper ---
// Memoizes fetched tabs for the lifetime of one run.
pub struct CachedSource {
  inner: Box<dyn SheetSource>,
  tabs: RefCell<HashMap<String, Table>>,
}

impl CachedSource {
  pub fn new(inner: Box<dyn SheetSource>) -> Self {
    Self { inner, tabs: RefCell::new(HashMap::new()) }
  }
}

impl SheetSource for CachedSource {
  fn fetch(&self, tab: &str) -> Result<Table> {
    if let Some(t) = self.tabs.borrow().get(tab).cloned() {
      tracing::debug!(tab, "sheet served from run cache");
      return Ok(t);
    }
    let t = self.inner.fetch(tab)?;
    self.tabs.borrow_mut().insert(tab.to_string(), t.clone());

    Ok(t)
  }
}

/// Source backed by a JSON object of `{ tab: [record, ...] }`, used by tests and dry runs.
pub struct EnvSheetSource {
  tabs: Map<String, Value>,
}

impl EnvSheetSource {
  pub fn from_json(raw: &str) -> Result<Self> {
    let v: Value = serde_json::from_str(raw).with_context(|| format!("parsing {}", MOCK_ENV))?;
    let Value::Object(tabs) = v else {
      bail!("{} must hold a JSON object keyed by tab name", MOCK_ENV);
    };

    Ok(Self { tabs })
  }

  pub fn from_env() -> Result<Option<Self>> {
    match std::env::var(MOCK_ENV) {
      Ok(raw) => Self::from_json(&raw).map(Some),
      Err(_) => Ok(None),
    }
  }
}

impl SheetSource for EnvSheetSource {
  fn fetch(&self, tab: &str) -> Result<Table> {
    let rows = self
      .tabs
      .get(tab)
      .ok_or_else(|| PipelineError::UnknownSheet(tab.to_string()))?;
    let Some(arr) = rows.as_array() else {
      bail!("mock sheet `{}` must be an array of records", tab);
    };

    let mut records: Vec<Map<String, Value>> = Vec::with_capacity(arr.len());
    for item in arr {
      let Some(obj) = item.as_object() else {
        bail!("mock sheet `{}` holds a non-object record: {}", tab, item);
      };
      records.push(obj.clone());
    }

    Ok(Table::from_records(&records))
  }
}

/// Where the HTTP source reads its workbook and credentials from.
#[derive(Debug, Clone)]
pub struct SourceSettings {
  pub spreadsheet_id: String,
  pub credential_paths: Vec<PathBuf>,
}

/// Pick the env mock when present, otherwise authenticate against the Sheets API.
pub fn build_source(settings: &SourceSettings) -> Result<Box<dyn SheetSource>> {
  let inner: Box<dyn SheetSource> = if let Some(mock) = EnvSheetSource::from_env()? {
    tracing::info!("using sheet payloads from {}", MOCK_ENV);
    Box::new(mock)
  } else {
    let account = credentials::load_service_account(&settings.credential_paths)?;
    Box::new(sheets_api::SheetsHttpApi::new(settings.spreadsheet_id.clone(), account))
  };

  Ok(Box::new(CachedSource::new(inner)))
}
