// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Explicit pipeline configuration (spreadsheet id, ordered sheet list, text-cast columns)
// role: config
// inputs: Defaults for the organization's workbook; optional `TAB=DISPLAY` overrides from the CLI
// outputs: PipelineConfig passed by reference into the merge pipeline
// invariants:
// - sheet order defines rank (position 0 sorts first)
// - display names are looked up by rank, never by map iteration order
// errors: InvalidSheetSpec for malformed `TAB=DISPLAY`
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::model::Column;

pub const DEFAULT_SPREADSHEET_ID: &str = "1iizPemP8CqAELa-PAhc7jDmTy1yLAX0Yq_fjStUpqYQ";

const DEFAULT_SHEETS: &[(&str, &str)] = &[
  ("Acciones Diarias PPLR Depurada", "PPLR"),
  ("Acciones Diarias Cooperación Depurada", "Cooperación"),
  ("Acciones Diarias Comités LR Depurada", "Comités LR"),
  ("Acciones Diarias POT Depurada", "POT"),
  ("Acciones Diarias Enlaces Depurada", "Enlaces"),
  ("Acciones Diarias PD Depurada", "Plan Desarrollo"),
  ("Acciones Diarias Participación Política Depurada", "Participación Política"),
  ("Acciones Diarias PP Depurada", "Presupuesto Participativo"),
];

/// One source tab and the label its rows carry in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSpec {
  pub tab: String,
  pub display: String,
}

impl SheetSpec {
  pub fn new(tab: impl Into<String>, display: impl Into<String>) -> Self {
    Self { tab: tab.into(), display: display.into() }
  }

  /// Parse `TAB=DISPLAY`. Splits on the last `=` so tab names may contain one.
  pub fn parse(raw: &str) -> Result<Self, PipelineError> {
    let (tab, display) = raw
      .rsplit_once('=')
      .ok_or_else(|| PipelineError::InvalidSheetSpec(raw.to_string()))?;
    let (tab, display) = (tab.trim(), display.trim());

    if tab.is_empty() || display.is_empty() {
      return Err(PipelineError::InvalidSheetSpec(raw.to_string()));
    }

    Ok(Self::new(tab, display))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
  pub spreadsheet_id: String,
  pub sheets: Vec<SheetSpec>,
  /// Columns forced to text on every fetched tab.
  pub text_columns: Vec<String>,
  pub category_column: String,
  pub region_column: String,
  pub sub_region_column: String,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
      sheets: DEFAULT_SHEETS.iter().map(|(t, d)| SheetSpec::new(*t, *d)).collect(),
      text_columns: [
        Column::User,
        Column::UserType,
        Column::Region,
        Column::SubRegion,
        Column::Activity,
        Column::Date,
      ]
      .iter()
      .map(|c| c.source_name().to_string())
      .collect(),
      category_column: Column::Category.source_name().to_string(),
      region_column: Column::Region.source_name().to_string(),
      sub_region_column: Column::SubRegion.source_name().to_string(),
    }
  }
}

impl PipelineConfig {
  pub fn with_sheets(mut self, sheets: Vec<SheetSpec>) -> Self {
    self.sheets = sheets;
    self
  }

  pub fn display_for_rank(&self, rank: usize) -> Option<&str> {
    self.sheets.get(rank).map(|s| s.display.as_str())
  }
}
