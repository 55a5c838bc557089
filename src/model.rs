// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the Action Record, its column catalogue, and the display names used by every output
// role: model/types
// outputs: Column enum (source + display names), ActionRecord (serializes with display names)
// invariants: Column::ALL order is the fixed report column order; display names match the document header
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

use crate::ext::serde_json::CellText;
use crate::table::Table;
use crate::error::PipelineError;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Column {
  Category,
  Date,
  Region,
  SubRegion,
  User,
  UserType,
  Activity,
}

impl Column {
  pub const ALL: [Column; 7] = [
    Column::Category,
    Column::Date,
    Column::Region,
    Column::SubRegion,
    Column::User,
    Column::UserType,
    Column::Activity,
  ];

  /// Column name as it appears in the spreadsheet tabs (and the merged table).
  pub fn source_name(self) -> &'static str {
    match self {
      Column::Category => "Acción",
      Column::Date => "Fecha",
      Column::Region => "Departamento",
      Column::SubRegion => "Municipio",
      Column::User => "Usuario",
      Column::UserType => "Tipo Usuario",
      Column::Activity => "Actividades rutinarias",
    }
  }

  pub fn display_name(self) -> &'static str {
    match self {
      Column::Category => "Elemento esencial LR",
      Column::Date => "Fecha",
      Column::Region => "Departamento",
      Column::SubRegion => "Municipio",
      Column::User => "Usuario",
      Column::UserType => "Tipo usuario",
      Column::Activity => "Acción diaria",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
  #[serde(rename = "Elemento esencial LR")]
  pub category: String,
  #[serde(rename = "Fecha")]
  pub date: String,
  #[serde(rename = "Departamento")]
  pub region: String,
  #[serde(rename = "Municipio")]
  pub sub_region: String,
  #[serde(rename = "Usuario")]
  pub user: String,
  #[serde(rename = "Tipo usuario")]
  pub user_type: String,
  #[serde(rename = "Acción diaria")]
  pub activity: String,
}

impl ActionRecord {
  pub fn get(&self, column: Column) -> &str {
    match column {
      Column::Category => &self.category,
      Column::Date => &self.date,
      Column::Region => &self.region,
      Column::SubRegion => &self.sub_region,
      Column::User => &self.user,
      Column::UserType => &self.user_type,
      Column::Activity => &self.activity,
    }
  }

  /// Cells in `Column::ALL` order.
  pub fn cells(&self) -> [&str; 7] {
    Column::ALL.map(|c| self.get(c))
  }
}

/// Convert a cleaned table into records, looking columns up by source name.
pub fn records_from_table(table: &Table) -> Result<Vec<ActionRecord>, PipelineError> {
  let mut idx = [0usize; 7];
  for (slot, col) in idx.iter_mut().zip(Column::ALL) {
    *slot = table.require_column(col.source_name(), "cleaned table")?;
  }

  let records = table
    .rows
    .iter()
    .map(|row| {
      let text = |i: usize| row[idx[i]].cell_text();
      ActionRecord {
        category: text(0),
        date: text(1),
        region: text(2),
        sub_region: text(3),
        user: text(4),
        user_type: text(5),
        activity: text(6),
      }
    })
    .collect();

  Ok(records)
}
