// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Describe the exported report document (page, header block, bordered table) as a serializable layout
// role: model/document
// inputs: filtered ActionRecords; "now" instant; ReportClock
// outputs: ReportDocument; bytes from a DocumentSink
// invariants:
// - table columns are the seven display names with widths 40/45/55/55/120/55/180
// - header row is always present, even with zero records
// - target_file_name follows acciones_diarias-YYYY_MM_DD-HH_MM.pdf on the report clock
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::{ReportClock, export_file_name, format_cohort_stamp};
use crate::model::{ActionRecord, Column};

pub const TITLE: &str = "Acciones de Libertad Religiosa, Consolidado Nacional";
pub const LOGO_PATH: &str = "reports/figures/Logo_Partido.jpeg";
pub const COLUMN_WIDTHS: [u32; 7] = [40, 45, 55, 55, 120, 55, 180];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSetup {
  pub size: &'static str,
  pub orientation: &'static str,
  pub width_pt: u32,
  pub height_pt: u32,
  pub margin_left: u32,
  pub margin_right: u32,
  pub margin_top: u32,
  pub margin_bottom: u32,
}

impl Default for PageSetup {
  fn default() -> Self {
    Self {
      size: "letter",
      orientation: "landscape",
      width_pt: 792,
      height_pt: 612,
      margin_left: 5,
      margin_right: 5,
      margin_top: 15,
      margin_bottom: 15,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
  pub font: &'static str,
  pub size_pt: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub leading_pt: Option<u32>,
  pub space_after_pt: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logo {
  pub path: &'static str,
  pub width_pt: u32,
  pub height_pt: u32,
  pub align: &'static str,
}

/// Two-row grid: title + logo, then the subtitle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
  pub title: String,
  pub title_style: TextStyle,
  pub subtitle: String,
  pub subtitle_style: TextStyle,
  pub logo: Logo,
  pub column_widths: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
  pub columns: Vec<&'static str>,
  pub column_widths: [u32; 7],
  pub rows: Vec<[String; 7]>,
  pub body_style: TextStyle,
  pub header_font: &'static str,
  pub header_background: &'static str,
  pub grid_color: &'static str,
  pub grid_width_pt: u32,
  pub repeat_header_rows: u32,
  pub vertical_align: &'static str,
  pub word_wrap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
  pub target_file_name: String,
  pub page: PageSetup,
  pub header: HeaderBlock,
  pub table: TableBlock,
}

pub fn build_document(records: &[ActionRecord], now: DateTime<Utc>, clock: &ReportClock) -> ReportDocument {
  let header = HeaderBlock {
    title: TITLE.to_string(),
    title_style: TextStyle { font: "Times-Bold", size_pt: 12, leading_pt: None, space_after_pt: 10 },
    subtitle: format!("Cohorte {}", format_cohort_stamp(now, clock)),
    subtitle_style: TextStyle { font: "Times-Bold", size_pt: 10, leading_pt: None, space_after_pt: 10 },
    logo: Logo { path: LOGO_PATH, width_pt: 60, height_pt: 35, align: "right" },
    column_widths: [450, 90],
  };

  let table = TableBlock {
    columns: Column::ALL.iter().map(|c| c.display_name()).collect(),
    column_widths: COLUMN_WIDTHS,
    rows: records.iter().map(|r| r.cells().map(str::to_string)).collect(),
    body_style: TextStyle { font: "Times-Roman", size_pt: 7, leading_pt: Some(9), space_after_pt: 0 },
    header_font: "Times-Bold",
    header_background: "#f5f5f5",
    grid_color: "#000000",
    grid_width_pt: 1,
    repeat_header_rows: 1,
    vertical_align: "middle",
    word_wrap: true,
  };

  ReportDocument {
    target_file_name: export_file_name(now, clock, "pdf"),
    page: PageSetup::default(),
    header,
    table,
  }
}

/// Turns a document layout into file bytes.
pub trait DocumentSink {
  fn extension(&self) -> &'static str;
  fn render(&self, doc: &ReportDocument) -> Result<Vec<u8>>;
}

/// Writes the layout itself as pretty JSON for an external renderer.
pub struct LayoutJsonSink;

impl DocumentSink for LayoutJsonSink {
  fn extension(&self) -> &'static str {
    "json"
  }

  fn render(&self, doc: &ReportDocument) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(doc)?)
  }
}
