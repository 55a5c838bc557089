use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::clock::ReportClock;
use crate::config::{PipelineConfig, SheetSpec, DEFAULT_SPREADSHEET_ID};
use crate::filter::Selection;
use crate::render::OutputFormat;
use crate::sources::credentials::default_credential_paths;

#[derive(Parser, Debug)]
#[command(
    name = "acciones-diarias",
    version,
    about = "Merge daily-action spreadsheet tabs into one filtered, exportable dataset",
    long_about = None
)]
pub struct Cli {
  /// Spreadsheet holding one tab per category
  #[arg(long, default_value = DEFAULT_SPREADSHEET_ID)]
  pub spreadsheet_id: String,

  /// Tab to merge, as TAB=DISPLAY; repeat in rank order (replaces the default list)
  #[arg(long = "sheet", value_name = "TAB=DISPLAY")]
  pub sheets: Vec<String>,

  /// Service-account JSON; repeat to give fallbacks (default: src/data/credentials.json, ../src/data/credentials.json)
  #[arg(long = "credentials", value_name = "PATH")]
  pub credentials: Vec<PathBuf>,

  /// Keep only rows from this Departamento
  #[arg(long)]
  pub departamento: Option<String>,

  /// Keep rows whose Municipio is any of these
  #[arg(long)]
  pub municipio: Vec<String>,

  /// Keep rows whose Elemento esencial LR is any of these
  #[arg(long)]
  pub elemento: Vec<String>,

  /// Keep rows whose Fecha is any of these
  #[arg(long)]
  pub fecha: Vec<String>,

  /// Keep rows whose Usuario is any of these
  #[arg(long)]
  pub usuario: Vec<String>,

  /// Keep rows whose Tipo usuario is any of these
  #[arg(long)]
  pub tipo_usuario: Vec<String>,

  /// Keep rows whose Acción diaria is any of these
  #[arg(long)]
  pub accion: Vec<String>,

  /// What to print: filtered rows as json/csv, or the available filter options
  #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
  pub format: OutputFormat,

  /// Output file path (default stdout "-")
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Also write the report document layout into this directory
  #[arg(long, value_name = "DIR")]
  pub export: Option<PathBuf>,

  /// Clock for the report stamp and export name: utc, local, ±HH:MM, or an IANA zone
  #[arg(long, default_value = "-05:00", allow_hyphen_values = true)]
  pub tz: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub pipeline: PipelineConfig,
  pub credential_paths: Vec<PathBuf>,
  pub selection: Selection,
  pub format: OutputFormat,
  pub out: String,
  pub export_dir: Option<PathBuf>,
  pub clock: ReportClock,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let mut pipeline = PipelineConfig { spreadsheet_id: cli.spreadsheet_id, ..PipelineConfig::default() };
  if !cli.sheets.is_empty() {
    let sheets = cli
      .sheets
      .iter()
      .map(|raw| SheetSpec::parse(raw))
      .collect::<Result<Vec<_>, _>>()?;
    pipeline = pipeline.with_sheets(sheets);
  }

  let credential_paths = if cli.credentials.is_empty() {
    default_credential_paths()
  } else {
    cli.credentials
  };

  let clock: ReportClock = cli.tz.parse().with_context(|| format!("parsing --tz {}", cli.tz))?;

  let selection = Selection {
    region: cli.departamento,
    sub_regions: cli.municipio,
    categories: cli.elemento,
    dates: cli.fecha,
    users: cli.usuario,
    user_types: cli.tipo_usuario,
    activities: cli.accion,
  };

  Ok(EffectiveConfig {
    pipeline,
    credential_paths,
    selection,
    format: cli.format,
    out: cli.out,
    export_dir: cli.export,
    clock,
    now_override: cli.now_override,
  })
}
