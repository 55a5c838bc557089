// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate one invocation: load the cleaned dataset, filter it, print it, optionally export the report layout
// role: processing/orchestrator
// inputs: EffectiveConfig (pipeline config, credentials, selection, format, out, export dir, clock), optional now
// outputs: JSON/CSV/options bytes on stdout or --out; report layout file under --export
// side_effects: Network reads through the sheet source; creates the export directory; writes files/stdout
// invariants:
// - the pipeline runs exactly once per invocation (merge -> clean -> records)
// - options are derived from the full dataset; rows printed and exported are the filtered dataset
// - export file name is acciones_diarias-YYYY_MM_DD-HH_MM.<sink extension> on the report clock
// errors: Propagates fetch/cast/IO errors with tab or path context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::cli::EffectiveConfig;
use crate::clean::clean_all_columns;
use crate::clock::{ReportClock, export_file_name, parse_now_override};
use crate::config::PipelineConfig;
use crate::filter::{self, FilterOptions};
use crate::model::{ActionRecord, records_from_table};
use crate::pipeline::merge_sheets;
use crate::render::{self, OutputFormat};
use crate::report::{DocumentSink, LayoutJsonSink, build_document};
use crate::session::DatasetSession;
use crate::sources::{SheetSource, SourceSettings, build_source};
use crate::util;

/// Full pipeline: merged, cleaned, typed.
pub fn load_records(source: &dyn SheetSource, config: &PipelineConfig) -> Result<Vec<ActionRecord>> {
  let merged = merge_sheets(source, config)?;
  let cleaned = clean_all_columns(&merged)?;
  tracing::debug!(rows = cleaned.len(), "cleaned dataset");

  Ok(records_from_table(&cleaned)?)
}

pub fn render_output(cfg: &EffectiveConfig, dataset: &[ActionRecord], filtered: &[ActionRecord]) -> Result<Vec<u8>> {
  match cfg.format {
    OutputFormat::Json => render::records_json(filtered),
    OutputFormat::Csv => render::records_csv(filtered),
    OutputFormat::Options => render::options_json(&FilterOptions::derive(dataset, &cfg.selection)),
  }
}

/// Build the report document for `records` and write it through `sink` into `dir`.
pub fn export_document(
  dir: &Path,
  records: &[ActionRecord],
  now: DateTime<Utc>,
  clock: &ReportClock,
  sink: &dyn DocumentSink,
) -> Result<PathBuf> {
  let doc = build_document(records, now, clock);
  let bytes = sink.render(&doc)?;

  std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
  let path = dir.join(export_file_name(now, clock, sink.extension()));
  std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;

  tracing::info!(path = %path.display(), target = %doc.target_file_name, rows = records.len(), "exported report");
  Ok(path)
}

pub fn run(cfg: &EffectiveConfig) -> Result<()> {
  let source = build_source(&SourceSettings {
    spreadsheet_id: cfg.pipeline.spreadsheet_id.clone(),
    credential_paths: cfg.credential_paths.clone(),
  })?;

  let mut session = DatasetSession::new();
  let dataset = session.load(false, || load_records(source.as_ref(), &cfg.pipeline))?;

  let filtered = filter::apply(dataset, &cfg.selection.filters());
  tracing::info!(total = dataset.len(), selected = filtered.len(), "applied filters");

  let bytes = render_output(cfg, dataset, &filtered)?;
  util::write_output(&cfg.out, &bytes)?;

  if let Some(dir) = &cfg.export_dir {
    let now = util::effective_now(parse_now_override(cfg.now_override.as_deref()));
    export_document(dir, &filtered, now, &cfg.clock, &LayoutJsonSink)?;
  }

  Ok(())
}
