// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed failures raised by the merge/clean pipeline and configuration parsing
// role: errors/domain
// outputs: PipelineError (thiserror) converted into anyhow at orchestration boundaries
// invariants: Messages name the offending column, tab, or input verbatim
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
  #[error("missing column `{column}` in {context}")]
  MissingColumn { column: String, context: String },

  #[error("cannot cast column `{column}` of sheet `{tab}` to text: {value}")]
  TextCast { column: String, tab: String, value: String },

  #[error("sheet `{0}` not found")]
  UnknownSheet(String),

  #[error("invalid --sheet `{0}`, expected TAB=DISPLAY")]
  InvalidSheetSpec(String),

  #[error("invalid report clock `{0}` (use utc, local, +HH:MM/-HH:MM, or an IANA zone)")]
  InvalidClock(String),
}
