// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for output writing, the effective "now", and man page rendering
// role: utilities/helpers
// inputs: output target ("-" or path); optional now override; clap CommandFactory
// outputs: bytes on stdout or disk; DateTime<Utc>; man page text
// side_effects: write_output creates parent directories and files or writes stdout
// invariants:
// - "-" always means stdout
// - effective_now is the only place the system clock is read
// errors: IO errors bubble with the target path in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::CommandFactory;

/// Returns the effective "now" given an optional override.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Write bytes to stdout ("-") or to a file, creating parent directories.
pub fn write_output(out: &str, bytes: &[u8]) -> Result<()> {
  if out == "-" {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes).context("writing to stdout")?;
    return stdout.flush().context("flushing stdout");
  }

  let path = Path::new(out);
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
  }

  std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
