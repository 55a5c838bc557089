use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::filter::FilterOptions;
use crate::model::ActionRecord;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
  Json,
  Csv,
  Options,
}

pub fn records_json(records: &[ActionRecord]) -> Result<Vec<u8>> {
  let mut buf = serde_json::to_vec_pretty(records)?;
  buf.push(b'\n');
  Ok(buf)
}

/// CSV with the display names as header row.
pub fn records_csv(records: &[ActionRecord]) -> Result<Vec<u8>> {
  let mut wtr = csv::Writer::from_writer(Vec::new());

  if records.is_empty() {
    wtr.write_record(crate::model::Column::ALL.iter().map(|c| c.display_name()))?;
  }
  for r in records {
    wtr.serialize(r).context("writing csv row")?;
  }

  wtr.into_inner().map_err(|e| e.into_error()).context("flushing csv")
}

pub fn options_json(options: &FilterOptions) -> Result<Vec<u8>> {
  let mut buf = serde_json::to_vec_pretty(options)?;
  buf.push(b'\n');
  Ok(buf)
}
