use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PipelineError;

// Report timestamps: which wall clock the header and export name use.

pub const SPANISH_MONTHS: [&str; 12] = [
  "enero", "febrero", "marzo", "abril", "mayo", "junio",
  "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

const DEFAULT_OFFSET_SECS: i32 = 5 * 3600;

static RE_OFFSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-])(\d{2}):?(\d{2})$").unwrap());

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ReportClock {
  Utc,
  Local,
  Fixed(FixedOffset),
  Zone(chrono_tz::Tz),
}

impl Default for ReportClock {
  /// UTC-05:00, the organization's wall clock.
  fn default() -> Self {
    FixedOffset::west_opt(DEFAULT_OFFSET_SECS)
      .map(ReportClock::Fixed)
      .unwrap_or(ReportClock::Utc)
  }
}

impl FromStr for ReportClock {
  type Err = PipelineError;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    let s = raw.trim();

    if s.eq_ignore_ascii_case("utc") {
      return Ok(ReportClock::Utc);
    }
    if s.eq_ignore_ascii_case("local") {
      return Ok(ReportClock::Local);
    }

    if let Some(caps) = RE_OFFSET.captures(s) {
      let hours: i32 = caps[2].parse().map_err(|_| PipelineError::InvalidClock(raw.to_string()))?;
      let minutes: i32 = caps[3].parse().map_err(|_| PipelineError::InvalidClock(raw.to_string()))?;
      let secs = hours * 3600 + minutes * 60;
      let signed = if &caps[1] == "-" { -secs } else { secs };

      return FixedOffset::east_opt(signed)
        .map(ReportClock::Fixed)
        .ok_or_else(|| PipelineError::InvalidClock(raw.to_string()));
    }

    s.parse::<chrono_tz::Tz>()
      .map(ReportClock::Zone)
      .map_err(|_| PipelineError::InvalidClock(raw.to_string()))
  }
}

impl ReportClock {
  /// Wall-clock time on this clock for the given instant.
  pub fn wall_time(&self, now: DateTime<Utc>) -> NaiveDateTime {
    match self {
      ReportClock::Utc => now.naive_utc(),
      ReportClock::Local => now.with_timezone(&Local).naive_local(),
      ReportClock::Fixed(off) => now.with_timezone(off).naive_local(),
      ReportClock::Zone(tz) => now.with_timezone(tz).naive_local(),
    }
  }
}

/// Parse a `--now-override` string. Accepts RFC3339 or a naive `%Y-%m-%dT%H:%M:%S` read as UTC.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|raw| {
    DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .map(|ndt| ndt.and_utc())
      })
  })
}

/// `DD de <mes> de YYYY H:MM AM|PM` on the report clock.
pub fn format_cohort_stamp(now: DateTime<Utc>, clock: &ReportClock) -> String {
  let wall = clock.wall_time(now);
  let (is_pm, hour12) = wall.hour12();
  let month = SPANISH_MONTHS[wall.month0() as usize];

  format!(
    "{} de {} de {} {}:{} {}",
    wall.format("%d"),
    month,
    wall.format("%Y"),
    hour12,
    wall.format("%M"),
    if is_pm { "PM" } else { "AM" }
  )
}

/// `acciones_diarias-YYYY_MM_DD-HH_MM.<ext>` on the report clock.
pub fn export_file_name(now: DateTime<Utc>, clock: &ReportClock, ext: &str) -> String {
  let wall = clock.wall_time(now);
  format!("acciones_diarias-{}.{}", wall.format("%Y_%m_%d-%H_%M"), ext)
}
