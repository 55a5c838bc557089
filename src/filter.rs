// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Row selection by equality / "is any of" predicates and the option lists each filter offers
// role: processing/filter
// inputs: cleaned ActionRecords; Selection built from CLI flags
// outputs: filtered Vec<ActionRecord>; FilterOptions (per-column choices)
// invariants:
// - filtering never reorders rows
// - an empty "is any of" list constrains nothing
// - region options ignore every selection; sub-region options follow the region; the rest follow both
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{ActionRecord, Column};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
  Eq(String),
  AnyOf(Vec<String>),
}

impl Predicate {
  pub fn matches(&self, value: &str) -> bool {
    match self {
      Predicate::Eq(want) => value == want,
      Predicate::AnyOf(set) => set.is_empty() || set.iter().any(|s| s == value),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
  pub column: Column,
  pub predicate: Predicate,
}

/// What the operator picked: one single-choice region and multi-choice lists for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
  pub region: Option<String>,
  pub sub_regions: Vec<String>,
  pub categories: Vec<String>,
  pub dates: Vec<String>,
  pub users: Vec<String>,
  pub user_types: Vec<String>,
  pub activities: Vec<String>,
}

impl Selection {
  /// Active filters in cascade order (region, sub-region, then the rest).
  pub fn filters(&self) -> Vec<Filter> {
    let mut out = Vec::new();

    if let Some(r) = &self.region {
      out.push(Filter { column: Column::Region, predicate: Predicate::Eq(r.clone()) });
    }

    let multi = [
      (Column::SubRegion, &self.sub_regions),
      (Column::Category, &self.categories),
      (Column::Date, &self.dates),
      (Column::User, &self.users),
      (Column::UserType, &self.user_types),
      (Column::Activity, &self.activities),
    ];
    for (column, values) in multi {
      if !values.is_empty() {
        out.push(Filter { column, predicate: Predicate::AnyOf(values.clone()) });
      }
    }

    out
  }

  fn place_filters(&self) -> Vec<Filter> {
    self
      .filters()
      .into_iter()
      .filter(|f| matches!(f.column, Column::Region | Column::SubRegion))
      .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.filters().is_empty()
  }
}

pub fn apply(records: &[ActionRecord], filters: &[Filter]) -> Vec<ActionRecord> {
  records
    .iter()
    .filter(|r| filters.iter().all(|f| f.predicate.matches(r.get(f.column))))
    .cloned()
    .collect()
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  values.collect::<BTreeSet<_>>().into_iter().map(str::to_string).collect()
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for v in values {
    if !out.iter().any(|o| o == v) {
      out.push(v.to_string());
    }
  }
  out
}

/// Choices offered by each filter, keyed by display name when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
  #[serde(rename = "Elemento esencial LR")]
  pub categories: Vec<String>,
  #[serde(rename = "Fecha")]
  pub dates: Vec<String>,
  #[serde(rename = "Departamento")]
  pub regions: Vec<String>,
  #[serde(rename = "Municipio")]
  pub sub_regions: Vec<String>,
  #[serde(rename = "Usuario")]
  pub users: Vec<String>,
  #[serde(rename = "Tipo usuario")]
  pub user_types: Vec<String>,
  #[serde(rename = "Acción diaria")]
  pub activities: Vec<String>,
}

impl FilterOptions {
  pub fn derive(records: &[ActionRecord], selection: &Selection) -> Self {
    let by_region: Vec<ActionRecord> = match &selection.region {
      Some(r) => apply(records, &[Filter { column: Column::Region, predicate: Predicate::Eq(r.clone()) }]),
      None => records.to_vec(),
    };
    let narrowed = apply(records, &selection.place_filters());
    // users and user types only narrow once a sub-region is picked
    let people: &[ActionRecord] = if selection.sub_regions.is_empty() { records } else { &narrowed };

    Self {
      regions: sorted_distinct(records.iter().map(|r| r.region.as_str())),
      sub_regions: sorted_distinct(by_region.iter().map(|r| r.sub_region.as_str())),
      categories: distinct_in_order(narrowed.iter().map(|r| r.category.as_str())),
      dates: distinct_in_order(narrowed.iter().map(|r| r.date.as_str())),
      users: sorted_distinct(people.iter().map(|r| r.user.as_str())),
      user_types: sorted_distinct(people.iter().map(|r| r.user_type.as_str())),
      activities: sorted_distinct(narrowed.iter().map(|r| r.activity.as_str())),
    }
  }
}
