//! Encoding and decoding helpers between [`Recipe`] and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings in UTC with a fixed
//! microsecond precision.

use chrono::{DateTime, SecondsFormat, Utc};
use recipebox_core::Recipe;

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `recipes` row, in [`COLUMNS`] order.
///
/// [`COLUMNS`]: crate::schema::COLUMNS
pub struct RawRecipe {
  pub id:           i64,
  pub name:         String,
  pub ingredients:  String,
  pub instructions: String,
  pub category:     Option<String>,
  pub created_at:   String,
  pub updated_at:   String,
}

impl RawRecipe {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      name:         row.get(1)?,
      ingredients:  row.get(2)?,
      instructions: row.get(3)?,
      category:     row.get(4)?,
      created_at:   row.get(5)?,
      updated_at:   row.get(6)?,
    })
  }

  pub fn into_recipe(self) -> Result<Recipe> {
    Ok(Recipe {
      id:           self.id,
      name:         self.name,
      ingredients:  self.ingredients,
      instructions: self.instructions,
      category:     self.category,
      created_at:   decode_dt(&self.created_at)?,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn encoded_timestamps_sort_chronologically() {
    let early = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let late = early + chrono::Duration::milliseconds(1500);
    assert!(encode_dt(early) < encode_dt(late));
    assert_eq!(encode_dt(early), "2024-01-01T09:00:00.000000Z");
  }

  #[test]
  fn decode_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
