//! SQL schema for the recipe store.
//!
//! Executed once at connection startup. Idempotent thanks to
//! `CREATE ... IF NOT EXISTS`.

/// Full schema DDL.
///
/// Timestamps are fixed-width RFC 3339 UTC strings (microsecond precision),
/// so lexical order in `ORDER BY created_at` is chronological order.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS recipes (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,  -- never reused
    name         TEXT NOT NULL,
    ingredients  TEXT NOT NULL,
    instructions TEXT NOT NULL,
    category     TEXT,                              -- NULL when absent, never ''
    created_at   TEXT NOT NULL,
    updated_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_recipes_category ON recipes(category);
";

/// Drops everything [`SCHEMA`] creates.
pub const DROP: &str = "
DROP INDEX IF EXISTS idx_recipes_category;
DROP TABLE IF EXISTS recipes;
";

/// Column list shared by every query that materialises a [`Recipe`].
///
/// [`Recipe`]: recipebox_core::Recipe
pub const COLUMNS: &str =
  "id, name, ingredients, instructions, category, created_at, updated_at";
