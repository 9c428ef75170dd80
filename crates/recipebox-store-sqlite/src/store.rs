//! [`SqliteStore`] — the SQLite implementation of [`RecipeStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use recipebox_core::{
  recipe::{NewRecipe, Recipe, RecipeId},
  store::RecipeStore,
};

use crate::{
  encode::{encode_dt, RawRecipe},
  schema::{COLUMNS, DROP, SCHEMA},
  seed, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recipe store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Does not seed; call [`seed_if_empty`](Self::seed_if_empty) for that.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("recipes table and category index verified");
    Ok(())
  }

  /// Insert the sample recipes if the table is empty.
  ///
  /// Returns how many rows were inserted.
  pub async fn seed_if_empty(&self) -> Result<usize> {
    let now = encode_dt(Utc::now());
    let inserted = self
      .conn
      .call(move |conn| Ok(seed::seed_if_empty(conn, &now)?))
      .await?;
    Ok(inserted)
  }

  /// Drop the `recipes` table and recreate it empty.
  pub async fn reset(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(DROP)?;
        Ok(())
      })
      .await?;
    tracing::info!("recipes table dropped");
    self.init_schema().await
  }

  /// Number of stored recipes.
  pub async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM recipes", [], |r| r.get(0))?)
      })
      .await?;
    Ok(usize::try_from(n).unwrap_or_default())
  }

  /// Run a statement expected to yield at most one recipe row.
  async fn one(
    &self,
    sql: String,
    params: Vec<rusqlite::types::Value>,
  ) -> Result<Option<Recipe>> {
    let raw: Option<RawRecipe> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &sql,
            rusqlite::params_from_iter(params),
            RawRecipe::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRecipe::into_recipe).transpose()
  }
}

fn text(s: &str) -> rusqlite::types::Value { rusqlite::types::Value::Text(s.to_owned()) }

fn opt_text(s: Option<&str>) -> rusqlite::types::Value {
  s.map(text).unwrap_or(rusqlite::types::Value::Null)
}

// ─── RecipeStore impl ────────────────────────────────────────────────────────

impl RecipeStore for SqliteStore {
  type Error = crate::Error;

  async fn list_all(&self) -> Result<Vec<Recipe>> {
    let sql = format!("SELECT {COLUMNS} FROM recipes ORDER BY created_at DESC, id DESC");

    let raws: Vec<RawRecipe> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawRecipe::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecipe::into_recipe).collect()
  }

  async fn get(&self, id: RecipeId) -> Result<Option<Recipe>> {
    self
      .one(
        format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1"),
        vec![id.into()],
      )
      .await
  }

  async fn create(&self, input: NewRecipe) -> Result<Recipe> {
    let now = encode_dt(Utc::now());

    let created = self
      .one(
        format!(
          "INSERT INTO recipes (name, ingredients, instructions, category, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?5)
           RETURNING {COLUMNS}"
        ),
        vec![
          text(input.name()),
          text(input.ingredients()),
          text(input.instructions()),
          opt_text(input.category()),
          now.into(),
        ],
      )
      .await?;

    // INSERT ... RETURNING always yields exactly one row.
    created.ok_or_else(|| {
      crate::Error::Database(tokio_rusqlite::Error::Rusqlite(
        rusqlite::Error::QueryReturnedNoRows,
      ))
    })
  }

  async fn update(&self, id: RecipeId, input: NewRecipe) -> Result<Option<Recipe>> {
    let now = encode_dt(Utc::now());

    // MAX keeps updated_at monotonic even if the wall clock steps backwards.
    self
      .one(
        format!(
          "UPDATE recipes
              SET name = ?1, ingredients = ?2, instructions = ?3, category = ?4,
                  updated_at = MAX(?5, updated_at)
            WHERE id = ?6
           RETURNING {COLUMNS}"
        ),
        vec![
          text(input.name()),
          text(input.ingredients()),
          text(input.instructions()),
          opt_text(input.category()),
          now.into(),
          id.into(),
        ],
      )
      .await
  }

  async fn delete(&self, id: RecipeId) -> Result<Option<Recipe>> {
    // Single statement: the returned snapshot is exactly the row removed.
    self
      .one(
        format!("DELETE FROM recipes WHERE id = ?1 RETURNING {COLUMNS}"),
        vec![id.into()],
      )
      .await
  }

  async fn ping(&self) -> Result<()> {
    self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT 1", [], |_| Ok(()))?))
      .await?;
    Ok(())
  }
}
