//! Sample data for `serve`.

use recipebox_store_sqlite::SqliteStore;

/// Seed an empty store with the sample recipes, logging the outcome.
///
/// Never fails: a broken table is reported as a warning and the server keeps
/// starting. Returns the number of rows inserted, or `None` on error.
pub async fn seed_samples(store: &SqliteStore) -> Option<usize> {
  match store.seed_if_empty().await {
    Ok(0) => {
      tracing::info!("database already has recipes; skipping sample data");
      Some(0)
    }
    Ok(n) => {
      tracing::info!(inserted = n, "sample recipes inserted");
      Some(n)
    }
    Err(e) => {
      tracing::warn!(error = %e, "failed to insert sample recipes");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn seeds_once() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    assert_eq!(seed_samples(&store).await, Some(3));
    assert_eq!(seed_samples(&store).await, Some(0));
    assert_eq!(store.count().await.unwrap(), 3);
  }

  #[tokio::test]
  async fn missing_table_is_logged_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.db");
    let store = SqliteStore::open(&path).await.unwrap();

    rusqlite::Connection::open(&path)
      .unwrap()
      .execute_batch("DROP TABLE recipes")
      .unwrap();

    assert_eq!(seed_samples(&store).await, None);
  }
}
