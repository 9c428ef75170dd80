//! Integration tests for `SqliteStore` against an in-memory database.

use recipebox_core::{NewRecipe, store::RecipeStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn tea() -> NewRecipe {
  NewRecipe::new("Tea", "water, tea leaves", "1. Boil. 2. Steep.", None).unwrap()
}

fn soup(category: Option<&str>) -> NewRecipe {
  NewRecipe::new(
    "Tomato Soup",
    "tomatoes\nstock\nbasil",
    "Simmer\nBlend",
    category.map(str::to_owned),
  )
  .unwrap()
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_echoes_input_and_sets_timestamps() {
  let s = store().await;

  let r = s.create(soup(Some("Dinner"))).await.unwrap();
  assert!(r.id > 0);
  assert_eq!(r.name, "Tomato Soup");
  assert_eq!(r.ingredients, "tomatoes\nstock\nbasil");
  assert_eq!(r.instructions, "Simmer\nBlend");
  assert_eq!(r.category.as_deref(), Some("Dinner"));
  assert_eq!(r.created_at, r.updated_at);
}

#[tokio::test]
async fn create_without_category_stores_null() {
  let s = store().await;

  let r = s.create(tea()).await.unwrap();
  assert_eq!(r.category, None);

  let fetched = s.get(r.id).await.unwrap().unwrap();
  assert_eq!(fetched.category, None);
}

#[tokio::test]
async fn created_ids_are_fresh() {
  let s = store().await;

  let a = s.create(tea()).await.unwrap();
  let b = s.create(tea()).await.unwrap();
  assert_ne!(a.id, b.id);

  // AUTOINCREMENT: a deleted id is never handed out again.
  s.delete(b.id).await.unwrap();
  let c = s.create(tea()).await.unwrap();
  assert!(c.id > b.id);
}

#[tokio::test]
async fn get_returns_created_record() {
  let s = store().await;

  let created = s.create(soup(None)).await.unwrap();
  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;

  let first = s.create(tea()).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(2)).await;
  let second = s.create(soup(None)).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(2)).await;
  let third = s.create(tea()).await.unwrap();

  let ids: Vec<_> = s.list_all().await.unwrap().iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![third.id, second.id, first.id]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_fields_and_keeps_created_at() {
  let s = store().await;

  let original = s.create(soup(Some("Dinner"))).await.unwrap();
  tokio::time::sleep(std::time::Duration::from_millis(2)).await;

  let updated = s
    .update(original.id, tea())
    .await
    .unwrap()
    .expect("recipe exists");

  assert_eq!(updated.id, original.id);
  assert_eq!(updated.name, "Tea");
  assert_eq!(updated.ingredients, "water, tea leaves");
  assert_eq!(updated.category, None);
  assert_eq!(updated.created_at, original.created_at);
  assert!(updated.updated_at >= original.updated_at);

  assert_eq!(s.get(original.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_missing_returns_none_and_inserts_nothing() {
  let s = store().await;

  let result = s.update(99, tea()).await.unwrap();
  assert!(result.is_none());
  assert_eq!(s.count().await.unwrap(), 0);
  assert!(s.get(99).await.unwrap().is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_snapshot_then_not_found() {
  let s = store().await;

  let created = s.create(soup(Some("Dinner"))).await.unwrap();
  let deleted = s.delete(created.id).await.unwrap();
  assert_eq!(deleted, Some(created.clone()));

  assert!(s.get(created.id).await.unwrap().is_none());
  assert!(s.delete(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_none() {
  let s = store().await;
  s.create(tea()).await.unwrap();

  assert!(s.delete(12345).await.unwrap().is_none());
  assert_eq!(s.count().await.unwrap(), 1);
}

// ─── Schema / seeding ────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_fills_empty_table_once() {
  let s = store().await;

  assert_eq!(s.seed_if_empty().await.unwrap(), 3);
  assert_eq!(s.seed_if_empty().await.unwrap(), 0);

  let names: Vec<_> = s
    .list_all()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.name)
    .collect();
  assert_eq!(names.len(), 3);
  assert!(names.contains(&"Chocolate Chip Cookies".to_string()));
  assert!(names.contains(&"Caesar Salad".to_string()));
  assert!(names.contains(&"Pancakes".to_string()));
}

#[tokio::test]
async fn seed_skips_non_empty_table() {
  let s = store().await;
  s.create(tea()).await.unwrap();

  assert_eq!(s.seed_if_empty().await.unwrap(), 0);
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn reset_empties_the_table() {
  let s = store().await;
  s.seed_if_empty().await.unwrap();

  s.reset().await.unwrap();
  assert_eq!(s.count().await.unwrap(), 0);

  let r = s.create(tea()).await.unwrap();
  assert_eq!(r.id, 1);
}

#[tokio::test]
async fn schema_init_is_idempotent() {
  let s = store().await;
  s.create(tea()).await.unwrap();

  s.init_schema().await.unwrap();
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn ping_succeeds() {
  let s = store().await;
  s.ping().await.unwrap();
}
