//! The `RecipeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `recipebox-store-sqlite`).
//! Higher layers (`recipebox-api`, `recipebox-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::recipe::{NewRecipe, Recipe, RecipeId};

/// Abstraction over a recipe store backend.
///
/// "Not found" is reported as `Ok(None)`; `Err` is reserved for connectivity
/// and query failures.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecipeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All recipes, newest first. No pagination.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Recipe>, Self::Error>> + Send + '_;

  /// Retrieve a recipe by id. Returns `None` if not found.
  fn get(
    &self,
    id: RecipeId,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + '_;

  /// Persist a new recipe. The store assigns `id` and sets `created_at` and
  /// `updated_at` to the same instant.
  fn create(
    &self,
    input: NewRecipe,
  ) -> impl Future<Output = Result<Recipe, Self::Error>> + Send + '_;

  /// Replace every editable field of recipe `id` and refresh `updated_at`.
  ///
  /// Returns `None` (and writes nothing) if `id` does not exist.
  fn update(
    &self,
    id: RecipeId,
    input: NewRecipe,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + '_;

  /// Delete recipe `id`, returning the row as it was just before deletion.
  fn delete(
    &self,
    id: RecipeId,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + '_;

  /// Round-trip to the backend without touching any rows.
  fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
