//! Handlers for `/recipes` endpoints.
//!
//! | Method   | Path            | Notes |
//! |----------|-----------------|-------|
//! | `GET`    | `/recipes`      | Optional `?search=` and `?category=` filters |
//! | `GET`    | `/recipes/:id`  | 404 if not found |
//! | `POST`   | `/recipes`      | Body: [`RecipeBody`]; returns 201 + stored recipe |
//! | `PUT`    | `/recipes/:id`  | Body: [`RecipeBody`]; full replacement |
//! | `DELETE` | `/recipes/:id`  | Returns `{"message", "recipe"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use recipebox_core::{NewRecipe, Recipe, RecipeFilter, RecipeId, store::RecipeStore};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, INVALID_BODY, REQUIRED_FIELDS};

// ─── Body / params ────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /recipes` and `PUT /recipes/:id`.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation failure rather than a deserialisation error.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeBody {
  pub name:         Option<String>,
  pub ingredients:  Option<String>,
  pub instructions: Option<String>,
  pub category:     Option<String>,
}

impl TryFrom<RecipeBody> for NewRecipe {
  type Error = ApiError;

  fn try_from(b: RecipeBody) -> Result<Self, ApiError> {
    NewRecipe::new(
      b.name.unwrap_or_default(),
      b.ingredients.unwrap_or_default(),
      b.instructions.unwrap_or_default(),
      b.category,
    )
    .map_err(|_| ApiError::Validation(REQUIRED_FIELDS.to_owned()))
  }
}

/// A body sent without a JSON content type is read as empty, so it fails on
/// the missing fields rather than on the encoding.
fn validate(body: Result<Json<RecipeBody>, JsonRejection>) -> Result<NewRecipe, ApiError> {
  let body = match body {
    Ok(Json(body)) => body,
    Err(JsonRejection::MissingJsonContentType(_)) => RecipeBody::default(),
    Err(rejection) => {
      tracing::debug!(%rejection, "unreadable recipe body");
      return Err(ApiError::Validation(INVALID_BODY.to_owned()));
    }
  };
  NewRecipe::try_from(body)
}

/// A non-numeric id can never name a stored recipe.
fn parse_id(raw: &str) -> Result<RecipeId, ApiError> {
  raw.parse().map_err(|_| ApiError::recipe_not_found())
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub search:   Option<String>,
  pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub message: &'static str,
  pub recipe:  Recipe,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /recipes[?search=<text>][&category=<name>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Recipe>>, ApiError>
where
  S: RecipeStore,
{
  let recipes = store
    .list_all()
    .await
    .map_err(ApiError::store("Error fetching recipes"))?;

  let filter = RecipeFilter {
    search:   params.search,
    category: params.category,
  };
  Ok(Json(filter.apply(recipes)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /recipes/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError>
where
  S: RecipeStore,
{
  let id = parse_id(&id)?;
  let recipe = store
    .get(id)
    .await
    .map_err(ApiError::store("Error fetching recipe"))?
    .ok_or_else(ApiError::recipe_not_found)?;
  Ok(Json(recipe))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /recipes` — returns 201 + the stored [`Recipe`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<RecipeBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecipeStore,
{
  let input = validate(body)?;
  let recipe = store
    .create(input)
    .await
    .map_err(ApiError::store("Error creating recipe"))?;
  tracing::info!(id = recipe.id, "recipe created");
  Ok((StatusCode::CREATED, Json(recipe)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /recipes/:id` — replaces every editable field.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<RecipeBody>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError>
where
  S: RecipeStore,
{
  let input = validate(body)?;
  let id = parse_id(&id)?;
  let recipe = store
    .update(id, input)
    .await
    .map_err(ApiError::store("Error updating recipe"))?
    .ok_or_else(ApiError::recipe_not_found)?;
  tracing::info!(id, "recipe updated");
  Ok(Json(recipe))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /recipes/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError>
where
  S: RecipeStore,
{
  let id = parse_id(&id)?;
  let recipe = store
    .delete(id)
    .await
    .map_err(ApiError::store("Error deleting recipe"))?
    .ok_or_else(ApiError::recipe_not_found)?;
  tracing::info!(id, "recipe deleted");
  Ok(Json(Deleted {
    message: "Recipe deleted successfully",
    recipe,
  }))
}
