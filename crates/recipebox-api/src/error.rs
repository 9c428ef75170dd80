//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error reaches the client as `{"message": "..."}`. Store failures are
//! logged with their source and reported with a fixed message only.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub const REQUIRED_FIELDS: &str = "Name, ingredients, and instructions are required";
pub const INVALID_BODY: &str = "Invalid request body";
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("{context}: {source}")]
  Store {
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Adapter for `map_err` that wraps a store error with a client-facing
  /// message, e.g. `.map_err(ApiError::store("Error fetching recipes"))`.
  pub fn store<E>(context: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Store {
      context,
      source: Box::new(e),
    }
  }

  pub fn recipe_not_found() -> Self { ApiError::NotFound(RECIPE_NOT_FOUND.to_owned()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::Validation(m) => {
        tracing::info!(message = %m, "rejected request");
        (StatusCode::BAD_REQUEST, m)
      }
      ApiError::NotFound(m) => {
        tracing::info!(message = %m, "not found");
        (StatusCode::NOT_FOUND, m)
      }
      ApiError::Store { context, source } => {
        tracing::error!(error = %source, "{context}");
        (StatusCode::INTERNAL_SERVER_ERROR, context.to_owned())
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
