//! Service-level routes: the root banner, liveness/readiness, and the
//! catch-all 404.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use recipebox_core::store::RecipeStore;
use serde_json::json;

use crate::error::{ApiError, ROUTE_NOT_FOUND};

/// `GET /`
pub async fn root() -> impl IntoResponse {
  Json(json!({ "message": "My Digital Recipe Box API is running!" }))
}

/// `GET /health` — 200 when the store answers a ping, 503 otherwise.
pub async fn health<S>(State(store): State<Arc<S>>) -> Response
where
  S: RecipeStore,
{
  let (status, body) = match store.ping().await {
    Ok(()) => (
      StatusCode::OK,
      json!({ "status": "ok", "database": "ok" }),
    ),
    Err(e) => {
      tracing::warn!(error = %e, "database health probe failed");
      (
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "status": "degraded", "database": "unavailable" }),
      )
    }
  };
  (status, [(header::CACHE_CONTROL, "no-store")], Json(body)).into_response()
}

/// Fallback for every unmatched path.
pub async fn route_not_found() -> ApiError { ApiError::NotFound(ROUTE_NOT_FOUND.to_owned()) }
