//! JSON REST API for the recipe box.
//!
//! Exposes an axum [`Router`] backed by any [`recipebox_core::RecipeStore`].
//! TLS and process concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! [`app`] is the complete service: `/`, `/health`, the recipe routes under
//! `/api`, a JSON 404 fallback, CORS and request tracing. Use [`api_router`]
//! on its own to mount the recipe routes somewhere else:
//!
//! ```rust,ignore
//! .nest("/api", recipebox_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod health;
pub mod recipes;

use std::sync::Arc;

use axum::{Router, routing::get};
use recipebox_core::store::RecipeStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

/// Build the recipe router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecipeStore + 'static,
{
  Router::new()
    .route("/recipes", get(recipes::list::<S>).post(recipes::create::<S>))
    .route(
      "/recipes/{id}",
      get(recipes::get_one::<S>)
        .put(recipes::update_one::<S>)
        .delete(recipes::delete_one::<S>),
    )
    .method_not_allowed_fallback(health::route_not_found)
    .with_state(store)
}

/// Build the full HTTP service.
pub fn app<S>(store: Arc<S>) -> Router<()>
where
  S: RecipeStore + 'static,
{
  Router::new()
    .route("/", get(health::root))
    .route("/health", get(health::health::<S>))
    .method_not_allowed_fallback(health::route_not_found)
    .with_state(store.clone())
    .nest("/api", api_router(store))
    .fallback(health::route_not_found)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

// ─── Integration tests ────────────────────────────────────────────────────────
