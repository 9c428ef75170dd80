//! Async HTTP client wrapping the recipe box JSON API.

use anyhow::{Context, Result, anyhow};
use recipebox_core::{NewRecipe, Recipe, RecipeFilter, RecipeId};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the recipe box API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the recipe box JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

/// Error and delete-confirmation bodies both carry a `message`.
#[derive(Deserialize)]
struct MessageBody {
  message: String,
}

#[derive(Deserialize)]
struct DeletedBody {
  recipe: Recipe,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/recipes[?search=..][&category=..]`
  pub async fn list_recipes(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>> {
    let mut query = Vec::new();
    if let Some(s) = &filter.search {
      query.push(("search", s.as_str()));
    }
    if let Some(c) = &filter.category {
      query.push(("category", c.as_str()));
    }

    let resp = self
      .client
      .get(self.url("/recipes"))
      .query(&query)
      .send()
      .await
      .context("GET /recipes failed")?;

    ok_or_message(resp, "GET /recipes")
      .await?
      .json()
      .await
      .context("deserialising recipes")
  }

  /// `GET /api/recipes/:id`
  pub async fn get_recipe(&self, id: RecipeId) -> Result<Recipe> {
    let what = format!("GET /recipes/{id}");
    let resp = self
      .client
      .get(self.url(&format!("/recipes/{id}")))
      .send()
      .await
      .with_context(|| format!("{what} failed"))?;

    ok_or_message(resp, &what)
      .await?
      .json()
      .await
      .context("deserialising recipe")
  }

  /// `POST /api/recipes`
  pub async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe> {
    let resp = self
      .client
      .post(self.url("/recipes"))
      .json(input)
      .send()
      .await
      .context("POST /recipes failed")?;

    ok_or_message(resp, "POST /recipes")
      .await?
      .json()
      .await
      .context("deserialising created recipe")
  }

  /// `PUT /api/recipes/:id`
  pub async fn update_recipe(&self, id: RecipeId, input: &NewRecipe) -> Result<Recipe> {
    let what = format!("PUT /recipes/{id}");
    let resp = self
      .client
      .put(self.url(&format!("/recipes/{id}")))
      .json(input)
      .send()
      .await
      .with_context(|| format!("{what} failed"))?;

    ok_or_message(resp, &what)
      .await?
      .json()
      .await
      .context("deserialising updated recipe")
  }

  /// `DELETE /api/recipes/:id` — returns the deleted recipe.
  pub async fn delete_recipe(&self, id: RecipeId) -> Result<Recipe> {
    let what = format!("DELETE /recipes/{id}");
    let resp = self
      .client
      .delete(self.url(&format!("/recipes/{id}")))
      .send()
      .await
      .with_context(|| format!("{what} failed"))?;

    let body: DeletedBody = ok_or_message(resp, &what)
      .await?
      .json()
      .await
      .context("deserialising deleted recipe")?;
    Ok(body.recipe)
  }
}

/// Pass successful responses through; turn anything else into an error that
/// carries the server's `message` when there is one.
async fn ok_or_message(resp: Response, what: &str) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  match resp.json::<MessageBody>().await {
    Ok(body) => Err(anyhow!("{what} → {status}: {}", body.message)),
    Err(_) => Err(anyhow!("{what} → {status}")),
  }
}
