//! Recipe — the only entity in the catalog.
//!
//! A [`Recipe`] is what the store hands back: a persisted row with its
//! store-assigned id and timestamps. A [`NewRecipe`] is the validated input
//! for both create and full-replacement update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned surrogate key.
pub type RecipeId = i64;

/// A persisted recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
  pub id:           RecipeId,
  pub name:         String,
  pub ingredients:  String,
  pub instructions: String,
  /// `None` when the recipe has no category; never `Some("")`.
  pub category:     Option<String>,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

/// Validated input for [`RecipeStore::create`](crate::RecipeStore::create)
/// and [`RecipeStore::update`](crate::RecipeStore::update).
///
/// The required fields are guaranteed non-blank. Text is kept exactly as
/// given; whitespace is only trimmed for the emptiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecipe {
  name:         String,
  ingredients:  String,
  instructions: String,
  category:     Option<String>,
}

impl NewRecipe {
  /// Validate and build a new recipe input.
  ///
  /// A blank `category` is normalised to `None`.
  pub fn new(
    name: impl Into<String>,
    ingredients: impl Into<String>,
    instructions: impl Into<String>,
    category: Option<String>,
  ) -> Result<Self> {
    let name = required("name", name.into())?;
    let ingredients = required("ingredients", ingredients.into())?;
    let instructions = required("instructions", instructions.into())?;
    let category = category.filter(|c| !c.trim().is_empty());

    Ok(Self {
      name,
      ingredients,
      instructions,
      category,
    })
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn ingredients(&self) -> &str { &self.ingredients }

  pub fn instructions(&self) -> &str { &self.instructions }

  pub fn category(&self) -> Option<&str> { self.category.as_deref() }
}

fn required(field: &'static str, value: String) -> Result<String> {
  if value.trim().is_empty() {
    Err(Error::MissingField(field))
  } else {
    Ok(value)
  }
}
