//! Substring search over an already-fetched recipe list.

use crate::recipe::Recipe;

/// Criteria for narrowing a recipe list.
///
/// Blank criteria are ignored, so `RecipeFilter::default()` matches everything.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
  /// Case-insensitive substring matched against name and ingredients.
  pub search:   Option<String>,
  /// Exact category match.
  pub category: Option<String>,
}

impl RecipeFilter {
  pub fn matches(&self, recipe: &Recipe) -> bool {
    let search_ok = match non_blank(&self.search) {
      None => true,
      Some(term) => {
        let term = term.to_lowercase();
        recipe.name.to_lowercase().contains(&term)
          || recipe.ingredients.to_lowercase().contains(&term)
      }
    };

    let category_ok = match non_blank(&self.category) {
      None => true,
      Some(c) => recipe.category.as_deref() == Some(c),
    };

    search_ok && category_ok
  }

  /// Keep only matching recipes, preserving order.
  pub fn apply(&self, mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.retain(|r| self.matches(r));
    recipes
  }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
  s.as_deref().filter(|s| !s.trim().is_empty())
}
