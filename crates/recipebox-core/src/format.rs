//! Plain-text helpers for presenting recipes.
//!
//! Ingredients and instructions are stored as free text; these helpers break
//! them into display items without changing what is stored.

use crate::recipe::Recipe;

/// Split an ingredient list on commas and newlines.
pub fn split_ingredients(text: &str) -> Vec<String> {
  text
    .split([',', '\n'])
    .map(str::trim)
    .filter(|item| !item.is_empty())
    .map(str::to_owned)
    .collect()
}

/// Split instructions into steps.
///
/// A new step starts at every newline and before every `<digits>.` marker
/// that begins a word and is followed by whitespace, so
/// `"1. Boil. 2. Steep."` yields `["1. Boil.", "2. Steep."]`.
pub fn split_instructions(text: &str) -> Vec<String> {
  let mut steps = Vec::new();
  for line in text.lines() {
    let mut start = 0;
    for marker in step_markers(line.as_bytes()) {
      push_trimmed(&mut steps, &line[start..marker]);
      start = marker;
    }
    push_trimmed(&mut steps, &line[start..]);
  }
  steps
}

/// Distinct, non-empty categories in first-seen order.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for c in recipes.iter().filter_map(|r| r.category.as_deref()) {
    if !c.trim().is_empty() && !out.iter().any(|seen| seen == c) {
      out.push(c.to_owned());
    }
  }
  out
}

fn push_trimmed(steps: &mut Vec<String>, s: &str) {
  let s = s.trim();
  if !s.is_empty() {
    steps.push(s.to_owned());
  }
}

// Markers are pure ASCII, so every returned offset is a char boundary.
fn step_markers(bytes: &[u8]) -> Vec<usize> {
  let mut out = Vec::new();
  let mut i = 0;
  while i < bytes.len() {
    let word_start = i == 0 || bytes[i - 1].is_ascii_whitespace();
    if !(bytes[i].is_ascii_digit() && word_start) {
      i += 1;
      continue;
    }
    let mut j = i;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
      j += 1;
    }
    let dot = j < bytes.len() && bytes[j] == b'.';
    let ends = j + 1 >= bytes.len() || bytes[j + 1].is_ascii_whitespace();
    if dot && ends && i > 0 {
      out.push(i);
    }
    i = j;
  }
  out
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  #[test]
  fn ingredients_split_on_commas_and_newlines() {
    assert_eq!(
      split_ingredients("water, tea leaves\nhoney,, "),
      vec!["water", "tea leaves", "honey"]
    );
  }

  #[test]
  fn ingredients_keep_fractions() {
    assert_eq!(
      split_ingredients("2 1/4 cups flour, 1 tsp salt"),
      vec!["2 1/4 cups flour", "1 tsp salt"]
    );
  }

  #[test]
  fn numbered_instructions_on_one_line() {
    assert_eq!(
      split_instructions("1. Preheat oven to 375°F. 2. Mix flour. 10. Bake."),
      vec!["1. Preheat oven to 375°F.", "2. Mix flour.", "10. Bake."]
    );
  }

  #[test]
  fn newline_instructions() {
    assert_eq!(
      split_instructions("Boil water\n\n  Steep tea  \nServe"),
      vec!["Boil water", "Steep tea", "Serve"]
    );
  }

  #[test]
  fn decimals_and_ranges_do_not_start_steps() {
    assert_eq!(
      split_instructions("1. Add 3.5 cups. 2. Bake 9-11 minutes."),
      vec!["1. Add 3.5 cups.", "2. Bake 9-11 minutes."]
    );
  }

  #[test]
  fn categories_are_distinct_and_ordered() {
    let now = Utc::now();
    let make = |id, category: Option<&str>| Recipe {
      id,
      name: "n".into(),
      ingredients: "i".into(),
      instructions: "s".into(),
      category: category.map(str::to_owned),
      created_at: now,
      updated_at: now,
    };
    let recipes = vec![
      make(1, Some("Lunch")),
      make(2, None),
      make(3, Some("Dessert")),
      make(4, Some("Lunch")),
    ];
    assert_eq!(categories(&recipes), vec!["Lunch", "Dessert"]);
  }
}
