//! Plain-text rendering of recipes for the terminal.

use std::fmt::Write as _;

use recipebox_core::{
  Recipe,
  format::{split_ingredients, split_instructions},
};

/// One line per recipe: `  12  Pancakes [Breakfast]`.
pub fn summary(recipe: &Recipe) -> String {
  match &recipe.category {
    Some(c) => format!("{:>4}  {} [{c}]", recipe.id, recipe.name),
    None => format!("{:>4}  {}", recipe.id, recipe.name),
  }
}

/// Full recipe with bulleted ingredients and numbered steps.
pub fn detail(recipe: &Recipe) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{} (#{})", recipe.name, recipe.id);
  if let Some(c) = &recipe.category {
    let _ = writeln!(out, "Category: {c}");
  }
  let _ = writeln!(out, "Added:    {}", recipe.created_at.format("%Y-%m-%d %H:%M"));
  if recipe.updated_at != recipe.created_at {
    let _ = writeln!(out, "Updated:  {}", recipe.updated_at.format("%Y-%m-%d %H:%M"));
  }

  out.push_str("\nIngredients\n");
  for item in split_ingredients(&recipe.ingredients) {
    let _ = writeln!(out, "  • {item}");
  }

  out.push_str("\nInstructions\n");
  for (n, step) in split_instructions(&recipe.instructions).iter().enumerate() {
    let _ = writeln!(out, "  {:>2}. {}", n + 1, strip_step_number(step));
  }
  out
}

/// `"2. Mix flour."` → `"Mix flour."`; unnumbered steps pass through.
fn strip_step_number(step: &str) -> &str {
  let digits = step.bytes().take_while(u8::is_ascii_digit).count();
  match step[digits..].strip_prefix('.') {
    Some(rest) if digits > 0 => rest.trim_start(),
    _ => step,
  }
}
