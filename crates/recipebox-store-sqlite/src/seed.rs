//! Canned recipes inserted into a fresh, empty database.

pub struct SampleRecipe {
  pub name:         &'static str,
  pub ingredients:  &'static str,
  pub instructions: &'static str,
  pub category:     &'static str,
}

pub const SAMPLES: [SampleRecipe; 3] = [
  SampleRecipe {
    name:         "Chocolate Chip Cookies",
    ingredients:  "2 1/4 cups all-purpose flour, 1 tsp baking soda, 1 tsp salt, 1 cup butter, 3/4 cup granulated sugar, 3/4 cup brown sugar, 2 eggs, 2 tsp vanilla extract, 2 cups chocolate chips",
    instructions: "1. Preheat oven to 375°F. 2. Mix flour, baking soda, and salt in a bowl. 3. Cream butter and sugars, add eggs and vanilla. 4. Gradually add flour mixture. 5. Stir in chocolate chips. 6. Drop spoonfuls on baking sheet. 7. Bake 9-11 minutes.",
    category:     "Dessert",
  },
  SampleRecipe {
    name:         "Caesar Salad",
    ingredients:  "1 large head romaine lettuce, 1/2 cup parmesan cheese, 1/4 cup croutons, Caesar dressing, 2 tbsp lemon juice, 2 cloves garlic, 2 anchovy fillets",
    instructions: "1. Wash and chop romaine lettuce. 2. Make dressing with garlic, anchovies, lemon juice. 3. Toss lettuce with dressing. 4. Add parmesan and croutons. 5. Serve immediately.",
    category:     "Lunch",
  },
  SampleRecipe {
    name:         "Pancakes",
    ingredients:  "1 1/2 cups flour, 3 1/2 tsp baking powder, 1 tsp salt, 1 tbsp sugar, 1 1/4 cups milk, 1 egg, 3 tbsp melted butter",
    instructions: "1. Mix dry ingredients in a bowl. 2. In another bowl, whisk milk, egg, and melted butter. 3. Combine wet and dry ingredients. 4. Heat griddle and cook pancakes until bubbles form. 5. Flip and cook until golden.",
    category:     "Breakfast",
  },
];

/// Insert [`SAMPLES`] if `recipes` is empty. Returns the number of rows
/// inserted (0 when the table already had content).
///
/// The emptiness check and the inserts share one transaction.
pub fn seed_if_empty(
  conn: &mut rusqlite::Connection,
  now: &str,
) -> rusqlite::Result<usize> {
  let tx = conn.transaction()?;

  let count: i64 = tx.query_row("SELECT COUNT(*) FROM recipes", [], |r| r.get(0))?;
  if count > 0 {
    return Ok(0);
  }

  {
    let mut stmt = tx.prepare(
      "INSERT INTO recipes (name, ingredients, instructions, category, created_at, updated_at)
       VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )?;
    for s in &SAMPLES {
      stmt.execute(rusqlite::params![
        s.name,
        s.ingredients,
        s.instructions,
        s.category,
        now
      ])?;
    }
  }

  tx.commit()?;
  Ok(SAMPLES.len())
}
