//! `recipebox` — command-line client for the recipe box API.
//!
//! # Usage
//!
//! ```text
//! recipebox list --search flour
//! recipebox show 3
//! recipebox add --name Tea --ingredients "water, tea leaves" --instructions "1. Boil. 2. Steep."
//! recipebox edit 3 --category Breakfast
//! recipebox delete 3
//! recipebox --url http://recipes.local:5000 categories
//! ```

mod client;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use recipebox_core::{NewRecipe, RecipeFilter, RecipeId, format::categories};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "recipebox", about = "Command-line client for the recipe box")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the recipe box server (default: http://localhost:5000).
  #[arg(long, env = "RECIPEBOX_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List recipes, newest first.
  List {
    /// Case-insensitive text to find in names and ingredients.
    #[arg(short, long)]
    search:   Option<String>,
    /// Only recipes in this category.
    #[arg(short, long)]
    category: Option<String>,
  },
  /// List the categories in use.
  Categories,
  /// Show one recipe in full.
  Show { id: RecipeId },
  /// Add a new recipe.
  Add {
    #[arg(long)]
    name:         String,
    #[arg(long)]
    ingredients:  String,
    #[arg(long)]
    instructions: String,
    #[arg(long)]
    category:     Option<String>,
  },
  /// Edit a recipe; fields not given keep their current value.
  /// Pass `--category ""` to clear the category.
  Edit {
    id:           RecipeId,
    #[arg(long)]
    name:         Option<String>,
    #[arg(long)]
    ingredients:  Option<String>,
    #[arg(long)]
    instructions: Option<String>,
    #[arg(long)]
    category:     Option<String>,
  },
  /// Delete a recipe.
  Delete { id: RecipeId },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:5000".to_string()),
  };
  tracing::debug!(base_url = %api_config.base_url, "using API");

  let client = ApiClient::new(api_config)?;
  run(&client, args.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::List { search, category } => {
      let recipes = client
        .list_recipes(&RecipeFilter { search, category })
        .await?;
      if recipes.is_empty() {
        println!("No recipes found.");
      }
      for r in &recipes {
        println!("{}", render::summary(r));
      }
    }
    Command::Categories => {
      let recipes = client.list_recipes(&RecipeFilter::default()).await?;
      for c in categories(&recipes) {
        println!("{c}");
      }
    }
    Command::Show { id } => {
      let recipe = client.get_recipe(id).await?;
      print!("{}", render::detail(&recipe));
    }
    Command::Add {
      name,
      ingredients,
      instructions,
      category,
    } => {
      let input = NewRecipe::new(name, ingredients, instructions, category)?;
      let recipe = client.create_recipe(&input).await?;
      println!("Added {}", render::summary(&recipe).trim_start());
    }
    Command::Edit {
      id,
      name,
      ingredients,
      instructions,
      category,
    } => {
      let current = client.get_recipe(id).await?;
      let input = NewRecipe::new(
        name.unwrap_or(current.name),
        ingredients.unwrap_or(current.ingredients),
        instructions.unwrap_or(current.instructions),
        category.or(current.category),
      )?;
      let recipe = client.update_recipe(id, &input).await?;
      println!("Updated {}", render::summary(&recipe).trim_start());
    }
    Command::Delete { id } => {
      let recipe = client.delete_recipe(id).await?;
      println!("Deleted {}", render::summary(&recipe).trim_start());
    }
  }
  Ok(())
}
