//! Core types and trait definitions for the recipe box.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod filter;
pub mod format;
pub mod recipe;
pub mod store;

pub use error::{Error, Result};
pub use filter::RecipeFilter;
pub use recipe::{NewRecipe, Recipe, RecipeId};
pub use store::RecipeStore;
