//! Process-level plumbing for the recipe box server: configuration loading,
//! the startup retry policy and sample seeding. The HTTP surface lives in `recipebox-api`.

pub mod seeding;
pub mod settings;
pub mod startup;

pub use seeding::seed_samples;
pub use settings::{Environment, ServerConfig};
pub use startup::RetryPolicy;
