//! Runtime server configuration.
//!
//! Layered with the `config` crate: an optional TOML file, overlaid by
//! `RECIPEBOX_*` environment variables (e.g. `RECIPEBOX_PORT=8080`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Deployment flavour. Governs how hard startup tries before giving up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  #[default]
  Development,
  Production,
}

/// Runtime server configuration, deserialised from `recipebox.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub database_path:        PathBuf,
  pub environment:          Environment,
  /// Insert the sample recipes into an empty database on `serve`.
  pub seed:                 bool,
  pub startup_max_attempts: u32,
  pub startup_backoff_ms:   u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "0.0.0.0".to_string(),
      port:                 5000,
      database_path:        PathBuf::from("recipes.db"),
      environment:          Environment::Development,
      seed:                 true,
      startup_max_attempts: 5,
      startup_backoff_ms:   500,
    }
  }
}

impl ServerConfig {
  /// Load from `path` (if it exists) and `RECIPEBOX_*` environment variables.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("RECIPEBOX"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `database_path` with a leading `~` expanded to the user's home directory.
  pub fn database_path(&self) -> PathBuf { expand_tilde(&self.database_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
