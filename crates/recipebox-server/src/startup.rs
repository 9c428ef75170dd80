//! Bounded retry for fallible startup steps (opening the database).
//!
//! Development fails fast on the first error. Production retries with
//! exponential backoff, up to a fixed number of attempts, logging each
//! failure.

use std::{fmt::Display, future::Future, time::Duration};

use crate::settings::{Environment, ServerConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
  /// Total attempts, including the first. Always at least 1.
  pub max_attempts:    u32,
  pub initial_backoff: Duration,
}

impl RetryPolicy {
  pub fn from_config(cfg: &ServerConfig) -> Self {
    let max_attempts = match cfg.environment {
      Environment::Development => 1,
      Environment::Production => cfg.startup_max_attempts.max(1),
    };
    Self {
      max_attempts,
      initial_backoff: Duration::from_millis(cfg.startup_backoff_ms),
    }
  }

  /// Delay after failed attempt number `attempt` (1-based): the initial
  /// backoff doubled for each earlier failure.
  pub fn delay_after(&self, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    self.initial_backoff.saturating_mul(factor)
  }
}

/// Run `op` until it succeeds or `policy.max_attempts` is exhausted, returning
/// the last error in the latter case.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, what: &str, mut op: F) -> Result<T, E>
where
  F: FnMut() -> Fut,
  Fut: Future<Output = Result<T, E>>,
  E: Display,
{
  let mut attempt = 1;
  loop {
    match op().await {
      Ok(value) => return Ok(value),
      Err(e) if attempt >= policy.max_attempts => {
        tracing::error!(attempt, error = %e, "{what} failed; giving up");
        return Err(e);
      }
      Err(e) => {
        let delay = policy.delay_after(attempt);
        tracing::warn!(
          attempt,
          max_attempts = policy.max_attempts,
          delay_ms = delay.as_millis() as u64,
          error = %e,
          "{what} failed; retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
      }
    }
  }
}
