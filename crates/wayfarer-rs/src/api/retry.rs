//! Automatic retry with exponential backoff and jitter.
//!
//! Retries transient backend errors (429, 5xx, network timeouts) with
//! configurable exponential backoff. Never retries client-side errors
//! such as 400/401 or a rejected configuration. The session core itself
//! never retries; this policy lives inside the completion client, and the
//! default is zero retries.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries (0 = no retries, just fail immediately).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff multiplier (typically 2.0 for exponential backoff).
    pub multiplier: f64,
    /// Whether to add jitter to prevent thundering herd.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Create a config with the given number of retries. Uses sensible defaults.
    pub fn with_retries(retries: u32) -> Self {
        Self {
            max_retries: retries,
            ..Default::default()
        }
    }

    /// Calculate the delay for a given attempt number (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_secs_f64() * self.multiplier.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_secs_f64());

        if self.jitter {
            // Deterministic jitter keyed on the attempt number; not worth
            // pulling in rand just for this.
            let jitter_factor = match attempt % 4 {
                0 => 0.75,
                1 => 0.90,
                2 => 0.60,
                3 => 0.85,
                _ => 0.80,
            };
            Duration::from_secs_f64(capped * jitter_factor)
        } else {
            Duration::from_secs_f64(capped)
        }
    }
}

/// Whether an error indicates a transient (retryable) backend failure.
pub fn is_transient(error: &Error) -> bool {
    let Error::Backend(message) = error else {
        return false;
    };

    let transient_statuses = ["429", "500", "502", "503", "504"];
    if transient_statuses
        .iter()
        .any(|s| message.contains(&format!("HTTP {s}")))
    {
        return true;
    }

    let lower = message.to_lowercase();
    [
        "request failed:",
        "connection reset",
        "connection refused",
        "timed out",
        "timeout",
        "broken pipe",
        "network",
    ]
    .iter()
    .any(|p| lower.contains(p))
}

/// Whether an error is a permanent (non-retryable) failure.
pub fn is_permanent(error: &Error) -> bool {
    match error {
        Error::Backend(message) => ["HTTP 400", "HTTP 401", "HTTP 403", "HTTP 404", "HTTP 422"]
            .iter()
            .any(|p| message.contains(p)),
        _ => true,
    }
}

/// Retry an async backend call with exponential backoff for transient errors.
pub async fn retry_call<T, F, Fut>(config: &RetryConfig, mut call: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt < config.max_retries && is_transient(&e) && !is_permanent(&e) {
                    let delay = config.delay_for_attempt(attempt);
                    warn!(
                        "Transient backend error (attempt {}/{}): {e}. Retrying in {delay:?}...",
                        attempt + 1,
                        config.max_retries,
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                } else {
                    return Err(e);
                }
            }
        }
    }
}
