//! Completion client configuration.

use crate::api::retry::RetryConfig;
use crate::error::{Error, Result};
use crate::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Settings consumed when constructing the completion client.
///
/// Defaults match a stock local Ollama install running a small reasoning
/// model.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Completion model identifier. Default: `"deepseek-r1:1.5b"`.
    pub model: String,
    /// Backend network address. Default: `"http://localhost:11434"`.
    pub base_url: String,
    /// Sampling temperature in `[0, 1]`. Default: `0.7`.
    pub temperature: f32,
    /// Retry policy for transient backend failures. Default: no retries.
    pub retry: RetryConfig,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            retry: RetryConfig::default(),
        }
    }
}

impl ChatConfig {
    /// Create a config for the given model and backend address.
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Enable up to `retries` retries for transient backend failures.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retry = RetryConfig::with_retries(retries);
        self
    }

    /// Check the config is usable before a client is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Configuration("model identifier is empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::Configuration("backend address is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(Error::Configuration(format!(
                "temperature {} is outside [0, 1]",
                self.temperature
            )));
        }
        Ok(())
    }
}
