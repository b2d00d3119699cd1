// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

/// Quiet period a title must stay untouched before a slug candidate is
/// requested for it.
pub const DEFAULT_DEBOUNCE_MS: u64 = 700;

#[derive(Clone, Debug)]
pub struct SettingsConfig {
    debounce: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl SettingsConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let debounce_ms = env::var("SETTINGS_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        if debounce_ms == 0 {
            return Err(ConfigError::Invalid(
                "SETTINGS_DEBOUNCE_MS must be positive".into(),
            ));
        }

        Ok(Self {
            debounce: Duration::from_millis(debounce_ms),
        })
    }

    pub fn new(debounce: Duration) -> Self {
        Self { debounce }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
