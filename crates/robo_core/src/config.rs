//! Session configuration
//!
//! Only session-level knobs are configurable. Field size, team size, speeds
//! and match duration are fixed constants.

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::engine::feed::DEFAULT_FEED_CAPACITY;
use crate::engine::types::GameMode;
use crate::error::{ConfigError, Result};

/// Env var naming a JSON session config file
pub const SESSION_CONFIG_PATH_ENV: &str = "ROBO_SESSION_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the simulation RNG (chase jitter, kick-off and restart kicks)
    pub seed: u64,
    /// Mode selected at startup; `None` waits for `select_mode`
    pub mode: Option<GameMode>,
    /// Frames kept by the in-memory feed recorder
    pub feed_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42, mode: None, feed_capacity: DEFAULT_FEED_CAPACITY }
    }
}

impl SessionConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_feed_capacity(mut self, capacity: usize) -> Self {
        self.feed_capacity = capacity;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed_capacity == 0 {
            return Err(ConfigError::Invalid("feed_capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `ROBO_SESSION_CONFIG_PATH`.
    ///
    /// Unset or blank means defaults.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(SESSION_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::info!("loading session config from {SESSION_CONFIG_PATH_ENV}='{path}'");
        Self::from_path(path)
    }
}
