//! Waiter configuration.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Tuning for [`TailWaiter`](crate::TailWaiter), loadable from TOML.
///
/// ```toml
/// force_check_period_ms = 1000
/// retry_budget = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TailConfig {
    /// Longest a single wait blocks before waking up unconditionally.
    pub force_check_period_ms: u64,
    /// Watcher errors tolerated per wait; the last one is returned.
    pub retry_budget: u32,
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            force_check_period_ms: 1000,
            retry_budget: 5,
        }
    }
}

impl TailConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: TailConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.force_check_period_ms == 0 {
            return Err(Error::InvalidConfig {
                message: "force_check_period_ms must be greater than zero".to_string(),
            });
        }
        if self.retry_budget == 0 {
            return Err(Error::InvalidConfig {
                message: "retry_budget must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn force_check_period(&self) -> Duration {
        Duration::from_millis(self.force_check_period_ms)
    }
}
