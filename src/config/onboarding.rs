// ABOUTME: Onboarding configuration loaded from disk
// Controls the summary transition delay and the default log filter; never written by the wizard

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::time::Duration;

/// Onboarding settings read from `~/.orvia/config/onboarding.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Delay between picking a career and showing the summary, in milliseconds
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

const fn default_advance_delay_ms() -> u64 {
    300
}

fn default_log_filter() -> String {
    "orvia=info".to_string()
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: default_advance_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl OnboardingConfig {
    /// Get the base orvia directory
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".orvia"))
    }

    /// Get the path to the onboarding config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config/onboarding.toml"))
    }

    /// Directory for JSONL log files
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read onboarding config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse onboarding config from {}", path.display()))?;

        Ok(config)
    }

    pub const fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}
