//! Configuration handling for the onboarding form

use crate::submit::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the submission endpoint
pub const ENDPOINT_ENV: &str = "ONBOARD_ENDPOINT";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnboardConfig {
    /// Where the form is posted
    pub endpoint: Option<String>,
}

impl OnboardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "onboard", "onboard-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: OnboardConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "onboard", "onboard-tui")
            .map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Endpoint to post to: environment, then file, then the built-in default
    pub fn resolve_endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}
