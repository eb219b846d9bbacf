//! Application configuration
//!
//! Configuration loaded from `.rest-store.toml`, with the backend URL
//! overridable from the environment (or a `.env` file).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "REST_STORE_BASE_URL";

/// Base URL of the local development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every request path is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Also write logs here. A directory gets a timestamped file per run.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from file (or defaults), then apply environment overrides
    ///
    /// A config file that exists but does not parse is an error.
    pub fn load() -> Result<Self> {
        // A missing .env file is the normal case
        let _ = dotenvy::dotenv();

        Ok(Self::from_file()?.with_overrides(|key| std::env::var(key).ok()))
    }

    fn from_file() -> Result<Self> {
        match crate::load_config_file() {
            Some((path, content)) => Self::from_toml(&path, &content),
            None => Ok(Self::default()),
        }
    }

    /// Parse the content of the config file at `path`
    pub fn from_toml(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply overrides looked up by environment variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = base_url;
        }
        self
    }
}
