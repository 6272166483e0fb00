use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::{GrokirError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const HOME_ENV: &str = "GROKIR_HOME";
pub const BASE_URL_ENV: &str = "GROKIR_BASE_URL";
pub const USER_AGENT_ENV: &str = "GROKIR_USER_AGENT";

/// Client configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrokirConfig {
    /// Scheme and host of the API (e.g. "https://grokipedia.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent in the User-Agent header of every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for GrokirConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl GrokirConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| GrokirError::Config(format!("{}: {}", config_path.display(), e)))?;
        let mut config: GrokirConfig = serde_json::from_str(&content)
            .map_err(|e| GrokirError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.normalize();
        Ok(config)
    }

    /// Resolve the configuration for this process: the config file (if any)
    /// followed by environment overrides.
    pub fn resolve() -> Result<Self> {
        let mut config = match config_dir() {
            Some(dir) => Self::load(dir)?,
            None => Self::default(),
        };
        config.apply_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(USER_AGENT_ENV).ok(),
        );
        Ok(config)
    }

    pub fn apply_overrides(&mut self, base_url: Option<String>, user_agent: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(agent) = user_agent.filter(|a| !a.trim().is_empty()) {
            self.user_agent = agent;
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = trimmed.to_string();
    }
}

/// `$GROKIR_HOME` when set, the platform config directory otherwise.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "grokir", "grokir").map(|dirs| dirs.config_dir().to_path_buf())
}
