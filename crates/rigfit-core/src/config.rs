//! Application configuration management.
//!
//! This module handles loading and saving the admin console configuration:
//! the backend base URL, the last used login email and which backend holds
//! the refresh token.
//!
//! Configuration is stored at `~/.config/rigfit-admin/config.json`. The
//! `RIGFIT_API_URL` environment variable overrides the stored URL, and an
//! explicit override (e.g. a CLI flag) beats both.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::{FileTokenStore, KeyringTokenStore, RefreshTokenStore, TokenStoreKind};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "rigfit-admin";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "RIGFIT_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub last_email: Option<String>,
    #[serde(default)]
    pub token_store: TokenStoreKind,

    #[serde(skip)]
    api_url_override: Option<String>,
    #[serde(skip)]
    cache_dir_override: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply `RIGFIT_API_URL` if it is set and non-empty
    pub fn apply_env(self) -> Self {
        let from_env = std::env::var(API_URL_ENV).ok();
        self.with_api_url_override(from_env)
    }

    /// Override the base URL for this process without persisting it
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_url_override = Some(url.trim().to_string());
        }
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir_override = Some(dir.into());
        self
    }

    /// Resolved base URL; empty when nothing is configured
    pub fn api_url(&self) -> String {
        self.api_url_override
            .clone()
            .or_else(|| self.api_url.clone())
            .unwrap_or_default()
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir_override {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Build the refresh-token store selected by `token_store`
    pub fn token_store(&self) -> Result<Arc<dyn RefreshTokenStore>> {
        Ok(match self.token_store {
            TokenStoreKind::File => Arc::new(FileTokenStore::new(&self.cache_dir()?)),
            TokenStoreKind::Keyring => Arc::new(KeyringTokenStore::new()),
        })
    }
}
