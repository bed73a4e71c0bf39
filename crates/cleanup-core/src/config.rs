//! Application configuration management.
//!
//! Configuration is stored at `~/.config/cleanup-crew/config.json`. Every
//! field is optional; unset fields fall back to the platform config and
//! cache directories.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::page::Page;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "cleanup-crew";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Preference store file name
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Where the theme preference is persisted
    pub preferences_path: Option<PathBuf>,
    /// Page description to load instead of the built-in site
    pub page_path: Option<PathBuf>,
    /// Directory for log files
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
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

    pub fn preferences_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.preferences_path {
            return Ok(path.clone());
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(PREFERENCES_FILE))
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.log_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join("logs"))
    }

    /// The page to load: the configured page file, or the built-in site if
    /// none is set or it cannot be read.
    pub fn page(&self) -> Page {
        match self.page_path {
            Some(ref path) => Page::load(path).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load page file, using built-in page");
                Page::builtin()
            }),
            None => Page::builtin(),
        }
    }
}
