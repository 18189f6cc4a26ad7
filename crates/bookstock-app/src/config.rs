//! Configuration management for bookstock
//!
//! Config stored at: ~/.config/bookstock/config.json

use std::path::{Path, PathBuf};

use bookstock_infra::persistence::DEFAULT_STORE_FILE;
use bookstock_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Store file override (defaults to the per-user data dir)
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Seed catalog override (defaults to ./catalog.csv)
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub const DEFAULT_SEED_FILE: &str = "catalog.csv";

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            seed_path: None,
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bookstock");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolved store file path
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.store_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bookstock");
        Ok(data_dir.join(DEFAULT_STORE_FILE))
    }

    /// Resolved seed catalog path
    pub fn seed_path(&self) -> PathBuf {
        self.seed_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bookstock Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store file:     {}",
            self.store_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Seed catalog:   {}", self.seed_path().display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Log level:      {}", self.log_level)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
