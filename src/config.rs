use colored::*;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the platform data and config dirs
pub const APP_DIR: &str = "tpkit";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub tasks_file: PathBuf,
    pub history_file: PathBuf,
}

impl StorageConfig {
    /// Directory holding the default store files
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let dir = Self::default_dir();
        Self {
            tasks_file: dir.join("tasks.json"),
            history_file: dir.join("history.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for history timestamps
    pub date_format: String,
    /// Width of the rule printed around task listings
    pub list_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            list_width: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            storage: StorageConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Report a config file that was found but skipped
///
/// Goes to stderr: `Config::load` runs before the log file is set up.
fn warn_skipped(path: &Path, err: &eyre::Report) {
    eprintln!("{} Failed to load config from {}: {:#}", "warning:".yellow(), path.display(), err);
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/tpkit/tpkit.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(APP_DIR).join(format!("{}.yml", APP_DIR));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn_skipped(&primary_config, &e),
                }
            }
        }

        // Try fallback location: ./tpkit.yml
        let fallback_config = PathBuf::from(format!("{}.yml", APP_DIR));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => warn_skipped(&fallback_config, &e),
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Point the task store at an explicit file
    pub fn with_tasks_file(mut self, path: Option<&PathBuf>) -> Self {
        if let Some(path) = path {
            self.storage.tasks_file = path.clone();
        }
        self
    }

    /// Point the calculator history at an explicit file
    pub fn with_history_file(mut self, path: Option<&PathBuf>) -> Self {
        if let Some(path) = path {
            self.storage.history_file = path.clone();
        }
        self
    }

    /// Create the default data directory when a store file lives in it.
    ///
    /// Explicitly configured paths are left alone so a missing parent
    /// surfaces as a write error.
    pub fn ensure_default_dir(&self, store_file: &Path) -> Result<()> {
        let default_dir = StorageConfig::default_dir();
        if store_file.parent() == Some(default_dir.as_path()) {
            fs::create_dir_all(&default_dir)
                .context(format!("Failed to create data directory {}", default_dir.display()))?;
        }
        Ok(())
    }
}
