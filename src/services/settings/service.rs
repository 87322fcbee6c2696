use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::ScreenConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Reads and writes the screen configuration file.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory.
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "StepTracker", "StepTracker") {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration. A missing file yields the defaults.
    pub fn load(&self) -> Result<ScreenConfig> {
        if !self.path.exists() {
            return Ok(ScreenConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config: ScreenConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config in {}: {}", self.path.display(), e))?;

        Ok(config)
    }

    pub fn save(&self, config: &ScreenConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }

    /// Write the defaults if no config file exists yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        log::info!("Writing default config to {}", self.path.display());
        self.save(&ScreenConfig::default())
    }

    /// Load the configuration, falling back to defaults on any error.
    pub fn load_or_default(&self) -> ScreenConfig {
        match self.load() {
            Ok(config) => {
                log::info!(
                    "Loaded config from {}: theme={}, initial_view={}",
                    self.path.display(),
                    config.theme,
                    config.initial_view
                );
                config
            }
            Err(err) => {
                log::error!("Failed to load config, using defaults: {err:?}");
                ScreenConfig::default()
            }
        }
    }
}
