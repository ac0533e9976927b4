//! Config store for loading and saving nuvscan.toml.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{ScanConfig, parser};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    pub fn from_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Load the config; a missing file yields defaults.
    pub fn load(&self) -> anyhow::Result<ScanConfig> {
        if !self.config_path.exists() {
            return Ok(ScanConfig::new());
        }
        parser::parse_nuvscan_toml(&self.config_path)
    }

    pub fn save(&self, config: &ScanConfig) -> anyhow::Result<()> {
        config.validate()?;
        let content = parser::to_toml(config).context("Failed to serialize config to TOML")?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(&self.config_path, content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;
        Ok(())
    }
}
