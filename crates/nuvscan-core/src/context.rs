//! Application context for unified dependency injection.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::{ConfigStore, ScanConfig, default_config_path, output_dir_in};

/// Paths shared by every command.
///
/// Frontends create this once; tests build it with explicit paths. The home
/// directory is optional and only required when no output directory is set.
#[derive(Debug, Clone)]
pub struct AppContext {
    home_dir: Option<PathBuf>,
    config_path: PathBuf,
}

impl AppContext {
    /// Create a new context with explicit paths.
    pub fn new(home_dir: Option<PathBuf>, config_path: PathBuf) -> Self {
        Self {
            home_dir,
            config_path,
        }
    }

    /// Create a context from the platform directories.
    ///
    /// `config_path` overrides the default config location.
    pub fn with_defaults(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        Ok(Self::new(dirs::home_dir(), config_path))
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::from_path(self.config_path.clone())
    }

    /// Script directory: the configured one, else `~/.nuvolaris`.
    pub fn output_dir(&self, config: &ScanConfig) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &config.output_dir {
            return Ok(dir.clone());
        }
        let home = self.home_dir().context(
            "Could not determine home directory; set output_dir in nuvscan.toml or pass --output",
        )?;
        Ok(output_dir_in(home))
    }
}
