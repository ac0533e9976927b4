//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "nuvscan.toml";

/// Directory under the user's home where scripts are written by default.
pub const OUTPUT_DIR_NAME: &str = ".nuvolaris";

pub fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join("nuvscan").join(CONFIG_FILE_NAME)
}

/// `<platform config dir>/nuvscan/nuvscan.toml`
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(config_path_in(&config_dir))
}

pub fn output_dir_in(home_dir: &Path) -> PathBuf {
    home_dir.join(OUTPUT_DIR_NAME)
}
