//! Configuration schema for nuvscan.toml
//!
//! ```toml
//! scan_folder = "packages"
//! tool = "nuv wsk"
//! pack_tool = "nuv pack"
//! script_name = "nuvolaris.yml"
//! output_dir = "/home/me/.nuvolaris"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::script::DEFAULT_SCRIPT_NAME;
use crate::tasks::{DEFAULT_PACK_TOOL, DEFAULT_TOOL};

pub const DEFAULT_SCAN_FOLDER: &str = "packages";

/// Root configuration structure for nuvscan.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Folder under the project directory that holds the packages
    #[serde(default = "default_scan_folder")]
    pub scan_folder: String,

    /// Command prefix for action and package updates
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Command prefix for zipping multi-file actions
    #[serde(default = "default_pack_tool")]
    pub pack_tool: String,

    /// File name of the generated script
    #[serde(default = "default_script_name")]
    pub script_name: String,

    /// Where the script is written; `~/.nuvolaris` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_scan_folder() -> String {
    DEFAULT_SCAN_FOLDER.to_string()
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_pack_tool() -> String {
    DEFAULT_PACK_TOOL.to_string()
}

fn default_script_name() -> String {
    DEFAULT_SCRIPT_NAME.to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_folder: default_scan_folder(),
            tool: default_tool(),
            pack_tool: default_pack_tool(),
            script_name: default_script_name(),
            output_dir: None,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (field, value) in [
            ("scan_folder", &self.scan_folder),
            ("tool", &self.tool),
            ("pack_tool", &self.pack_tool),
            ("script_name", &self.script_name),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("'{}' must not be empty", field);
            }
        }

        for (field, value) in [
            ("scan_folder", &self.scan_folder),
            ("script_name", &self.script_name),
        ] {
            if value.contains(['/', '\\']) || value == "." || value == ".." {
                anyhow::bail!("'{}' must be a plain name, got '{}'", field, value);
            }
        }

        Ok(())
    }
}
