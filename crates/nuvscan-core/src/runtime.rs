//! Runtime classification for actions.
//!
//! A single-file action is classified by its extension. A multi-file action
//! (a folder) is classified by probing its direct contents for a marker file
//! or a source file, trying runtimes in a fixed priority order:
//!
//! | Runtime | Marker             | Source glob |
//! |---------|--------------------|-------------|
//! | nodejs  | `package.json`     | `*.js`      |
//! | python  | `requirements.txt` | `*.py`      |
//! | java    | `pom.xml`          | `*.java`    |
//! | go      | `go.mod`           | `*.go`      |

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::fs::FileSystem;

/// Execution runtime an action is deployed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    #[serde(rename = "nodejs")]
    NodeJs,
    Python,
    Java,
    Go,
}

impl Runtime {
    /// Folder probing order; the first match wins.
    pub const PROBE_ORDER: [Runtime; 4] =
        [Runtime::NodeJs, Runtime::Python, Runtime::Java, Runtime::Go];

    /// Identifier used in `--kind <kind>:default`.
    pub fn kind(self) -> &'static str {
        match self {
            Runtime::NodeJs => "nodejs",
            Runtime::Python => "python",
            Runtime::Java => "java",
            Runtime::Go => "go",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Runtime::NodeJs => ".js",
            Runtime::Python => ".py",
            Runtime::Java => ".java",
            Runtime::Go => ".go",
        }
    }

    /// Manifest file that marks a folder as belonging to this runtime.
    pub fn marker(self) -> &'static str {
        match self {
            Runtime::NodeJs => "package.json",
            Runtime::Python => "requirements.txt",
            Runtime::Java => "pom.xml",
            Runtime::Go => "go.mod",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Runtime> {
        Self::PROBE_ORDER
            .into_iter()
            .find(|runtime| runtime.extension() == ext)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::PROBE_ORDER
            .into_iter()
            .find(|runtime| runtime.kind() == s)
            .ok_or_else(|| format!("Unknown runtime: {s}"))
    }
}

/// Split a file name into `(stem, extension)` at its last dot.
///
/// The extension keeps the dot; a name without a dot has an empty extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => file_name.split_at(idx),
        None => (file_name, ""),
    }
}

/// Classify a single file by its extension.
pub fn classify_by_extension(path: &Path) -> Result<Runtime> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let (_, ext) = split_extension(&file_name);

    Runtime::from_extension(ext).ok_or_else(|| ScanError::UnsupportedFile {
        path: path.to_path_buf(),
    })
}

/// Classify a folder by probing its direct contents.
///
/// Only the folder's top level is inspected; nested folders are never entered.
pub fn classify_folder(fs: &dyn FileSystem, folder: &Path) -> Result<Runtime> {
    let entries = fs
        .read_dir(folder)
        .map_err(|e| ScanError::filesystem(folder, e))?;

    for runtime in Runtime::PROBE_ORDER {
        let marker = folder.join(runtime.marker());
        if fs
            .exists(&marker)
            .map_err(|e| ScanError::filesystem(&marker, e))?
        {
            return Ok(runtime);
        }

        if entries
            .iter()
            .any(|entry| entry.name.ends_with(runtime.extension()))
        {
            return Ok(runtime);
        }
    }

    Err(ScanError::NoRuntimeFound {
        path: folder.to_path_buf(),
    })
}
