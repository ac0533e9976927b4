//! Error types for the scan pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a project scan.
///
/// Every variant is fatal to the current scan: no partial tree is returned and
/// no script is written.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("folder '{folder}' not found in {}! Cannot scan project", project_dir.display())]
    MissingScanFolder { folder: String, project_dir: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Filesystem { path: PathBuf, source: io::Error },

    #[error("no supported runtime found for file {}", path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("no supported runtime found in folder {}", path.display())]
    NoRuntimeFound { path: PathBuf },

    #[error("Path is not valid UTF-8: {}", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Task worker for package '{package}' panicked")]
    WorkerPanicked { package: String },
}

impl ScanError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
