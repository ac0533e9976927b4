//! Tree builder: turns the scan folder into a [`RootScan`].

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, ScanError};
use crate::fs::{DirEntry, FileSystem};
use crate::runtime::{classify_by_extension, classify_folder, split_extension};
use crate::tree::{MultiFileAction, Package, RootScan, SingleFileAction};

/// Walks a scan folder through a [`FileSystem`] provider.
pub struct Scanner<'a> {
    fs: &'a dyn FileSystem,
    scan_folder: PathBuf,
}

impl<'a> Scanner<'a> {
    /// `scan_folder` is resolved by the provider, usually relative to the project root.
    pub fn new(fs: &'a dyn FileSystem, scan_folder: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            scan_folder: scan_folder.into(),
        }
    }

    pub fn scan_folder(&self) -> &Path {
        &self.scan_folder
    }

    /// Whether the scan folder exists. Provider failures other than "not found" are errors.
    pub fn scan_folder_exists(&self) -> Result<bool> {
        self.fs
            .exists(&self.scan_folder)
            .map_err(|e| ScanError::filesystem(&self.scan_folder, e))
    }

    /// Build the two-level tree. The scan folder must exist.
    ///
    /// Any read or classification failure aborts the build.
    pub fn build_tree(&self) -> Result<RootScan> {
        let name = self
            .scan_folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut root = RootScan::new(name, self.scan_folder.clone());

        for entry in self.list(&self.scan_folder)? {
            if entry.is_dir() {
                root.packages.push(self.scan_package(&entry)?);
            } else {
                root.actions.push(single_file_action(&entry)?);
            }
        }

        info!(
            folder = %self.scan_folder.display(),
            packages = root.packages.len(),
            actions = root.actions.len(),
            "Scanned project tree"
        );
        Ok(root)
    }

    fn scan_package(&self, dir: &DirEntry) -> Result<Package> {
        let mut package = Package::new(dir.name.clone(), dir.path.clone());

        for entry in self.list(&dir.path)? {
            if entry.is_dir() {
                let runtime = classify_folder(self.fs, &entry.path)?;
                debug!(
                    package = %package.name,
                    action = %entry.name,
                    %runtime,
                    "Classified multi-file action"
                );
                package.multi_file_actions.push(MultiFileAction {
                    name: entry.name,
                    path: entry.path,
                    runtime,
                });
            } else {
                package
                    .single_file_actions
                    .push(single_file_action(&entry)?);
            }
        }

        Ok(package)
    }

    fn list(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        self.fs
            .read_dir(dir)
            .map_err(|e| ScanError::filesystem(dir, e))
    }
}

fn single_file_action(entry: &DirEntry) -> Result<SingleFileAction> {
    let runtime = classify_by_extension(&entry.path)?;
    let (stem, _) = split_extension(&entry.name);
    debug!(action = %stem, %runtime, "Classified single-file action");

    Ok(SingleFileAction {
        name: stem.to_string(),
        path: entry.path.clone(),
        runtime,
    })
}
