//! Two-level project tree produced by the scanner.
//!
//! The shape is fixed by the types: a [`RootScan`] holds packages and
//! root-level actions, a [`Package`] holds only leaf actions.

use std::path::PathBuf;

use serde::Serialize;

use crate::runtime::Runtime;

/// The scanned top-level folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootScan {
    pub name: String,
    pub path: PathBuf,
    pub packages: Vec<Package>,
    pub actions: Vec<SingleFileAction>,
}

impl RootScan {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            packages: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.actions.is_empty()
    }

    /// Single-file actions at every level.
    pub fn single_file_action_count(&self) -> usize {
        self.actions.len()
            + self
                .packages
                .iter()
                .map(|p| p.single_file_actions.len())
                .sum::<usize>()
    }

    pub fn multi_file_action_count(&self) -> usize {
        self.packages
            .iter()
            .map(|p| p.multi_file_actions.len())
            .sum()
    }
}

/// A directory directly under the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
    pub single_file_actions: Vec<SingleFileAction>,
    pub multi_file_actions: Vec<MultiFileAction>,
}

impl Package {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            single_file_actions: Vec::new(),
            multi_file_actions: Vec::new(),
        }
    }

    /// Number of commands the package's workers emit (excluding registration).
    pub fn expected_task_count(&self) -> usize {
        self.single_file_actions.len() + 2 * self.multi_file_actions.len()
    }
}

/// One source file deployed as an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleFileAction {
    /// File name without its extension.
    pub name: String,
    pub path: PathBuf,
    pub runtime: Runtime,
}

/// A folder inside a package, deployed as a zipped action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiFileAction {
    pub name: String,
    pub path: PathBuf,
    pub runtime: Runtime,
}
