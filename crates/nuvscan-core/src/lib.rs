//! nuvscan Core Library
//!
//! Scans a project's `packages` folder, classifies every action by runtime
//! and turns the result into an ordered list of deployment commands, written
//! out as a task script for an external task runner.

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fs;
pub mod runtime;
pub mod scanner;
pub mod script;
pub mod tasks;
pub mod tree;

pub use error::{Result, ScanError};

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::commands::{ScanCommand, ScanOptions, ScanReport};
    pub use crate::config::{ConfigStore, ScanConfig};
    pub use crate::context::AppContext;
    pub use crate::error::ScanError;
    pub use crate::fs::{FileSystem, MemoryFileSystem, OsFileSystem};
    pub use crate::runtime::{Runtime, classify_by_extension, classify_folder};
    pub use crate::scanner::Scanner;
    pub use crate::script::{render_script, write_script};
    pub use crate::tasks::TaskGenerator;
    pub use crate::tree::{MultiFileAction, Package, RootScan, SingleFileAction};
}
