//! Scan command implementation.
//!
//! Checks the scan folder, builds the project tree, generates the deployment
//! commands and writes them as a task script. Nothing is written unless every
//! step succeeds.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::fs::{FileSystem, OsFileSystem};
use crate::scanner::Scanner;
use crate::script::{render_script, write_script};
use crate::tasks::TaskGenerator;
use crate::tree::RootScan;

/// Options for the scan command
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory containing the scan folder
    pub project_dir: PathBuf,
    /// Directory the script is written to
    pub output_dir: PathBuf,
    /// Render the script without writing it
    pub dry_run: bool,
}

impl ScanOptions {
    pub fn new(project_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            output_dir: output_dir.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Report from a scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub project_dir: PathBuf,
    /// Where the script was written; `None` on a dry run
    pub script_path: Option<PathBuf>,
    pub packages: usize,
    pub single_file_actions: usize,
    pub multi_file_actions: usize,
    pub commands: Vec<String>,
    pub tree: RootScan,
    #[serde(skip)]
    pub script: String,
}

/// Scans a project and emits its task script.
#[derive(Debug, Clone)]
pub struct ScanCommand {
    config: ScanConfig,
}

impl ScanCommand {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `options.project_dir` on the real file system.
    pub fn run(&self, options: &ScanOptions) -> Result<ScanReport> {
        let fs = OsFileSystem::new(&options.project_dir);
        self.execute(&fs, options)
    }

    /// Scan through `fs`, whose root is the project directory.
    pub fn execute(&self, fs: &dyn FileSystem, options: &ScanOptions) -> Result<ScanReport> {
        info!(
            project = %options.project_dir.display(),
            folder = %self.config.scan_folder,
            "Starting scan"
        );

        let scanner = Scanner::new(fs, &self.config.scan_folder);
        if !scanner.scan_folder_exists()? {
            return Err(ScanError::MissingScanFolder {
                folder: self.config.scan_folder.clone(),
                project_dir: options.project_dir.clone(),
            });
        }

        let tree = scanner.build_tree()?;
        let generator = TaskGenerator::new(&self.config.tool, &self.config.pack_tool);
        let commands = generator.generate(&tree)?;
        let script = render_script(&commands);

        let script_path = if options.dry_run {
            None
        } else {
            Some(self.write(fs, &options.output_dir, &script)?)
        };

        info!(commands = commands.len(), "Scan complete");

        Ok(ScanReport {
            project_dir: options.project_dir.clone(),
            script_path,
            packages: tree.packages.len(),
            single_file_actions: tree.single_file_action_count(),
            multi_file_actions: tree.multi_file_action_count(),
            commands,
            tree,
            script,
        })
    }

    fn write(&self, fs: &dyn FileSystem, dir: &Path, script: &str) -> Result<PathBuf> {
        write_script(fs, dir, &self.config.script_name, script)
    }
}
