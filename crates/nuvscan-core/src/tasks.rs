//! Task generator: turns a [`RootScan`] into ordered deployment commands.
//!
//! Root-level actions come first, then one block per package. Inside a
//! package two workers run on scoped threads, one for single-file actions and
//! one for multi-file actions, pushing into a bounded queue sized to the
//! exact number of commands they produce. Once both have been joined the
//! queue is drained and merged: single-file commands first, then multi-file
//! commands, each in listing order.

use std::path::{Component, Path};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::tree::{MultiFileAction, Package, RootScan, SingleFileAction};

pub const DEFAULT_TOOL: &str = "nuv wsk";
pub const DEFAULT_PACK_TOOL: &str = "nuv pack";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    SingleFile,
    MultiFile,
}

type Queued = (Origin, Result<String>);

/// Renders deployment commands from a scanned tree.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    tool: String,
    pack_tool: String,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL, DEFAULT_PACK_TOOL)
    }
}

impl TaskGenerator {
    /// `tool` prefixes action/package commands, `pack_tool` prefixes zip packaging.
    pub fn new(tool: impl Into<String>, pack_tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            pack_tool: pack_tool.into(),
        }
    }

    pub fn generate(&self, root: &RootScan) -> Result<Vec<String>> {
        let mut tasks = Vec::with_capacity(root.actions.len());

        for action in &root.actions {
            tasks.push(self.single_file_command("", action)?);
        }

        for package in &root.packages {
            tasks.push(self.package_update(&package.name));
            tasks.extend(self.package_tasks(package)?);
        }

        Ok(tasks)
    }

    /// Commands for one package's actions, without the registration command.
    pub fn package_tasks(&self, package: &Package) -> Result<Vec<String>> {
        let (tx, rx) = mpsc::sync_channel::<Queued>(package.expected_task_count());

        thread::scope(|scope| {
            let single_tx = tx.clone();
            let single =
                scope.spawn(move || self.single_file_worker(package, single_tx));
            let multi_tx = tx;
            let multi = scope.spawn(move || self.multi_file_worker(package, multi_tx));

            let single_ok = single.join().is_ok();
            let multi_ok = multi.join().is_ok();
            if single_ok && multi_ok {
                Ok(())
            } else {
                Err(ScanError::WorkerPanicked {
                    package: package.name.clone(),
                })
            }
        })?;

        let tasks = merge(rx)?;
        debug!(package = %package.name, tasks = tasks.len(), "Generated package tasks");
        Ok(tasks)
    }

    fn single_file_worker(&self, package: &Package, tx: SyncSender<Queued>) {
        let prefix = format!("{}/", package.name);
        for action in &package.single_file_actions {
            let command = self.single_file_command(&prefix, action);
            let failed = command.is_err();
            if tx.send((Origin::SingleFile, command)).is_err() || failed {
                return;
            }
        }
    }

    fn multi_file_worker(&self, package: &Package, tx: SyncSender<Queued>) {
        let prefix = format!("{}/", package.name);
        for action in &package.multi_file_actions {
            let (commands, failed) = match self.multi_file_commands(&prefix, action) {
                Ok([pack, update]) => (vec![Ok(pack), Ok(update)], false),
                Err(err) => (vec![Err(err)], true),
            };
            for command in commands {
                if tx.send((Origin::MultiFile, command)).is_err() {
                    return;
                }
            }
            if failed {
                return;
            }
        }
    }

    fn single_file_command(&self, prefix: &str, action: &SingleFileAction) -> Result<String> {
        let path = slash_path(&action.path)?;
        Ok(self.action_update(prefix, &action.name, &path, action.runtime.kind()))
    }

    fn multi_file_commands(&self, prefix: &str, action: &MultiFileAction) -> Result<[String; 2]> {
        let path = slash_path(&action.path)?;
        let zip = format!("{}/{}.zip", path, action.name);
        let pack = format!("{} -r {} {}/*", self.pack_tool, zip, path);
        let update = self.action_update(prefix, &action.name, &zip, action.runtime.kind());
        Ok([pack, update])
    }

    fn action_update(&self, prefix: &str, name: &str, path: &str, kind: &str) -> String {
        format!(
            "{} action update {}{} {} --kind {}:default",
            self.tool, prefix, name, path, kind
        )
    }

    fn package_update(&self, name: &str) -> String {
        format!("{} package update {}", self.tool, name)
    }
}

/// Drain a closed queue. Single-file results precede multi-file results; the
/// first error in that order wins.
fn merge(rx: Receiver<Queued>) -> Result<Vec<String>> {
    let mut single = Vec::new();
    let mut multi = Vec::new();
    for (origin, item) in rx {
        match origin {
            Origin::SingleFile => single.push(item),
            Origin::MultiFile => multi.push(item),
        }
    }
    single.into_iter().chain(multi).collect()
}

/// Render a path with `/` separators, as the task runner expects.
fn slash_path(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    if path.has_root() {
        parts.push("");
    }
    for component in path.components() {
        if matches!(component, Component::RootDir | Component::Prefix(_)) {
            continue;
        }
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| ScanError::InvalidPath {
                path: path.to_path_buf(),
            })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}
