//! In-memory provider for tests and embedding.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use super::provider::{DirEntry, EntryKind, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    File(String),
    Dir,
}

/// A file system held entirely in memory.
///
/// Leading `/` and `.` components are ignored, so `/packages/a.js`,
/// `./packages/a.js` and `packages/a.js` name the same entry. Listings come
/// back sorted by name.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    nodes: RwLock<BTreeMap<PathBuf, Node>>,
    failing: RwLock<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating missing parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = normalize(path.as_ref());
        let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = path.parent() {
            insert_dirs(&mut nodes, parent);
        }
        nodes.insert(path, Node::File(content.to_string()));
    }

    /// Add a directory and all missing parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());
        insert_dirs(&mut nodes, &path);
    }

    /// Make every subsequent listing of `path` fail with a permission error.
    pub fn fail_reads_at(&self, path: impl AsRef<Path>) {
        self.failing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(normalize(path.as_ref()));
    }

    /// Contents of a file, if present.
    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Option<String> {
        let nodes = self.nodes.read().unwrap_or_else(|e| e.into_inner());
        match nodes.get(&normalize(path.as_ref())) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let path = normalize(path);
        if path.as_os_str().is_empty() {
            return Ok(EntryKind::Directory);
        }
        let nodes = self.nodes.read().unwrap_or_else(|e| e.into_inner());
        match nodes.get(&path) {
            Some(Node::File(_)) => Ok(EntryKind::File),
            Some(Node::Dir) => Ok(EntryKind::Directory),
            None => Err(not_found(&path)),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let dir = normalize(path);
        if self
            .failing
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&dir)
        {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read denied: {}", dir.display()),
            ));
        }
        if !self.entry_kind(&dir)?.is_dir() {
            return Err(io::Error::other(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        let nodes = self.nodes.read().unwrap_or_else(|e| e.into_inner());
        let entries = nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(dir.as_path()))
            .map(|(p, node)| DirEntry {
                name: p
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: p.clone(),
                kind: match node {
                    Node::File(_) => EntryKind::File,
                    Node::Dir => EntryKind::Directory,
                },
            })
            .collect();
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        let path = normalize(path);
        let parent_missing = {
            let nodes = self.nodes.read().unwrap_or_else(|e| e.into_inner());
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    !matches!(nodes.get(parent), Some(Node::Dir))
                }
                _ => false,
            }
        };
        if parent_missing {
            return Err(not_found(path.parent().unwrap_or(Path::new(""))));
        }
        self.add_file(&path, contents);
        Ok(())
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

fn insert_dirs(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        nodes.entry(current.clone()).or_insert(Node::Dir);
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}
