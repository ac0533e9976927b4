//! Provider backed by the real file system.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::provider::{DirEntry, EntryKind, FileSystem};

/// File system view rooted at a directory.
///
/// Relative paths resolve against the root; absolute paths are used as-is,
/// which lets the same provider write scripts outside the scanned project.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    root: PathBuf,
}

impl OsFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSystem for OsFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = fs::metadata(self.resolve(path))?;
        Ok(kind_of(meta.file_type()))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let os_name = entry.file_name();
            let name = os_name.to_string_lossy().into_owned();
            // Follow symlinks so a linked folder counts as a folder.
            let kind = match fs::metadata(entry.path()) {
                Ok(meta) => kind_of(meta.file_type()),
                Err(_) => EntryKind::Other,
            };
            entries.push(DirEntry {
                // Keep the real OS name so non-UTF-8 paths still resolve.
                path: path.join(&os_name),
                name,
                kind,
            });
        }

        // The OS gives no ordering guarantee; sort for deterministic output.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(self.resolve(path), contents)
    }
}

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
