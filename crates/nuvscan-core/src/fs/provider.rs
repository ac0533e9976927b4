//! The `FileSystem` trait and its entry types.

use std::io;
use std::path::{Path, PathBuf};

/// Kind of a file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Anything else (symlinks, sockets, ...). Treated like a file by the scanner.
    Other,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// A single entry returned by [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name, lossily converted to UTF-8.
    pub name: String,
    /// Exact path of the entry, built from the OS file name.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Abstraction over the file system operations the scanner needs.
///
/// Implementations must return directory listings in a stable order; the
/// scanner preserves whatever order it is given.
pub trait FileSystem: Send + Sync {
    /// Kind of the entry at `path`. Fails with `NotFound` when absent.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// List the direct children of a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Whether anything exists at `path`. Errors other than `NotFound` are propagated.
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match self.entry_kind(path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }
}
