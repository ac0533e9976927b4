//! File system providers used by the scanner.
//!
//! Relative paths handed to a provider are interpreted against the provider's
//! root, so the scanner only ever sees project-relative paths.

pub mod memory;
pub mod os;
pub mod provider;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;
pub use provider::{DirEntry, EntryKind, FileSystem};
