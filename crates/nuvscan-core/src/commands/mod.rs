//! High-level commands for nuvscan operations.
//!
//! These are the entry points frontends call; they wire the scanner, the
//! task generator and the script serializer together.

pub mod scan;

pub use scan::{ScanCommand, ScanOptions, ScanReport};
