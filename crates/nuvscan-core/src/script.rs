//! Script serializer for the external task runner.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, ScanError};
use crate::fs::FileSystem;

pub const DEFAULT_SCRIPT_NAME: &str = "nuvolaris.yml";

const HEADER: &str = "version: 3\n\ntasks:\n  default:\n    cmds:";

/// Render commands as a Taskfile running them in order as its default task.
pub fn render_script(commands: &[String]) -> String {
    let mut script = String::from(HEADER);
    for command in commands {
        script.push_str("\n      - ");
        script.push_str(command);
    }
    script.push('\n');
    script
}

/// Write a rendered script to `dir/file_name`, creating `dir` when missing.
///
/// An existing file at the target is replaced.
pub fn write_script(
    fs: &dyn FileSystem,
    dir: &Path,
    file_name: &str,
    script: &str,
) -> Result<PathBuf> {
    fs.create_dir_all(dir)
        .map_err(|e| ScanError::filesystem(dir, e))?;

    let path = dir.join(file_name);
    fs.write_file(&path, script)
        .map_err(|e| ScanError::filesystem(&path, e))?;

    info!(path = %path.display(), bytes = script.len(), "Wrote task script");
    Ok(path)
}
