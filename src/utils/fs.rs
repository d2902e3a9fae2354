//! File system utilities.

use crate::Result;
use std::path::Path;

/// Create a directory and all parent directories.
pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write a file atomically: write a sibling temp file, then rename over the target.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, content)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

/// Copy an existing file to `<name>.backup` next to it. No-op if absent.
pub fn backup_file(path: &Path) -> Result<()> {
    if path.exists() {
        let mut backup = path.as_os_str().to_owned();
        backup.push(".backup");
        std::fs::copy(path, &backup)?;
    }
    Ok(())
}

/// Check that a directory can be created and written to.
pub fn ensure_writable(dir: &Path) -> Result<()> {
    create_dir_all(dir)?;
    let probe = dir.join(".popcorn-write-test");
    std::fs::write(&probe, b"ok")?;
    std::fs::remove_file(&probe)?;
    Ok(())
}
