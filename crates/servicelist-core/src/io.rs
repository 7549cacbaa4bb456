use crate::error::{Result, ServiceListError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// The tempfile is removed on every failure path, so `path` is either fully
/// replaced or left as it was.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write rendered checklist text to `path`, overwriting any existing content.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    atomic_write(path, text.as_bytes()).map_err(|source| ServiceListError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "checklist written");
    Ok(())
}
