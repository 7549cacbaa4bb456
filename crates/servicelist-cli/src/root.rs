use std::path::{Path, PathBuf};

/// Resolve the directory that relative input, output, and config paths are
/// anchored to.
///
/// Priority:
/// 1. `--root` flag (passed in as `explicit`)
/// 2. The current working directory
/// 3. `.` when the working directory cannot be determined
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
