use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "servicelist.yaml";
pub const DEFAULT_INPUT: &str = "example.json";
pub const DEFAULT_OUTPUT: &str = "example.txt";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a user-supplied path against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
