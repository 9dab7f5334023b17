//! Shared test helpers.

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory for scratch hosts files.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("roster_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}

/// Write `content` to a fresh hosts file and return it with its temp dir.
pub fn temp_hosts(content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).expect("write hosts");
    (dir, path)
}
