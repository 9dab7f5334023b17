//! Platform abstraction: hosts file location and writability.

use std::path::{Path, PathBuf};

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

/// Path to the system hosts file.
/// If ROSTER_HOSTS_FILE is set (e.g. in tests), that path is used instead.
pub fn hosts_path() -> PathBuf {
    if let Ok(path) = std::env::var("ROSTER_HOSTS_FILE") {
        return PathBuf::from(path);
    }
    #[cfg(unix)]
    return unix::hosts_path();

    #[cfg(windows)]
    return windows::hosts_path();
}

/// Check write permission on `path` without mutating it.
pub fn is_writable(path: &Path) -> bool {
    #[cfg(unix)]
    return unix::is_writable(path);

    #[cfg(windows)]
    return windows::is_writable(path);
}
