//! Windows platform implementation.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub fn hosts_path() -> PathBuf {
    let root = std::env::var("SystemRoot").unwrap_or_else(|_| r"C:\Windows".to_string());
    PathBuf::from(root).join(r"System32\drivers\etc\hosts")
}

/// ACLs decide writability here; opening for append probes them without
/// changing the file.
pub fn is_writable(path: &Path) -> bool {
    OpenOptions::new().append(true).open(path).is_ok()
}
