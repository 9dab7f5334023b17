//! Unix (macOS, Linux) platform implementation.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub fn hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}

/// access(2) with W_OK; a pure permission probe, the file is never opened.
pub fn is_writable(path: &Path) -> bool {
    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(cpath.as_ptr(), libc::W_OK) == 0 }
}
