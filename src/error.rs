//! Error types for the hosts store.

use thiserror::Error;

/// Failures surfaced by hosts store operations.
#[derive(Error, Debug)]
pub enum HostsError {
    /// Hosts file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Argument did not parse as an IP address.
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Add called with no hostnames.
    #[error("no hostnames given")]
    NoHostnames,
}

/// Why a line that looks like a host entry failed to parse.
///
/// Recorded on the line itself; never aborts a load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    #[error("entry has no hostnames")]
    NoHostnames,
}
