//! Hosts store: in-memory model of the hosts file.
//!
//! Loaded once per invocation, mutated in memory, written back only by an
//! explicit [`HostsFile::flush`].

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::error::HostsError;
use crate::line::{Line, LineKind};
use crate::platform;

/// The whole hosts file as an ordered sequence of lines.
#[derive(Debug)]
pub struct HostsFile {
    path: PathBuf,
    pub lines: Vec<Line>,
}

impl HostsFile {
    /// Load the system hosts file (see [`platform::hosts_path`]).
    pub fn load_default() -> Result<HostsFile, HostsError> {
        Self::load(platform::hosts_path())
    }

    /// Load a hosts file from `path`.
    ///
    /// Lines that fail to parse are kept verbatim and flagged per-line;
    /// only an unreadable file fails the load.
    pub fn load(path: impl Into<PathBuf>) -> Result<HostsFile, HostsError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        let lines = content.lines().map(Line::parse).collect();
        Ok(HostsFile { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the hosts file can be written by this process.
    ///
    /// Callers use this to fail early with a clear message instead of a
    /// low-level I/O error out of [`HostsFile::flush`].
    pub fn is_writable(&self) -> bool {
        platform::is_writable(&self.path)
    }

    /// True iff some entry line has exactly this IP and lists `hostname`.
    ///
    /// The IP is compared by parsed value, so any textual form of the same
    /// address matches. Hostnames compare case-sensitively. An `ip` that
    /// does not parse matches nothing.
    pub fn has(&self, ip: &str, hostname: &str) -> bool {
        let Ok(ip) = ip.parse::<IpAddr>() else {
            return false;
        };
        self.lines
            .iter()
            .any(|l| l.ip == Some(ip) && l.hostnames.iter().any(|h| h == hostname))
    }

    /// True iff any entry line has this IP, regardless of hostnames.
    pub fn has_ip(&self, ip: &str) -> bool {
        let Ok(ip) = ip.parse::<IpAddr>() else {
            return false;
        };
        self.lines.iter().any(|l| l.ip == Some(ip))
    }

    /// Add hostnames under `ip`.
    ///
    /// Merges into the existing entry for the same address (skipping
    /// hostnames already present, existing before new) rather than creating
    /// a duplicate line; otherwise appends a new entry. In-memory only.
    pub fn add<S: AsRef<str>>(&mut self, ip: &str, hostnames: &[S]) -> Result<(), HostsError> {
        let ip: IpAddr = ip
            .parse()
            .map_err(|_| HostsError::InvalidIp(ip.to_string()))?;
        if hostnames.is_empty() {
            return Err(HostsError::NoHostnames);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.ip == Some(ip)) {
            let before = line.hostnames.len();
            for h in hostnames {
                let h = h.as_ref();
                if !line.hostnames.iter().any(|have| have == h) {
                    line.hostnames.push(h.to_string());
                }
            }
            if line.hostnames.len() != before {
                line.rerender();
            }
        } else {
            let mut names: Vec<String> = Vec::new();
            for h in hostnames {
                let h = h.as_ref();
                if !names.iter().any(|have| have == h) {
                    names.push(h.to_string());
                }
            }
            self.lines.push(Line::entry(ip, names));
        }
        Ok(())
    }

    /// Remove the given hostnames from entries matching `ip`.
    ///
    /// An entry left with zero hostnames is deleted outright. An absent IP
    /// is a no-op, so removal is idempotent.
    pub fn remove<S: AsRef<str>>(&mut self, ip: &str, hostnames: &[S]) -> Result<(), HostsError> {
        let ip: IpAddr = ip
            .parse()
            .map_err(|_| HostsError::InvalidIp(ip.to_string()))?;
        let mut i = 0;
        while i < self.lines.len() {
            if self.lines[i].ip == Some(ip) {
                let line = &mut self.lines[i];
                let before = line.hostnames.len();
                line.hostnames
                    .retain(|have| !hostnames.iter().any(|h| h.as_ref() == have));
                if line.hostnames.is_empty() {
                    self.lines.remove(i);
                    continue;
                }
                if line.hostnames.len() != before {
                    line.rerender();
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// Strip `hostname` from every entry that lists it, across the whole
    /// file; entries left empty are deleted. Idempotent.
    pub fn remove_by_hostname(&mut self, hostname: &str) {
        let mut i = 0;
        while i < self.lines.len() {
            let line = &mut self.lines[i];
            if line.kind == LineKind::Entry && line.hostnames.iter().any(|h| h == hostname) {
                line.hostnames.retain(|h| h != hostname);
                if line.hostnames.is_empty() {
                    self.lines.remove(i);
                    continue;
                }
                line.rerender();
            }
            i += 1;
        }
    }

    /// Delete every entry line whose address matches `ip`. Idempotent.
    pub fn remove_by_ip(&mut self, ip: &str) -> Result<(), HostsError> {
        let ip: IpAddr = ip
            .parse()
            .map_err(|_| HostsError::InvalidIp(ip.to_string()))?;
        self.lines.retain(|l| l.ip != Some(ip));
        Ok(())
    }

    /// Serialize the line sequence back to the hosts file, replacing its
    /// previous contents. Unmutated lines emit their original text.
    ///
    /// The only operation that writes to storage.
    pub fn flush(&self) -> Result<(), HostsError> {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.raw.len() + 1).sum());
        for line in &self.lines {
            out.push_str(&line.raw);
            out.push('\n');
        }
        std::fs::write(&self.path, out)?;
        Ok(())
    }
}
