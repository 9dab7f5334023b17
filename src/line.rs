//! Line model: one physical hosts-file line.

use std::net::IpAddr;

use crate::error::ParseError;

/// Classification of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Blank,
    Entry,
    Malformed,
}

/// One physical line of the hosts file.
///
/// `raw` reproduces the original text byte-for-byte until the line is
/// mutated; mutated and newly created lines carry the canonical rendering
/// (IP, then hostnames, single-space separated) instead.
#[derive(Debug, Clone)]
pub struct Line {
    pub raw: String,
    pub kind: LineKind,
    /// Parsed address; present only for `Entry` lines.
    pub ip: Option<IpAddr>,
    /// Ordered hostnames, unique within the line; present only for `Entry`.
    pub hostnames: Vec<String>,
    /// Present only for `Malformed` lines.
    pub error: Option<ParseError>,
}

impl Line {
    /// Parse one physical line.
    ///
    /// A line that looks like a host entry but has a bad IP or no hostnames
    /// is kept verbatim as `Malformed` rather than dropped, so a damaged
    /// file can still be listed and edited without data loss.
    pub fn parse(raw: &str) -> Line {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Line::of_kind(raw, LineKind::Blank);
        }
        if trimmed.starts_with('#') {
            return Line::of_kind(raw, LineKind::Comment);
        }

        // Everything after '#' is an inline comment: ignored by parsing,
        // preserved in `raw`.
        let content = trimmed.split('#').next().unwrap_or(trimmed);
        let mut tokens = content.split_whitespace();
        let ip_token = match tokens.next() {
            Some(t) => t,
            None => return Line::malformed(raw, ParseError::NoHostnames),
        };
        let ip: IpAddr = match ip_token.parse() {
            Ok(ip) => ip,
            Err(_) => return Line::malformed(raw, ParseError::InvalidIp(ip_token.to_string())),
        };

        let mut hostnames: Vec<String> = Vec::new();
        for token in tokens {
            if !hostnames.iter().any(|h| h == token) {
                hostnames.push(token.to_string());
            }
        }
        if hostnames.is_empty() {
            return Line::malformed(raw, ParseError::NoHostnames);
        }

        Line {
            raw: raw.to_string(),
            kind: LineKind::Entry,
            ip: Some(ip),
            hostnames,
            error: None,
        }
    }

    /// Build a new entry line in canonical form.
    pub fn entry(ip: IpAddr, hostnames: Vec<String>) -> Line {
        let mut line = Line {
            raw: String::new(),
            kind: LineKind::Entry,
            ip: Some(ip),
            hostnames,
            error: None,
        };
        line.rerender();
        line
    }

    /// Regenerate `raw` from `ip` and `hostnames` after a mutation.
    ///
    /// Any inline comment the original text carried is dropped: the line
    /// no longer matches it.
    pub fn rerender(&mut self) {
        if let Some(ip) = self.ip {
            self.raw = format!("{} {}", ip, self.hostnames.join(" "));
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == LineKind::Comment
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == LineKind::Malformed
    }

    fn of_kind(raw: &str, kind: LineKind) -> Line {
        Line {
            raw: raw.to_string(),
            kind,
            ip: None,
            hostnames: Vec::new(),
            error: None,
        }
    }

    fn malformed(raw: &str, error: ParseError) -> Line {
        Line {
            raw: raw.to_string(),
            kind: LineKind::Malformed,
            ip: None,
            hostnames: Vec::new(),
            error: Some(error),
        }
    }
}
