//! # Pattern
//!
//! A dotted IPv4 template language for matching addresses and capturing
//! octets. A template has exactly four segments, each one of:
//!
//! - a decimal literal `0..=255`, matching that octet exactly,
//! - `_`, matching any octet and capturing nothing,
//! - a variable name such as `x` or `_tail`, capturing the octet (a name
//!   repeated across segments must capture the same value everywhere),
//! - `^name`, matching only the value bound to `name` in a caller-supplied
//!   binding set.
//!
//! Templates are validated once at parse time; matching a candidate
//! address never fails, it only declines.
//!
//! ```
//! use netspan_core::pattern::Ipv4Pattern;
//! use std::net::Ipv4Addr;
//!
//! let pattern: Ipv4Pattern = "192.168.x.32".parse()?;
//! let bound = pattern.captures(Ipv4Addr::new(192, 168, 10, 32));
//! assert_eq!(bound.and_then(|b| b.get("x").copied()), Some(10));
//! # Ok::<(), netspan_core::AddrError>(())
//! ```

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::debug;

use crate::error::{AddrError, Result};

/// Captured octets by variable name.
pub type Bindings = HashMap<String, u8>;

/// One compiled template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// A fixed octet value.
    Literal(u8),
    /// Matches anything, captures nothing.
    Wildcard,
    /// Captures the octet under this name.
    Bind(String),
    /// Matches the octet already bound under this name.
    Pin(String),
}

/// A compiled four-segment IPv4 template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Pattern {
    segments: [Segment; 4],
}

impl Ipv4Pattern {
    /// Matches `addr` with no prior bindings.
    ///
    /// `None` when any segment declines; otherwise the captures of every
    /// variable segment. A template of only literals and wildcards yields
    /// an empty binding set on success.
    pub fn captures(&self, addr: Ipv4Addr) -> Option<Bindings> {
        self.captures_pinned(addr, &Bindings::new())
    }

    /// Matches `addr` against the template with `pinned` values in scope.
    ///
    /// `^name` segments compare against `pinned` only; a name missing
    /// from `pinned` declines the whole match. A bare `name` segment
    /// always captures fresh, even when `pinned` holds the same name.
    pub fn captures_pinned(&self, addr: Ipv4Addr, pinned: &Bindings) -> Option<Bindings> {
        let mut bound = Bindings::new();
        for (segment, octet) in self.segments.iter().zip(addr.octets()) {
            match segment {
                Segment::Literal(value) => {
                    if *value != octet {
                        return None;
                    }
                }
                Segment::Wildcard => {}
                Segment::Bind(name) => match bound.get(name) {
                    Some(prev) if *prev != octet => return None,
                    _ => {
                        bound.insert(name.clone(), octet);
                    }
                },
                Segment::Pin(name) => {
                    if pinned.get(name) != Some(&octet) {
                        return None;
                    }
                }
            }
        }
        Some(bound)
    }

    /// True when `addr` matches, captures discarded.
    pub fn matches(&self, addr: Ipv4Addr) -> bool {
        self.captures(addr).is_some()
    }

    /// True when `addr` matches under `pinned`, captures discarded.
    pub fn matches_pinned(&self, addr: Ipv4Addr, pinned: &Bindings) -> bool {
        self.captures_pinned(addr, pinned).is_some()
    }
}

impl FromStr for Ipv4Pattern {
    type Err = AddrError;

    /// Compiles a template, rejecting structural problems up front with
    /// [`AddrError::InvalidTemplate`]: wrong segment counts, literals
    /// outside `0..=255`, and segments that are neither octet nor
    /// variable.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(invalid(
                s,
                format!("expected 4 segments, found {}", parts.len()),
            ));
        }
        let segments = [
            parse_segment(s, parts[0])?,
            parse_segment(s, parts[1])?,
            parse_segment(s, parts[2])?,
            parse_segment(s, parts[3])?,
        ];
        debug!(template = %s, "compiled ipv4 template");
        Ok(Ipv4Pattern { segments })
    }
}

fn parse_segment(template: &str, part: &str) -> Result<Segment> {
    if part == "_" {
        return Ok(Segment::Wildcard);
    }
    if let Some(name) = part.strip_prefix('^') {
        if !is_var_name(name) {
            return Err(invalid(template, format!("bad pinned variable {part:?}")));
        }
        return Ok(Segment::Pin(name.to_string()));
    }
    if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
        return match part.parse::<u64>() {
            Ok(value) if value <= 255 => Ok(Segment::Literal(value as u8)),
            _ => Err(invalid(template, format!("octet {part} out of range"))),
        };
    }
    if is_var_name(part) {
        return Ok(Segment::Bind(part.to_string()));
    }
    Err(invalid(
        template,
        format!("segment {part:?} is neither an octet nor a variable"),
    ))
}

/// Variable names follow identifier rules: a lowercase letter or
/// underscore, then lowercase letters, digits, and underscores.
fn is_var_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_lowercase() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

fn invalid(template: &str, reason: String) -> AddrError {
    AddrError::InvalidTemplate {
        template: template.to_string(),
        reason,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
