//! # Address Core
//!
//! Bit-level arithmetic and strict text handling for IPv4/IPv6 addresses.
//!
//! This module works directly on [`std::net::IpAddr`]: the standard library
//! supplies the value types, canonical formatting, and strict dotted/colon
//! parsing, and this module supplies what it does not — integer round-trips,
//! prefix masks, successor/predecessor stepping, alternate output styles,
//! and never-failing validity guards over untyped text.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{AddrError, Result};

/// The two supported address families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Bit width of an address in this family.
    pub const fn bits(&self) -> u32 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Largest address integer representable in this family.
    pub const fn max_int(&self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Family of an address value.
pub fn family(addr: &IpAddr) -> Family {
    match addr {
        IpAddr::V4(_) => Family::V4,
        IpAddr::V6(_) => Family::V6,
    }
}

/// True when `text` parses as an address of either family.
///
/// Never fails, whatever the input; safe as an unconditional filter over
/// untyped config or user text.
pub fn is_address(text: &str) -> bool {
    from_string(text).is_ok()
}

/// True when `text` parses as an IPv4 address (dotted or hyphenated).
pub fn is_v4(text: &str) -> bool {
    matches!(from_string(text), Ok(IpAddr::V4(_)))
}

/// True when `text` parses as an IPv6 address.
pub fn is_v6(text: &str) -> bool {
    matches!(from_string(text), Ok(IpAddr::V6(_)))
}

/// Big-endian integer encoding of an address.
///
/// IPv4 values occupy the low 32 bits of the result.
pub fn to_integer(addr: &IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(*v4) as u128,
        IpAddr::V6(v6) => u128::from(*v6),
    }
}

/// Decodes `value` as an address of `family`.
///
/// Inverse of [`to_integer`]. Fails with [`AddrError::OutOfRange`] when
/// `value` does not fit the family's bit width.
pub fn from_integer(value: u128, family: Family) -> Result<IpAddr> {
    if value > family.max_int() {
        return Err(AddrError::OutOfRange {
            what: format!("integer {value:#x} does not fit a {family} address"),
        });
    }
    Ok(int_to_addr(value, family))
}

/// In-range integer to address. Callers guarantee `value` fits the family.
pub(crate) fn int_to_addr(value: u128, family: Family) -> IpAddr {
    match family {
        Family::V4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
        Family::V6 => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

/// Mask integer with the top `bits` bits of the family width set.
///
/// Fails with [`AddrError::OutOfRange`] when `bits` exceeds the width.
pub fn mask_int(family: Family, bits: u8) -> Result<u128> {
    let width = family.bits();
    if u32::from(bits) > width {
        return Err(AddrError::OutOfRange {
            what: format!("bit length {bits} exceeds the {family} width of {width}"),
        });
    }
    Ok(mask_int_raw(family, bits))
}

/// Mask arithmetic without the bit-length check. Callers guarantee
/// `bits <= family.bits()`.
pub(crate) fn mask_int_raw(family: Family, bits: u8) -> u128 {
    let full = family.max_int();
    if bits == 0 {
        0
    } else {
        (full << (family.bits() - u32::from(bits))) & full
    }
}

/// Mask address: top `bits` bits set, remainder zero. The raw integer
/// form is [`mask_int`].
pub fn mask(family: Family, bits: u8) -> Result<IpAddr> {
    mask_int(family, bits).map(|m| int_to_addr(m, family))
}

/// The top `bits` bits of `addr`: `addr AND mask(bits)`, family inferred.
pub fn prefix(addr: &IpAddr, bits: u8) -> Result<IpAddr> {
    let fam = family(addr);
    let m = mask_int(fam, bits)?;
    Ok(int_to_addr(to_integer(addr) & m, fam))
}

/// Successor address.
///
/// Fails with [`AddrError::OutOfRange`] at the top of the family; there is
/// no wraparound, so callers can rely on the error to detect exhaustion.
pub fn next(addr: &IpAddr) -> Result<IpAddr> {
    let fam = family(addr);
    let value = to_integer(addr);
    if value == fam.max_int() {
        return Err(AddrError::OutOfRange {
            what: format!("{addr} is the last {fam} address; no successor"),
        });
    }
    Ok(int_to_addr(value + 1, fam))
}

/// Predecessor address.
///
/// Fails with [`AddrError::OutOfRange`] at the bottom of the family; there
/// is no wraparound.
pub fn prev(addr: &IpAddr) -> Result<IpAddr> {
    let fam = family(addr);
    let value = to_integer(addr);
    if value == 0 {
        return Err(AddrError::OutOfRange {
            what: format!("{addr} is the first {fam} address; no predecessor"),
        });
    }
    Ok(int_to_addr(value - 1, fam))
}

/// Strict address parse.
///
/// Accepts dotted-decimal IPv4, hyphenated IPv4 (`10-0-0-1`), and colon-hex
/// IPv6. Leading zeros, out-of-range octets, extra components,
/// and mixed separators are all rejected with
/// [`AddrError::MalformedAddress`]; there is no partial matching.
pub fn from_string(text: &str) -> Result<IpAddr> {
    if let Ok(addr) = text.parse::<IpAddr>() {
        return Ok(addr);
    }
    if text.contains('-') && !text.contains('.') && !text.contains(':') {
        if let Ok(v4) = text.replace('-', ".").parse::<Ipv4Addr>() {
            return Ok(IpAddr::V4(v4));
        }
    }
    Err(AddrError::MalformedAddress {
        input: text.to_string(),
    })
}

/// Output style for IPv4 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum V4Style {
    /// Dotted decimal (`10.0.0.1`), the canonical form.
    #[default]
    Dots,
    /// Hyphen separated (`10-0-0-1`).
    Hyphens,
}

/// Formats `addr`, honoring `style` for IPv4.
///
/// IPv6 always renders in the canonical compressed form; the style only
/// selects the IPv4 separator. The plain `Display` of [`IpAddr`] is the
/// canonical output for both families.
pub fn format_with(addr: &IpAddr, style: V4Style) -> String {
    match (addr, style) {
        (IpAddr::V4(v4), V4Style::Hyphens) => {
            let o = v4.octets();
            format!("{}-{}-{}-{}", o[0], o[1], o[2], o[3])
        }
        _ => addr.to_string(),
    }
}

/// Formats an optional address, rendering `None` as the empty string.
///
/// Convenience for optional configuration fields.
pub fn optional_to_string(addr: Option<IpAddr>) -> String {
    addr.map(|a| a.to_string()).unwrap_or_default()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
