//! # MAC Core
//!
//! A 48-bit hardware address with strict text handling, integer round-trips,
//! local/universal classification, prefix masks, and CSPRNG generation for
//! synthetic interfaces.
//!
//! Three input groupings are accepted and all render back to the canonical
//! uppercase colon form:
//!
//! | Grouping | Example |
//! |----------|---------|
//! | Colons   | `06:AA:07:FB:B6:1E` |
//! | Hyphens  | `06-AA-07-FB-B6-1E` |
//! | Dots     | `06AA.07FB.B61E` |

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{AddrError, Result};

/// A MAC address as six octets, transmission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddr(pub u8, pub u8, pub u8, pub u8, pub u8, pub u8);

impl MacAddr {
    /// Bit width of a MAC address.
    pub const BITS: u8 = 48;

    /// Largest MAC address integer, `FF:FF:FF:FF:FF:FF`.
    pub const MAX_INT: u64 = (1 << 48) - 1;

    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        MacAddr(a, b, c, d, e, f)
    }

    /// The six octets in transmission order.
    pub const fn octets(&self) -> [u8; 6] {
        [self.0, self.1, self.2, self.3, self.4, self.5]
    }

    pub const fn from_octets(octets: [u8; 6]) -> Self {
        MacAddr(
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5],
        )
    }

    /// Big-endian integer encoding, occupying the low 48 bits.
    pub const fn to_int(&self) -> u64 {
        (self.0 as u64) << 40
            | (self.1 as u64) << 32
            | (self.2 as u64) << 24
            | (self.3 as u64) << 16
            | (self.4 as u64) << 8
            | (self.5 as u64)
    }

    /// Decodes a 48-bit integer. Inverse of [`MacAddr::to_int`].
    ///
    /// Fails with [`AddrError::OutOfRange`] when `value` has bits above
    /// the 48th set.
    pub fn from_int(value: u64) -> Result<Self> {
        if value > Self::MAX_INT {
            return Err(AddrError::OutOfRange {
                what: format!("integer {value:#x} does not fit a 48-bit MAC address"),
            });
        }
        Ok(Self::int_to_mac(value))
    }

    /// True when the locally-administered bit (bit 1 of the first octet)
    /// is set. Locally-administered addresses are assigned by software
    /// rather than burned in by a vendor.
    pub const fn is_local(&self) -> bool {
        self.0 & 0x02 != 0
    }

    /// True when the address is universally administered, the complement
    /// of [`MacAddr::is_local`].
    pub const fn is_universal(&self) -> bool {
        !self.is_local()
    }

    /// Mask address with the top `bits` of 48 set, as in
    /// `FF:FF:FF:00:00:00` for a 24-bit vendor prefix.
    ///
    /// Fails with [`AddrError::OutOfRange`] when `bits` exceeds 48.
    pub fn mask(bits: u8) -> Result<Self> {
        Self::mask_int(bits).map(Self::int_to_mac)
    }

    /// Integer form of [`MacAddr::mask`].
    pub fn mask_int(bits: u8) -> Result<u64> {
        if bits > Self::BITS {
            return Err(AddrError::OutOfRange {
                what: format!("bit length {bits} exceeds the MAC width of 48"),
            });
        }
        if bits == 0 {
            Ok(0)
        } else {
            Ok((Self::MAX_INT << (Self::BITS - bits)) & Self::MAX_INT)
        }
    }

    /// A uniformly random MAC address from the thread-local CSPRNG.
    pub fn random() -> Self {
        let mac = Self::int_to_mac(rand::random::<u64>() & Self::MAX_INT);
        trace!(%mac, "generated random mac");
        mac
    }

    /// A random MAC address whose top `bits` are copied from `seed`.
    ///
    /// With `bits = 24` the vendor prefix of `seed` is preserved and the
    /// device half is randomized; `bits = 0` is fully random, `bits = 48`
    /// returns `seed` unchanged. Fails with [`AddrError::OutOfRange`] when
    /// `bits` exceeds 48.
    pub fn random_with_prefix(seed: MacAddr, bits: u8) -> Result<Self> {
        let m = Self::mask_int(bits)?;
        let value = (seed.to_int() & m) | (rand::random::<u64>() & Self::MAX_INT & !m);
        let mac = Self::int_to_mac(value);
        trace!(%seed, bits, %mac, "generated random mac under prefix");
        Ok(mac)
    }

    /// In-range integer to MAC. Callers guarantee `value <= MAX_INT`.
    const fn int_to_mac(value: u64) -> Self {
        MacAddr(
            (value >> 40) as u8,
            (value >> 32) as u8,
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }
}

impl fmt::Display for MacAddr {
    /// Canonical form: uppercase hex pairs joined by colons.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0, self.1, self.2, self.3, self.4, self.5
        )
    }
}

impl FromStr for MacAddr {
    type Err = AddrError;

    /// Strict parse over the three accepted groupings.
    ///
    /// The separator selects the shape: colons and hyphens take six
    /// two-digit groups, dots take three four-digit groups. Wrong group
    /// counts, wrong digit counts, and non-hex characters are rejected
    /// with [`AddrError::MalformedAddress`].
    fn from_str(s: &str) -> Result<Self> {
        let octets = if s.contains(':') {
            parse_groups(s, ':', 6, 2)
        } else if s.contains('-') {
            parse_groups(s, '-', 6, 2)
        } else if s.contains('.') {
            parse_groups(s, '.', 3, 4)
        } else {
            None
        };
        match octets {
            Some(octets) => Ok(Self::from_octets(octets)),
            None => Err(AddrError::MalformedAddress {
                input: s.to_string(),
            }),
        }
    }
}

/// True when `text` parses as a MAC address in any accepted grouping.
///
/// Never fails, whatever the input.
pub fn is_mac(text: &str) -> bool {
    text.parse::<MacAddr>().is_ok()
}

/// Splits `s` on `sep` into exactly `groups` groups of `digits` hex digits
/// and packs the twelve digits into octets. `None` on any shape violation.
fn parse_groups(s: &str, sep: char, groups: usize, digits: usize) -> Option<[u8; 6]> {
    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != groups {
        return None;
    }
    let mut hex = String::with_capacity(12);
    for part in parts {
        if part.len() != digits || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        hex.push_str(part);
    }
    let mut octets = [0u8; 6];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(octets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
