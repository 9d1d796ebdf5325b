//! # Subnet
//!
//! A CIDR block: a routing prefix plus a bit length. The strict
//! constructor demands the address already be the block's root; the
//! lenient one masks whatever it is handed. Enumeration and membership
//! come from the [`Span`] impl.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use tracing::debug;

use crate::error::{AddrError, Result};
use crate::ip::{self, Family};
use crate::span::Span;

/// A subnet in CIDR terms, `prefix/bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    prefix: IpAddr,
    bits: u8,
}

impl Subnet {
    /// Builds a subnet from its exact root address.
    ///
    /// Fails with [`AddrError::InvalidPrefix`] when `prefix` has host
    /// bits set below `bits`, and with [`AddrError::OutOfRange`] when
    /// `bits` exceeds the family width. Use [`Subnet::of`] to accept any
    /// member address.
    pub fn new(prefix: IpAddr, bits: u8) -> Result<Self> {
        let root = ip::prefix(&prefix, bits)?;
        if root != prefix {
            return Err(AddrError::InvalidPrefix { prefix, bits });
        }
        Ok(Subnet { prefix, bits })
    }

    /// The subnet some address belongs to: `addr` is masked down to the
    /// block's root. Never fails on host bits, only on a bad `bits`.
    pub fn of(addr: IpAddr, bits: u8) -> Result<Self> {
        let prefix = ip::prefix(&addr, bits)?;
        Ok(Subnet { prefix, bits })
    }

    /// The block's root address.
    pub fn prefix(&self) -> IpAddr {
        self.prefix
    }

    /// The prefix length in bits.
    pub fn bit_length(&self) -> u8 {
        self.bits
    }

    /// The netmask as an address, `255.255.255.0` for a `/24`.
    pub fn netmask(&self) -> IpAddr {
        let fam = ip::family(&self.prefix);
        ip::int_to_addr(ip::mask_int_raw(fam, self.bits), fam)
    }

    /// The IPv4 broadcast address, the highest address of the block.
    ///
    /// Broadcast is a v4 concept; IPv6 replaced it with multicast, so a
    /// v6 subnet fails with [`AddrError::Unsupported`] rather than
    /// inventing an answer.
    pub fn broadcast(&self) -> Result<Ipv4Addr> {
        match Span::last(self) {
            IpAddr::V4(v4) => Ok(v4),
            IpAddr::V6(_) => Err(AddrError::Unsupported {
                what: "broadcast for IPv6 subnets",
            }),
        }
    }
}

impl Span for Subnet {
    fn family(&self) -> Family {
        ip::family(&self.prefix)
    }

    fn first(&self) -> IpAddr {
        self.prefix
    }

    fn last(&self) -> IpAddr {
        let fam = ip::family(&self.prefix);
        let m = ip::mask_int_raw(fam, self.bits);
        ip::int_to_addr(ip::to_integer(&self.prefix) | (!m & fam.max_int()), fam)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.prefix, self.bits)
    }
}

impl FromStr for Subnet {
    type Err = AddrError;

    /// Parses strict CIDR text, `10.0.0.0/24`. The address part must be
    /// the block's root; a member address fails with
    /// [`AddrError::InvalidPrefix`]. Use [`config_from_str`] when the
    /// text carries a host address alongside its subnet.
    fn from_str(s: &str) -> Result<Self> {
        let (addr, bits) = split_cidr(s)?;
        Subnet::new(addr, bits)
    }
}

/// Parses lenient CIDR text into the written address and its subnet.
///
/// Interface configs write `10.0.0.1/24` meaning "this host, on this
/// subnet". The host address is preserved and returned next to the
/// masked block, so nothing is lost to the strictness of
/// [`Subnet::from_str`].
pub fn config_from_str(s: &str) -> Result<(IpAddr, Subnet)> {
    let (addr, bits) = split_cidr(s)?;
    let subnet = Subnet::of(addr, bits)?;
    if addr != subnet.prefix() {
        debug!(%addr, %subnet, "config address sits inside its subnet");
    }
    Ok((addr, subnet))
}

/// Splits `addr/bits` CIDR text. The address takes any form
/// [`ip::from_string`] accepts; the bit length must be bare decimal.
fn split_cidr(s: &str) -> Result<(IpAddr, u8)> {
    let Some((addr, bits)) = s.split_once('/') else {
        return Err(AddrError::MalformedAddress {
            input: s.to_string(),
        });
    };
    let addr = ip::from_string(addr)?;
    let bits = bits
        .parse::<u8>()
        .map_err(|_| AddrError::MalformedAddress {
            input: s.to_string(),
        })?;
    Ok((addr, bits))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
