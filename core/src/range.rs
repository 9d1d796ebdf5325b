//! # Range
//!
//! An arbitrary inclusive run of addresses, `first..last`. Unlike a
//! [`Subnet`](crate::subnet::Subnet) a range has no alignment demands;
//! any ordered same-family pair is valid. Enumeration, counting, and
//! membership come from the [`Span`] impl.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{AddrError, Result};
use crate::ip::{self, Family};
use crate::span::Span;
use crate::subnet::Subnet;

/// An inclusive address range within one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    first: IpAddr,
    last: IpAddr,
}

impl IpRange {
    /// Builds a range from inclusive bounds.
    ///
    /// Fails with [`AddrError::FamilyMismatch`] when the bounds are not in
    /// the same family, and with [`AddrError::InvalidOrder`] when `first`
    /// is above `last`. Equal bounds make a one-address range.
    pub fn new(first: IpAddr, last: IpAddr) -> Result<Self> {
        if ip::family(&first) != ip::family(&last) {
            return Err(AddrError::FamilyMismatch { first, last });
        }
        if ip::to_integer(&first) > ip::to_integer(&last) {
            return Err(AddrError::InvalidOrder { first, last });
        }
        Ok(IpRange { first, last })
    }

    pub fn first(&self) -> IpAddr {
        self.first
    }

    pub fn last(&self) -> IpAddr {
        self.last
    }
}

impl Span for IpRange {
    fn family(&self) -> Family {
        ip::family(&self.first)
    }

    fn first(&self) -> IpAddr {
        self.first
    }

    fn last(&self) -> IpAddr {
        self.last
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}

impl FromStr for IpRange {
    type Err = AddrError;

    /// Parses `first..last`, both bounds in any form [`ip::from_string`]
    /// accepts. The two-dot delimiter is exact; anything else is
    /// [`AddrError::MalformedAddress`].
    fn from_str(s: &str) -> Result<Self> {
        let Some((first, last)) = s.split_once("..") else {
            return Err(AddrError::MalformedAddress {
                input: s.to_string(),
            });
        };
        IpRange::new(ip::from_string(first)?, ip::from_string(last)?)
    }
}

impl From<Subnet> for IpRange {
    /// Every subnet is a range; the bounds are the subnet's own.
    fn from(subnet: Subnet) -> Self {
        IpRange {
            first: Span::first(&subnet),
            last: Span::last(&subnet),
        }
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
