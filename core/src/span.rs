//! # Span
//!
//! The shared protocol over contiguous address blocks. An implementor only
//! names its family and bounds; counting, membership, subset tests, lazy
//! enumeration, and constant-time-seek slicing are all provided on top of
//! the integer encoding from [`crate::ip`].

use std::net::IpAddr;
use std::ops::RangeInclusive;

use crate::ip::{self, Family};

/// A contiguous, inclusive block of addresses within one family.
///
/// Implementors guarantee `first() <= last()` in integer order and that
/// both bounds share [`Span::family`]; every provided method relies on it.
pub trait Span {
    /// Family of every address in the block.
    fn family(&self) -> Family;

    /// Lowest address in the block.
    fn first(&self) -> IpAddr;

    /// Highest address in the block.
    fn last(&self) -> IpAddr;

    /// Number of addresses, bounds included.
    ///
    /// Saturates at `u128::MAX` for the one block that holds every IPv6
    /// address; every other block counts exactly.
    fn count(&self) -> u128 {
        let width = ip::to_integer(&self.last()) - ip::to_integer(&self.first());
        width.saturating_add(1)
    }

    /// True when `addr` lies inside the block. An address of the other
    /// family is never contained.
    fn contains(&self, addr: &IpAddr) -> bool {
        if ip::family(addr) != self.family() {
            return false;
        }
        let value = ip::to_integer(addr);
        ip::to_integer(&self.first()) <= value && value <= ip::to_integer(&self.last())
    }

    /// True when every address of `other` lies inside this block.
    fn contains_span<S: Span + ?Sized>(&self, other: &S) -> bool {
        self.contains(&other.first()) && self.contains(&other.last())
    }

    /// Up to `len` addresses starting `start` places into the block.
    ///
    /// Seeks by integer offset rather than by stepping, so a slice deep
    /// inside a large block costs the same as one at the front. Offsets
    /// past the end yield fewer addresses or none; nothing fails.
    fn slice(&self, start: u128, len: usize) -> Vec<IpAddr> {
        let family = self.family();
        let base = ip::to_integer(&self.first());
        let top = ip::to_integer(&self.last());
        let Some(from) = base.checked_add(start).filter(|v| *v <= top) else {
            return Vec::new();
        };
        (from..=top)
            .take(len)
            .map(|v| ip::int_to_addr(v, family))
            .collect()
    }

    /// Lazy iterator over every address, lowest first.
    ///
    /// Nothing is materialized; a `/8` can be walked without allocating
    /// sixteen million addresses.
    fn iter(&self) -> SpanIter {
        SpanIter {
            family: self.family(),
            ints: ip::to_integer(&self.first())..=ip::to_integer(&self.last()),
        }
    }
}

/// Iterator over the addresses of a [`Span`], in ascending order.
#[derive(Debug, Clone)]
pub struct SpanIter {
    family: Family,
    ints: RangeInclusive<u128>,
}

impl Iterator for SpanIter {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        self.ints.next().map(|v| ip::int_to_addr(v, self.family))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ints.size_hint()
    }
}

impl DoubleEndedIterator for SpanIter {
    fn next_back(&mut self) -> Option<IpAddr> {
        self.ints
            .next_back()
            .map(|v| ip::int_to_addr(v, self.family))
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
