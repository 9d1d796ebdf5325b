//! # netspan-core
//!
//! Value types and arithmetic for network addresses: IPv4/IPv6 and MAC
//! parsing and formatting, integer round-trips, prefix masks, subnets,
//! inclusive ranges, and a small template language for matching IPv4
//! addresses octet by octet.
//!
//! Everything is computation over plain values; the crate never touches
//! sockets or interfaces, so it is equally at home in a scanner, a config
//! loader, and a test harness.
//!
//! | Module | Covers |
//! |--------|--------|
//! | [`ip`] | Address families, integer codecs, masks, stepping, strict text |
//! | [`mac`] | 48-bit hardware addresses |
//! | [`span`] | The contiguous-block protocol: count, contains, slice, iter |
//! | [`range`] | Inclusive `first..last` address runs |
//! | [`subnet`] | CIDR blocks, netmasks, broadcast |
//! | [`pattern`] | Dotted IPv4 templates with capture variables |

pub mod error;
pub mod ip;
pub mod mac;
pub mod pattern;
pub mod range;
pub mod span;
pub mod subnet;

pub use error::AddrError;
pub use ip::{Family, V4Style};
pub use mac::MacAddr;
pub use pattern::{Bindings, Ipv4Pattern};
pub use range::IpRange;
pub use span::{Span, SpanIter};
pub use subnet::Subnet;
