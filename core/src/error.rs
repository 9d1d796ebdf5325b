//! Error types for netspan.

use std::net::IpAddr;

use thiserror::Error;

/// Main error type for address, range, subnet, and template operations.
///
/// Every fallible operation in the crate returns this type; the validity
/// guards (`ip::is_address`, `mac::is_mac`, ...) never fail and answer
/// `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Text that does not parse as any accepted address form.
    #[error("malformed address {input:?}")]
    MalformedAddress { input: String },

    /// A numeric value does not fit its family's bit width, or address
    /// arithmetic stepped past a family boundary.
    #[error("out of range: {what}")]
    OutOfRange { what: String },

    /// Range bounds were given in descending order.
    #[error("range bounds out of order: {first} comes after {last}")]
    InvalidOrder { first: IpAddr, last: IpAddr },

    /// Range bounds from different address families.
    #[error("mixed address families: {first} and {last}")]
    FamilyMismatch { first: IpAddr, last: IpAddr },

    /// A subnet prefix with host bits set below its bit length.
    #[error("{prefix}/{bits} has host bits set; not a routing prefix")]
    InvalidPrefix { prefix: IpAddr, bits: u8 },

    /// A pattern template that failed structural validation.
    #[error("invalid template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// An operation that is deliberately not defined for its input.
    #[error("unsupported operation: {what}")]
    Unsupported { what: &'static str },
}

/// Result type alias using our error type.
pub type Result<T, E = AddrError> = std::result::Result<T, E>;
