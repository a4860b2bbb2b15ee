//! IPv4 address validation
//!
//! Accepts exactly four dot-separated decimal octets in `0..=255`: digits only,
//! no empty segments, no signs, exponents, whitespace or leading zeros.

use std::net::Ipv4Addr;

use crate::error::ValidationError;

/// Parse a dotted-quad address.
pub fn parse_ipv4(address: &str) -> Result<Ipv4Addr, ValidationError> {
    address
        .parse::<Ipv4Addr>()
        .map_err(|_| ValidationError::BadFormat(address.to_string()))
}
