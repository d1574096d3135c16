//! Domain Errors for Address Classification
//!
//! Classification itself is total and never fails. The only error class is a
//! malformed address encoding, rejected where addresses are decoded.

use std::net::AddrParseError;
use thiserror::Error;

/// Errors raised while decoding a network address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Raw address bytes are neither 4 (IPv4) nor 16 (IPv6) bytes long.
    #[error("Invalid address length: {len} bytes (expected 4 or 16)")]
    InvalidLength { len: usize },

    /// A gossip address record was shorter than its fixed wire size.
    #[error("Truncated address record: {actual} < {expected} bytes")]
    Truncated { expected: usize, actual: usize },

    /// Textual address could not be parsed.
    #[error("Invalid address text: {0}")]
    Parse(#[from] AddrParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AddressError::InvalidLength { len: 7 }.to_string(),
            "Invalid address length: 7 bytes (expected 4 or 16)"
        );
        assert_eq!(
            AddressError::Truncated {
                expected: 30,
                actual: 12
            }
            .to_string(),
            "Truncated address record: 12 < 30 bytes"
        );
    }
}
