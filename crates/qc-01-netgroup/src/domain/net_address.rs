//! Gossiped peer address record.
//!
//! Only the `ip` field feeds classification; the rest is carried through for
//! the address table.
//!
//! # Wire Layout (30 bytes)
//!
//! | Field | Size | Encoding |
//! |---|---|---|
//! | timestamp | 4 | u32 little-endian (unix seconds) |
//! | services | 8 | u64 little-endian |
//! | ip | 16 | IPv6, IPv4 carried IPv4-mapped |
//! | port | 2 | u16 big-endian |

use super::address::NetworkAddress;
use super::errors::AddressError;
use tracing::debug;

/// A peer address as advertised in address gossip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetAddress {
    /// Last time the peer was seen (unix seconds)
    pub timestamp: u32,
    /// Advertised service bits
    pub services: u64,
    /// Network address
    pub ip: NetworkAddress,
    /// Listening port
    pub port: u16,
}

impl NetAddress {
    /// Encoded size in bytes
    pub const WIRE_SIZE: usize = 30;

    pub fn new(ip: NetworkAddress, port: u16, services: u64, timestamp: u32) -> Self {
        Self {
            timestamp,
            services,
            ip,
            port,
        }
    }

    /// Decode one record.
    ///
    /// Rejects input shorter than [`Self::WIRE_SIZE`]; trailing bytes are
    /// ignored. IPv4-mapped addresses come out as `V4`.
    pub fn decode(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() < Self::WIRE_SIZE {
            debug!(len = bytes.len(), "Rejecting truncated address record");
            return Err(AddressError::Truncated {
                expected: Self::WIRE_SIZE,
                actual: bytes.len(),
            });
        }

        let timestamp = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

        let mut services = [0u8; 8];
        services.copy_from_slice(&bytes[4..12]);

        let ip = NetworkAddress::from_slice(&bytes[12..28])?.canonical();
        let port = u16::from_be_bytes([bytes[28], bytes[29]]);

        Ok(Self {
            timestamp,
            services: u64::from_le_bytes(services),
            ip,
            port,
        })
    }

    /// Encode to the fixed wire layout.
    pub fn encode(&self) -> [u8; Self::WIRE_SIZE] {
        let mut out = [0u8; Self::WIRE_SIZE];
        out[0..4].copy_from_slice(&self.timestamp.to_le_bytes());
        out[4..12].copy_from_slice(&self.services.to_le_bytes());
        out[12..28].copy_from_slice(&self.ip.to_ipv6_bytes());
        out[28..30].copy_from_slice(&self.port.to_be_bytes());
        out
    }
}
