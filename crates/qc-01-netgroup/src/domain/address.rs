//! Network Address Value Object
//!
//! Explicit tagged representation over the 4-byte and 16-byte address forms.
//!
//! An IPv6 value inside the IPv4-mapped block (`::ffff:0:0/96`) has a valid
//! 4-byte view and is treated as IPv4 by every classification check.
//! IPv4-compatible addresses (`::a.b.c.d`) are plain IPv6.

use super::errors::AddressError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Leading 12 bytes of an IPv4-mapped IPv6 address.
const V4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Peer-advertised network address (IPv4 or IPv6).
///
/// Immutable once constructed; classification only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkAddress {
    /// IPv4 address (4 bytes).
    V4([u8; 4]),
    /// IPv6 address (16 bytes).
    V6([u8; 16]),
}

impl NetworkAddress {
    /// Create an IPv4 address
    pub const fn v4(a: u8, b: u8, c: u8, d: u8) -> Self {
        NetworkAddress::V4([a, b, c, d])
    }

    /// Create an IPv6 address from bytes
    pub const fn v6(bytes: [u8; 16]) -> Self {
        NetworkAddress::V6(bytes)
    }

    /// Create an IPv6 address from its eight 16-bit segments.
    pub fn from_segments(segments: [u16; 8]) -> Self {
        NetworkAddress::V6(Ipv6Addr::from(segments).octets())
    }

    /// Decode raw address bytes.
    ///
    /// Exactly 4 or 16 bytes are accepted; anything else is a malformed
    /// encoding and never reaches the classifier.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        if let Ok(v4) = <[u8; 4]>::try_from(bytes) {
            return Ok(NetworkAddress::V4(v4));
        }
        <[u8; 16]>::try_from(bytes)
            .map(NetworkAddress::V6)
            .map_err(|_| AddressError::InvalidLength { len: bytes.len() })
    }

    /// The 4-byte view: the IPv4 address itself, or the IPv4 address carried
    /// in an IPv4-mapped IPv6 address.
    pub fn to_ipv4(&self) -> Option<[u8; 4]> {
        match self {
            NetworkAddress::V4(bytes) => Some(*bytes),
            NetworkAddress::V6(bytes) if bytes[..12] == V4_MAPPED_PREFIX => {
                Some([bytes[12], bytes[13], bytes[14], bytes[15]])
            }
            NetworkAddress::V6(_) => None,
        }
    }

    /// The 16-byte form. IPv4 addresses are returned IPv4-mapped.
    pub fn to_ipv6_bytes(&self) -> [u8; 16] {
        match self {
            NetworkAddress::V4(v4) => {
                let mut bytes = [0u8; 16];
                bytes[..12].copy_from_slice(&V4_MAPPED_PREFIX);
                bytes[12..].copy_from_slice(v4);
                bytes
            }
            NetworkAddress::V6(bytes) => *bytes,
        }
    }

    /// IPv6 bytes of an address that has no 4-byte view.
    pub(crate) fn ipv6_octets(&self) -> Option<&[u8; 16]> {
        match self {
            NetworkAddress::V6(bytes) if bytes[..12] != V4_MAPPED_PREFIX => Some(bytes),
            _ => None,
        }
    }

    /// Collapse an IPv4-mapped IPv6 address to its `V4` form.
    pub fn canonical(&self) -> Self {
        match self.to_ipv4() {
            Some(v4) => NetworkAddress::V4(v4),
            None => *self,
        }
    }

    /// Check if this address has a 4-byte representation
    pub fn is_ipv4(&self) -> bool {
        self.to_ipv4().is_some()
    }

    /// IPv4 address embedded at `offset` in the 16-byte form.
    ///
    /// NAT64/NAT46 translation prefixes carry it at bytes 12-15, 6to4 at
    /// bytes 2-5.
    pub fn embedded_ipv4(&self, offset: usize) -> Option<[u8; 4]> {
        let bytes = self.to_ipv6_bytes();
        bytes
            .get(offset..offset + 4)
            .and_then(|slice| <[u8; 4]>::try_from(slice).ok())
    }

    /// Teredo client IPv4 address.
    ///
    /// Teredo stores the client address in bytes 12-15 with every bit
    /// inverted.
    pub fn teredo_client_ipv4(&self) -> [u8; 4] {
        let bytes = self.to_ipv6_bytes();
        [!bytes[12], !bytes[13], !bytes[14], !bytes[15]]
    }

    /// Top nibble of an onion service key encoded in the OnionCat block
    /// (low 4 bits of byte 6).
    pub fn onion_key_nibble(&self) -> u8 {
        self.to_ipv6_bytes()[6] & 0x0f
    }

    /// Zero every bit past `prefix_len`.
    pub fn mask(&self, prefix_len: u8) -> Self {
        match self {
            NetworkAddress::V4(bytes) => NetworkAddress::V4(mask_prefix(*bytes, prefix_len)),
            NetworkAddress::V6(bytes) => NetworkAddress::V6(mask_prefix(*bytes, prefix_len)),
        }
    }
}

/// Keep the leading `prefix_len` bits of `bytes`, clearing the rest.
pub(crate) fn mask_prefix<const N: usize>(mut bytes: [u8; N], prefix_len: u8) -> [u8; N] {
    let full_bytes = (prefix_len / 8) as usize;
    let remaining_bits = prefix_len % 8;

    for (i, byte) in bytes.iter_mut().enumerate().skip(full_bytes) {
        if i == full_bytes && remaining_bits > 0 {
            *byte &= 0xFF << (8 - remaining_bits);
        } else {
            *byte = 0;
        }
    }

    bytes
}

impl fmt::Display for NetworkAddress {
    /// Conventional textual form: dotted quad for anything with a 4-byte
    /// view, RFC 5952 colon-hex otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_ipv4() {
            Some(v4) => fmt::Display::fmt(&Ipv4Addr::from(v4), f),
            None => fmt::Display::fmt(&Ipv6Addr::from(self.to_ipv6_bytes()), f),
        }
    }
}

impl FromStr for NetworkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<IpAddr>()?.into())
    }
}

impl From<IpAddr> for NetworkAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Ipv4Addr> for NetworkAddress {
    fn from(ip: Ipv4Addr) -> Self {
        NetworkAddress::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for NetworkAddress {
    fn from(ip: Ipv6Addr) -> Self {
        NetworkAddress::V6(ip.octets())
    }
}

impl From<NetworkAddress> for IpAddr {
    fn from(addr: NetworkAddress) -> Self {
        match addr {
            NetworkAddress::V4(bytes) => IpAddr::V4(Ipv4Addr::from(bytes)),
            NetworkAddress::V6(bytes) => IpAddr::V6(Ipv6Addr::from(bytes)),
        }
    }
}
