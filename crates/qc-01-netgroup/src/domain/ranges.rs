//! Reserved-Range Table
//!
//! Named special-purpose address blocks tested by every classifier predicate.
//! The table is built once per process and exposes no mutator.

use super::address::NetworkAddress;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;
use tracing::debug;

/// A named CIDR block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedRange {
    name: &'static str,
    network: NetworkAddress,
    prefix_len: u8,
}

impl ReservedRange {
    /// IPv4 block `network/prefix_len`.
    pub fn v4(name: &'static str, network: Ipv4Addr, prefix_len: u8) -> Self {
        debug_assert!(prefix_len <= 32);
        Self {
            name,
            network: NetworkAddress::V4(network.octets()),
            prefix_len,
        }
    }

    /// IPv6 block `network/prefix_len`.
    pub fn v6(name: &'static str, network: Ipv6Addr, prefix_len: u8) -> Self {
        debug_assert!(prefix_len <= 128);
        Self {
            name,
            network: NetworkAddress::V6(network.octets()),
            prefix_len,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Bitwise prefix membership.
    ///
    /// IPv4 blocks match through the address's 4-byte view (so IPv4-mapped
    /// IPv6 addresses match too). IPv6 blocks never match an address that has
    /// a 4-byte view.
    pub fn contains(&self, addr: &NetworkAddress) -> bool {
        match &self.network {
            NetworkAddress::V4(network) => addr
                .to_ipv4()
                .is_some_and(|ip| prefix_matches(network, &ip, self.prefix_len)),
            NetworkAddress::V6(network) => addr
                .ipv6_octets()
                .is_some_and(|ip| prefix_matches(network, ip, self.prefix_len)),
        }
    }
}

/// Compare the leading `prefix_len` bits of two equal-length byte strings.
fn prefix_matches(network: &[u8], addr: &[u8], prefix_len: u8) -> bool {
    let prefix_bytes = (prefix_len / 8) as usize;
    let remaining_bits = prefix_len % 8;

    // Compare full bytes within prefix
    if network[..prefix_bytes] != addr[..prefix_bytes] {
        return false;
    }

    // Compare partial byte if prefix doesn't align to byte boundary
    if remaining_bits > 0 {
        let mask_byte = 0xFFu8 << (8 - remaining_bits);
        return (network[prefix_bytes] & mask_byte) == (addr[prefix_bytes] & mask_byte);
    }

    true
}

/// The full set of special-purpose blocks.
///
/// Blocks are disjoint except for OnionCat, which nests inside RFC4193.
#[derive(Debug, Clone)]
pub struct ReservedRanges {
    /// IPv4 private networks (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16)
    pub(crate) rfc1918: [ReservedRange; 3],
    /// IPv4 benchmarking (198.18.0.0/15)
    pub(crate) rfc2544: ReservedRange,
    /// IPv6 documentation (2001:db8::/32)
    pub(crate) rfc3849: ReservedRange,
    /// IPv4 link-local autoconfiguration (169.254.0.0/16)
    pub(crate) rfc3927: ReservedRange,
    /// 6to4 (2002::/16)
    pub(crate) rfc3964: ReservedRange,
    /// IPv6 unique local (fc00::/7)
    pub(crate) rfc4193: ReservedRange,
    /// Teredo (2001::/32)
    pub(crate) rfc4380: ReservedRange,
    /// ORCHID (2001:10::/28)
    pub(crate) rfc4843: ReservedRange,
    /// IPv6 link-local autoconfiguration (fe80::/64)
    pub(crate) rfc4862: ReservedRange,
    /// IPv4 documentation (192.0.2.0/24, 198.51.100.0/24, 203.0.113.0/24)
    pub(crate) rfc5737: [ReservedRange; 3],
    /// NAT64 well-known prefix (64:ff9b::/96)
    pub(crate) rfc6052: ReservedRange,
    /// IPv4-translated (::ffff:0:0:0/96)
    pub(crate) rfc6145: ReservedRange,
    /// IPv4 shared address space (100.64.0.0/10)
    pub(crate) rfc6598: ReservedRange,
    /// OnionCat Tor encoding (fd87:d87e:eb43::/48): 6 magic bytes followed
    /// by the 10-byte onion service key hash.
    pub(crate) onion_cat: ReservedRange,
    /// 127.0.0.0/8 and ::1/128
    pub(crate) loopback: [ReservedRange; 2],
    /// 0.0.0.0/8
    pub(crate) zero4: ReservedRange,
    /// Hurricane Electric tunnel broker (2001:470::/32), grouped at /36.
    pub(crate) he_net: ReservedRange,
}

impl ReservedRanges {
    /// Build the table from its literal constants.
    pub fn new() -> Self {
        Self {
            rfc1918: [
                ReservedRange::v4("RFC1918", Ipv4Addr::new(10, 0, 0, 0), 8),
                ReservedRange::v4("RFC1918", Ipv4Addr::new(172, 16, 0, 0), 12),
                ReservedRange::v4("RFC1918", Ipv4Addr::new(192, 168, 0, 0), 16),
            ],
            rfc2544: ReservedRange::v4("RFC2544", Ipv4Addr::new(198, 18, 0, 0), 15),
            rfc3849: ReservedRange::v6("RFC3849", Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0), 32),
            rfc3927: ReservedRange::v4("RFC3927", Ipv4Addr::new(169, 254, 0, 0), 16),
            rfc3964: ReservedRange::v6("RFC3964", Ipv6Addr::new(0x2002, 0, 0, 0, 0, 0, 0, 0), 16),
            rfc4193: ReservedRange::v6("RFC4193", Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 0), 7),
            rfc4380: ReservedRange::v6("RFC4380", Ipv6Addr::new(0x2001, 0, 0, 0, 0, 0, 0, 0), 32),
            rfc4843: ReservedRange::v6("RFC4843", Ipv6Addr::new(0x2001, 0x10, 0, 0, 0, 0, 0, 0), 28),
            rfc4862: ReservedRange::v6("RFC4862", Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 64),
            rfc5737: [
                ReservedRange::v4("RFC5737", Ipv4Addr::new(192, 0, 2, 0), 24),
                ReservedRange::v4("RFC5737", Ipv4Addr::new(198, 51, 100, 0), 24),
                ReservedRange::v4("RFC5737", Ipv4Addr::new(203, 0, 113, 0), 24),
            ],
            rfc6052: ReservedRange::v6("RFC6052", Ipv6Addr::new(0x64, 0xff9b, 0, 0, 0, 0, 0, 0), 96),
            rfc6145: ReservedRange::v6("RFC6145", Ipv6Addr::new(0, 0, 0, 0, 0xffff, 0, 0, 0), 96),
            rfc6598: ReservedRange::v4("RFC6598", Ipv4Addr::new(100, 64, 0, 0), 10),
            onion_cat: ReservedRange::v6(
                "OnionCat",
                Ipv6Addr::new(0xfd87, 0xd87e, 0xeb43, 0, 0, 0, 0, 0),
                48,
            ),
            loopback: [
                ReservedRange::v4("Loopback", Ipv4Addr::LOCALHOST, 8),
                ReservedRange::v6("Loopback", Ipv6Addr::LOCALHOST, 128),
            ],
            zero4: ReservedRange::v4("Zero", Ipv4Addr::UNSPECIFIED, 8),
            he_net: ReservedRange::v6("HurricaneElectric", Ipv6Addr::new(0x2001, 0x470, 0, 0, 0, 0, 0, 0), 32),
        }
    }

    /// All blocks in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ReservedRange> {
        self.rfc1918
            .iter()
            .chain([&self.rfc2544, &self.rfc3849, &self.rfc3927, &self.rfc3964])
            .chain([&self.rfc4193, &self.rfc4380, &self.rfc4843, &self.rfc4862])
            .chain(self.rfc5737.iter())
            .chain([&self.rfc6052, &self.rfc6145, &self.rfc6598, &self.onion_cat])
            .chain(self.loopback.iter())
            .chain([&self.zero4, &self.he_net])
    }

    /// Names of every block containing `addr`, in table order.
    pub(crate) fn matching_names(&self, addr: &NetworkAddress) -> Vec<&'static str> {
        self.iter()
            .filter(|range| range.contains(addr))
            .map(ReservedRange::name)
            .collect()
    }
}

impl Default for ReservedRanges {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide reserved-range table, built on first use.
pub static RESERVED_RANGES: LazyLock<ReservedRanges> = LazyLock::new(|| {
    let ranges = ReservedRanges::new();
    debug!(blocks = ranges.iter().count(), "Reserved network ranges initialized");
    ranges
});

/// Shared read-only handle to the process-wide table.
pub fn reserved_ranges() -> &'static ReservedRanges {
    &RESERVED_RANGES
}
