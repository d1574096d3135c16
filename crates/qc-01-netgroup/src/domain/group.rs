//! Network Group Derivation (Anti-Eclipse)
//!
//! Reduces an address to the network neighbourhood it belongs to. The
//! address table caps how many entries may share one group, so an attacker
//! has to control many groups rather than many addresses.
//!
//! # Grouping
//! - IPv4 (and IPv6 forms embedding IPv4): /16
//! - IPv6: /32, except /36 inside Hurricane Electric's tunnel broker block
//! - OnionCat Tor: top nibble of the onion service key
//!
//! The string form is persisted and compared by the address table, so it
//! must match the conventional textual address forms byte for byte.

use super::address::{mask_prefix, NetworkAddress};
use super::classifier::AddressClassifier;
use std::fmt;
use tracing::trace;

/// IPv4 group prefix length
const IPV4_GROUP_BITS: u8 = 16;
/// IPv6 group prefix length
const IPV6_GROUP_BITS: u8 = 32;
/// IPv6 group prefix length inside the tunnel broker block
const HE_NET_GROUP_BITS: u8 = 36;

/// Network group an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetworkGroup {
    /// Loopback or 0.0.0.0/8
    Local,
    /// Anything not publicly routable
    Unroutable,
    /// IPv4 /16 (first two octets)
    Ipv4([u8; 2]),
    /// Masked IPv6 prefix (/32 or /36)
    Ipv6([u8; 16]),
    /// Onion service key nibble (0-15)
    Tor(u8),
}

impl NetworkGroup {
    fn from_ipv4(ip: [u8; 4]) -> Self {
        let [a, b, _, _] = mask_prefix(ip, IPV4_GROUP_BITS);
        NetworkGroup::Ipv4([a, b])
    }
}

impl fmt::Display for NetworkGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Unroutable => write!(f, "unroutable"),
            Self::Ipv4([a, b]) => write!(f, "{}", NetworkAddress::v4(*a, *b, 0, 0)),
            Self::Ipv6(bytes) => write!(f, "{}", NetworkAddress::V6(*bytes)),
            Self::Tor(nibble) => write!(f, "tor:{}", nibble),
        }
    }
}

impl AddressClassifier<'_> {
    /// Derive the network group of `addr`. First match wins.
    pub fn network_group(&self, addr: &NetworkAddress) -> NetworkGroup {
        if self.is_local(addr) {
            return NetworkGroup::Local;
        }
        if !self.is_routable(addr) {
            return NetworkGroup::Unroutable;
        }
        if let Some(ip) = addr.to_ipv4() {
            return NetworkGroup::from_ipv4(ip);
        }
        if self.is_rfc6145(addr) || self.is_rfc6052(addr) {
            // last four bytes are the IPv4 address
            if let Some(ip) = addr.embedded_ipv4(12) {
                return NetworkGroup::from_ipv4(ip);
            }
        }
        if self.is_rfc3964(addr) {
            if let Some(ip) = addr.embedded_ipv4(2) {
                return NetworkGroup::from_ipv4(ip);
            }
        }
        if self.is_rfc4380(addr) {
            let client = addr.teredo_client_ipv4();
            trace!(%addr, client = ?client, "Grouping Teredo address by client IPv4");
            return NetworkGroup::from_ipv4(client);
        }
        if self.is_onion_cat_tor(addr) {
            return NetworkGroup::Tor(addr.onion_key_nibble());
        }

        let bits = if self.is_he_net(addr) {
            trace!(%addr, "Tunnel broker address, grouping at /36");
            HE_NET_GROUP_BITS
        } else {
            IPV6_GROUP_BITS
        };

        NetworkGroup::Ipv6(mask_prefix(addr.to_ipv6_bytes(), bits))
    }

    /// Canonical group key string for `addr`.
    pub fn group_key(&self, addr: &NetworkAddress) -> String {
        self.network_group(addr).to_string()
    }
}

/// [`AddressClassifier::group_key`] over the process-wide table.
pub fn group_key(addr: &NetworkAddress) -> String {
    AddressClassifier::global().group_key(addr)
}
