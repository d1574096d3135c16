//! Address Classifier - Pure predicates over the reserved-range table
//!
//! All predicates are side-effect free and recompute from scratch on every
//! call. Nothing is cached.

use super::address::NetworkAddress;
use super::ranges::{reserved_ranges, ReservedRange, ReservedRanges};

/// Classifier bound to a read-only reserved-range table.
#[derive(Debug, Clone, Copy)]
pub struct AddressClassifier<'a> {
    ranges: &'a ReservedRanges,
}

impl AddressClassifier<'static> {
    /// Classifier over the process-wide table.
    pub fn global() -> Self {
        Self::new(reserved_ranges())
    }
}

impl Default for AddressClassifier<'static> {
    fn default() -> Self {
        Self::global()
    }
}

fn any_contains(ranges: &[ReservedRange], addr: &NetworkAddress) -> bool {
    ranges.iter().any(|range| range.contains(addr))
}

impl<'a> AddressClassifier<'a> {
    pub fn new(ranges: &'a ReservedRanges) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &'a ReservedRanges {
        self.ranges
    }

    /// Address has a valid 4-byte representation.
    pub fn is_ipv4(&self, addr: &NetworkAddress) -> bool {
        addr.is_ipv4()
    }

    /// Loopback or 0.0.0.0/8.
    pub fn is_local(&self, addr: &NetworkAddress) -> bool {
        any_contains(&self.ranges.loopback, addr) || self.ranges.zero4.contains(addr)
    }

    /// OnionCat Tor encoding block (fd87:d87e:eb43::/48), part of RFC4193.
    pub fn is_onion_cat_tor(&self, addr: &NetworkAddress) -> bool {
        self.ranges.onion_cat.contains(addr)
    }

    /// IPv4 private networks (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16).
    pub fn is_rfc1918(&self, addr: &NetworkAddress) -> bool {
        any_contains(&self.ranges.rfc1918, addr)
    }

    /// IPv4 benchmarking (198.18.0.0/15).
    pub fn is_rfc2544(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc2544.contains(addr)
    }

    /// IPv6 documentation (2001:db8::/32).
    pub fn is_rfc3849(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc3849.contains(addr)
    }

    /// IPv4 autoconfiguration (169.254.0.0/16).
    pub fn is_rfc3927(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc3927.contains(addr)
    }

    /// 6to4 encapsulation (2002::/16).
    pub fn is_rfc3964(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc3964.contains(addr)
    }

    /// IPv6 unique local (fc00::/7).
    pub fn is_rfc4193(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc4193.contains(addr)
    }

    /// Teredo tunneling over UDP (2001::/32).
    pub fn is_rfc4380(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc4380.contains(addr)
    }

    /// ORCHID (2001:10::/28).
    pub fn is_rfc4843(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc4843.contains(addr)
    }

    /// IPv6 stateless autoconfiguration (fe80::/64).
    pub fn is_rfc4862(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc4862.contains(addr)
    }

    /// IPv4 documentation (192.0.2.0/24, 198.51.100.0/24, 203.0.113.0/24).
    pub fn is_rfc5737(&self, addr: &NetworkAddress) -> bool {
        any_contains(&self.ranges.rfc5737, addr)
    }

    /// NAT64 well-known prefix (64:ff9b::/96).
    pub fn is_rfc6052(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc6052.contains(addr)
    }

    /// IPv4-translated addresses (::ffff:0:0:0/96).
    pub fn is_rfc6145(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc6145.contains(addr)
    }

    /// IPv4 shared address space (100.64.0.0/10).
    pub fn is_rfc6598(&self, addr: &NetworkAddress) -> bool {
        self.ranges.rfc6598.contains(addr)
    }

    /// Hurricane Electric tunnel broker block (2001:470::/32).
    pub fn is_he_net(&self, addr: &NetworkAddress) -> bool {
        self.ranges.he_net.contains(addr)
    }

    /// False only for the unspecified address (either family) and the IPv4
    /// limited broadcast address.
    ///
    /// RFC3849 documentation addresses are valid here; they are excluded by
    /// [`Self::is_routable`] instead.
    pub fn is_valid(&self, addr: &NetworkAddress) -> bool {
        match addr.to_ipv4() {
            Some(v4) => v4 != [0, 0, 0, 0] && v4 != [255, 255, 255, 255],
            None => addr.to_ipv6_bytes() != [0u8; 16],
        }
    }

    /// Valid and outside every non-public block.
    ///
    /// OnionCat addresses are routable even though the block sits inside
    /// RFC4193: they stand for reachable onion peers.
    pub fn is_routable(&self, addr: &NetworkAddress) -> bool {
        self.is_valid(addr)
            && !(self.is_rfc1918(addr)
                || self.is_rfc2544(addr)
                || self.is_rfc3927(addr)
                || self.is_rfc4862(addr)
                || self.is_rfc3849(addr)
                || self.is_rfc4843(addr)
                || self.is_rfc5737(addr)
                || self.is_rfc6598(addr)
                || self.is_local(addr)
                || (self.is_rfc4193(addr) && !self.is_onion_cat_tor(addr)))
    }

    /// Boolean view of the headline predicates.
    pub fn classify(&self, addr: &NetworkAddress) -> Classification {
        Classification {
            ipv4: self.is_ipv4(addr),
            valid: self.is_valid(addr),
            routable: self.is_routable(addr),
            local: self.is_local(addr),
            onion_cat_tor: self.is_onion_cat_tor(addr),
        }
    }
}

/// Computed classification of one address. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub ipv4: bool,
    pub valid: bool,
    pub routable: bool,
    pub local: bool,
    pub onion_cat_tor: bool,
}

/// [`AddressClassifier::is_routable`] over the process-wide table.
pub fn is_routable(addr: &NetworkAddress) -> bool {
    AddressClassifier::global().is_routable(addr)
}
