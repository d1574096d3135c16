//! Reachability between a local and a remote address.
//!
//! The address manager uses this to pick which of our local addresses to
//! advertise to a given peer: higher is better.

use super::address::NetworkAddress;
use super::classifier::AddressClassifier;

/// How well a local address can reach a remote one, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reachability {
    Unreachable,
    Default,
    Teredo,
    Ipv6Weak,
    Ipv4,
    Ipv6Strong,
    Private,
}

impl AddressClassifier<'_> {
    /// Rank how well `local` reaches `remote`.
    pub fn reachability(&self, local: &NetworkAddress, remote: &NetworkAddress) -> Reachability {
        if !self.is_routable(remote) {
            return Reachability::Unreachable;
        }

        let local_routable = self.is_routable(local);

        if self.is_onion_cat_tor(remote) {
            if self.is_onion_cat_tor(local) {
                return Reachability::Private;
            }
            if local_routable && self.is_ipv4(local) {
                return Reachability::Ipv4;
            }
            return Reachability::Default;
        }

        if self.is_rfc4380(remote) {
            if !local_routable {
                return Reachability::Default;
            }
            if self.is_rfc4380(local) {
                return Reachability::Teredo;
            }
            if self.is_ipv4(local) {
                return Reachability::Ipv4;
            }
            return Reachability::Ipv6Weak;
        }

        if self.is_ipv4(remote) {
            if local_routable && self.is_ipv4(local) {
                return Reachability::Ipv4;
            }
            return Reachability::Unreachable;
        }

        // remote is native IPv6
        let tunnelled =
            self.is_rfc3964(local) || self.is_rfc6052(local) || self.is_rfc6145(local);

        if !local_routable {
            return Reachability::Default;
        }
        if self.is_rfc4380(local) {
            return Reachability::Teredo;
        }
        if self.is_ipv4(local) {
            return Reachability::Ipv4;
        }
        if tunnelled {
            // only prefer IPv6 when it isn't tunnelled
            return Reachability::Ipv6Weak;
        }
        Reachability::Ipv6Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> NetworkAddress {
        s.parse().unwrap()
    }

    fn reach(local: &str, remote: &str) -> Reachability {
        AddressClassifier::global().reachability(&addr(local), &addr(remote))
    }

    const ONION: &str = "fd87:d87e:eb43:ab12::1";
    const TEREDO: &str = "2001:0:4136:e378:8000:63bf:fefd:fcfb";
    const NATIVE_V6: &str = "2a00:1450:4017:815::200e";

    #[test]
    fn test_unroutable_remote() {
        assert_eq!(reach("8.8.8.8", "192.168.1.1"), Reachability::Unreachable);
        assert_eq!(reach(ONION, "127.0.0.1"), Reachability::Unreachable);
    }

    #[test]
    fn test_onion_remote() {
        assert_eq!(reach(ONION, ONION), Reachability::Private);
        assert_eq!(reach("8.8.4.4", ONION), Reachability::Ipv4);
        assert_eq!(reach(NATIVE_V6, ONION), Reachability::Default);
        assert_eq!(reach("10.0.0.1", ONION), Reachability::Default);
    }

    #[test]
    fn test_teredo_remote() {
        assert_eq!(reach("10.0.0.1", TEREDO), Reachability::Default);
        assert_eq!(reach(TEREDO, TEREDO), Reachability::Teredo);
        assert_eq!(reach("8.8.8.8", TEREDO), Reachability::Ipv4);
        assert_eq!(reach(NATIVE_V6, TEREDO), Reachability::Ipv6Weak);
    }

    #[test]
    fn test_ipv4_remote() {
        assert_eq!(reach("1.2.3.4", "8.8.8.8"), Reachability::Ipv4);
        assert_eq!(reach("192.168.0.2", "8.8.8.8"), Reachability::Unreachable);
        assert_eq!(reach(NATIVE_V6, "8.8.8.8"), Reachability::Unreachable);
    }

    #[test]
    fn test_ipv6_remote() {
        assert_eq!(reach("fe80::1", NATIVE_V6), Reachability::Default);
        assert_eq!(reach(TEREDO, NATIVE_V6), Reachability::Teredo);
        assert_eq!(reach("8.8.8.8", NATIVE_V6), Reachability::Ipv4);
        assert_eq!(reach("2002:102:304::1", NATIVE_V6), Reachability::Ipv6Weak);
        assert_eq!(reach("64:ff9b::808:808", NATIVE_V6), Reachability::Ipv6Weak);
        assert_eq!(reach("2a01:4f8::1", NATIVE_V6), Reachability::Ipv6Strong);
    }

    #[test]
    fn test_ordering() {
        assert!(Reachability::Unreachable < Reachability::Default);
        assert!(Reachability::Ipv4 < Reachability::Ipv6Strong);
        assert!(Reachability::Ipv6Strong < Reachability::Private);
    }
}
