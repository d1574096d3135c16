//! # Driving Ports (Inbound API)
//!
//! The narrow call interface exposed to the peer address manager.

use crate::domain::{NetAddress, NetworkAddress, NetworkGroup, Reachability};

/// Address classification API consumed by the address manager.
///
/// All methods are pure with respect to the address; implementations are
/// expected to be shareable across threads without locking.
///
/// # Example
///
/// ```rust
/// use qc_01_netgroup::{AddressClassifierApi, AddressPolicyConfig, NetGroupService};
///
/// let service = NetGroupService::new(AddressPolicyConfig::default());
/// let addr = "8.8.8.8".parse().unwrap();
///
/// assert!(service.is_routable(&addr));
/// assert_eq!(service.group_key(&addr), "8.8.0.0");
/// ```
pub trait AddressClassifierApi: Send + Sync {
    /// Gate before accepting or gossiping an address.
    fn is_routable(&self, addr: &NetworkAddress) -> bool;

    /// Network group of the address.
    fn network_group(&self, addr: &NetworkAddress) -> NetworkGroup;

    /// Bucket key for diversity-limited address storage.
    fn group_key(&self, addr: &NetworkAddress) -> String {
        self.network_group(addr).to_string()
    }

    /// How well `local` reaches `remote`.
    fn reachability(&self, local: &NetworkAddress, remote: &NetworkAddress) -> Reachability;

    /// Whether a gossiped address should enter the address table.
    fn should_accept(&self, addr: &NetAddress) -> bool;

    /// Keep only the addresses that [`Self::should_accept`] allows.
    fn filter_addresses(&self, addrs: &[NetAddress]) -> Vec<NetAddress> {
        addrs
            .iter()
            .filter(|addr| self.should_accept(addr))
            .copied()
            .collect()
    }
}
