//! # Network Group Service
//!
//! Implements the `AddressClassifierApi` driving port over the process-wide
//! reserved-range table, adding the address acceptance policy the address
//! manager applies to gossiped addresses.

use crate::domain::{
    AddressClassifier, AddressPolicyConfig, NetAddress, NetworkAddress, NetworkGroup, Reachability,
};
use crate::ports::{AddressClassifierApi, PolicyConfigProvider};
use tracing::debug;

/// Address classification service.
///
/// Holds only a shared reference to the read-only range table and its
/// policy, so it can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct NetGroupService {
    classifier: AddressClassifier<'static>,
    config: AddressPolicyConfig,
}

impl NetGroupService {
    /// Create a service over the process-wide table.
    pub fn new(config: AddressPolicyConfig) -> Self {
        Self {
            classifier: AddressClassifier::global(),
            config,
        }
    }

    /// Create a service with the policy supplied by `provider`.
    pub fn from_provider(provider: &dyn PolicyConfigProvider) -> Self {
        Self::new(provider.get_policy_config())
    }

    /// The underlying classifier (for the individual RFC predicates).
    pub fn classifier(&self) -> &AddressClassifier<'static> {
        &self.classifier
    }

    pub fn config(&self) -> &AddressPolicyConfig {
        &self.config
    }
}

impl Default for NetGroupService {
    fn default() -> Self {
        Self::new(AddressPolicyConfig::default())
    }
}

impl AddressClassifierApi for NetGroupService {
    fn is_routable(&self, addr: &NetworkAddress) -> bool {
        self.classifier.is_routable(addr)
    }

    fn network_group(&self, addr: &NetworkAddress) -> NetworkGroup {
        self.classifier.network_group(addr)
    }

    fn reachability(&self, local: &NetworkAddress, remote: &NetworkAddress) -> Reachability {
        self.classifier.reachability(local, remote)
    }

    fn should_accept(&self, addr: &NetAddress) -> bool {
        let ip = &addr.ip;

        if !self.config.accept_onion && self.classifier.is_onion_cat_tor(ip) {
            debug!(%ip, port = addr.port, "Rejecting onion address (disabled by policy)");
            return false;
        }

        if !self.config.accept_unroutable && !self.classifier.is_routable(ip) {
            debug!(
                %ip,
                port = addr.port,
                group = %self.classifier.network_group(ip),
                ranges = ?self.classifier.ranges().matching_names(ip),
                "Rejecting unroutable address"
            );
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests;
