//! Address acceptance policy configuration.

/// Which gossiped addresses the address manager should accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPolicyConfig {
    /// Accept addresses that are not publicly routable (private test networks)
    pub accept_unroutable: bool,
    /// Accept OnionCat-encoded Tor addresses
    pub accept_onion: bool,
}

impl Default for AddressPolicyConfig {
    fn default() -> Self {
        Self {
            accept_unroutable: false,
            accept_onion: true,
        }
    }
}

impl AddressPolicyConfig {
    /// Local test networks: everything is accepted.
    pub fn for_testing() -> Self {
        Self {
            accept_unroutable: true,
            accept_onion: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let config = AddressPolicyConfig::default();
        assert!(!config.accept_unroutable);
        assert!(config.accept_onion);
    }
}
