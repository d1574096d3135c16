//! Tests for the Network Group Service

use super::*;

fn net_addr(ip: &str) -> NetAddress {
    NetAddress::new(ip.parse().unwrap(), 16111, 1, 1_700_000_000)
}

struct FixedPolicy(AddressPolicyConfig);

impl PolicyConfigProvider for FixedPolicy {
    fn get_policy_config(&self) -> AddressPolicyConfig {
        self.0.clone()
    }
}

// =============================================================================
// TEST GROUP 1: Port Delegation
// =============================================================================

#[test]
fn test_service_delegates_to_classifier() {
    let service = NetGroupService::default();
    let addr: NetworkAddress = "2001:470:1234:5678::1".parse().unwrap();

    assert!(service.is_routable(&addr));
    assert_eq!(service.group_key(&addr), "2001:470:1000::");
    assert_eq!(
        service.network_group(&addr),
        service.classifier().network_group(&addr)
    );
}

#[test]
fn test_service_reachability() {
    let service = NetGroupService::default();
    let local: NetworkAddress = "1.2.3.4".parse().unwrap();
    let remote: NetworkAddress = "8.8.8.8".parse().unwrap();

    assert_eq!(service.reachability(&local, &remote), Reachability::Ipv4);
}

// =============================================================================
// TEST GROUP 2: Acceptance Policy
// =============================================================================

#[test]
fn test_default_policy_rejects_unroutable() {
    let service = NetGroupService::default();

    assert!(service.should_accept(&net_addr("8.8.8.8")));
    assert!(!service.should_accept(&net_addr("192.168.1.5")));
    assert!(!service.should_accept(&net_addr("127.0.0.1")));
    assert!(!service.should_accept(&net_addr("2001:db8::1")));
}

#[test]
fn test_testing_policy_accepts_unroutable() {
    let service = NetGroupService::new(AddressPolicyConfig::for_testing());

    assert!(service.should_accept(&net_addr("192.168.1.5")));
    assert!(service.should_accept(&net_addr("127.0.0.1")));
}

#[test]
fn test_onion_policy() {
    let onion = net_addr("fd87:d87e:eb43:ab12::1");

    assert!(NetGroupService::default().should_accept(&onion));

    let no_onion = NetGroupService::new(AddressPolicyConfig {
        accept_unroutable: false,
        accept_onion: false,
    });
    assert!(!no_onion.should_accept(&onion));
    assert!(no_onion.should_accept(&net_addr("8.8.8.8")));
}

#[test]
fn test_filter_addresses_keeps_order() {
    let service = NetGroupService::default();
    let addrs = [
        net_addr("8.8.8.8"),
        net_addr("10.0.0.1"),
        net_addr("2a00:1450::1"),
        net_addr("169.254.0.1"),
        net_addr("fd87:d87e:eb43::1"),
    ];

    let kept = service.filter_addresses(&addrs);

    assert_eq!(kept, vec![addrs[0], addrs[2], addrs[4]]);
}

#[test]
fn test_from_provider() {
    let provider = FixedPolicy(AddressPolicyConfig::for_testing());
    let service = NetGroupService::from_provider(&provider);

    assert_eq!(service.config(), &AddressPolicyConfig::for_testing());
}

#[test]
fn test_service_is_shareable_across_threads() {
    let service = std::sync::Arc::new(NetGroupService::default());

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || service.group_key(&NetworkAddress::v4(8, i, 1, 1)))
        })
        .collect();

    let keys: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(keys, vec!["8.0.0.0", "8.1.0.0", "8.2.0.0", "8.3.0.0"]);
}
