//! Property tests for address classification and grouping.
//!
//! Run with: cargo test -p qc-01-netgroup --test classification_properties

use proptest::prelude::*;
use qc_01_netgroup::{
    group_key, AddressClassifier, AddressClassifierApi, NetAddress, NetGroupService,
    NetworkAddress, NetworkGroup, TomlPolicyProvider,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("qc_01_netgroup=trace")
        .with_test_writer()
        .try_init();
}

fn v6(bytes: [u8; 16]) -> NetworkAddress {
    NetworkAddress::V6(bytes)
}

// =============================================================================
// TEST GROUP 1: Determinism
// =============================================================================

proptest! {
    #[test]
    fn group_key_is_deterministic_v6(bytes in any::<[u8; 16]>()) {
        let addr = v6(bytes);
        prop_assert_eq!(group_key(&addr), group_key(&addr));
    }

    #[test]
    fn group_key_is_deterministic_v4(bytes in any::<[u8; 4]>()) {
        let addr = NetworkAddress::V4(bytes);
        prop_assert_eq!(group_key(&addr), group_key(&addr));
    }

    #[test]
    fn mapped_and_plain_ipv4_agree(bytes in any::<[u8; 4]>()) {
        let plain = NetworkAddress::V4(bytes);
        let mapped = v6(plain.to_ipv6_bytes());
        let c = AddressClassifier::global();

        prop_assert_eq!(c.classify(&plain), c.classify(&mapped));
        prop_assert_eq!(group_key(&plain), group_key(&mapped));
    }
}

// =============================================================================
// TEST GROUP 2: Key Shapes
// =============================================================================

proptest! {
    #[test]
    fn private_ipv4_is_unroutable(b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
        let addr = NetworkAddress::v4(10, b, c, d);
        prop_assert!(!AddressClassifier::global().is_routable(&addr));
        prop_assert_eq!(group_key(&addr), "unroutable");
    }

    #[test]
    fn public_ipv4_groups_by_slash_16(b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
        let addr = NetworkAddress::v4(8, b, c, d);
        prop_assert_eq!(group_key(&addr), format!("8.{}.0.0", b));
    }

    #[test]
    fn onion_groups_by_key_nibble(tail in any::<[u8; 10]>()) {
        let mut bytes = [0xfd, 0x87, 0xd8, 0x7e, 0xeb, 0x43, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        bytes[6..].copy_from_slice(&tail);
        let addr = v6(bytes);

        prop_assert!(AddressClassifier::global().is_routable(&addr));
        prop_assert_eq!(group_key(&addr), format!("tor:{}", tail[0] & 0x0f));
    }

    #[test]
    fn teredo_groups_by_client(client in any::<[u8; 4]>(), mid in any::<[u8; 8]>()) {
        let mut bytes = [0x20, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        bytes[4..12].copy_from_slice(&mid);
        for (i, b) in client.iter().enumerate() {
            bytes[12 + i] = !b;
        }
        let c = AddressClassifier::global();
        let teredo = v6(bytes);

        prop_assert_eq!(
            c.network_group(&teredo),
            NetworkGroup::Ipv4([client[0], client[1]])
        );
    }

    #[test]
    fn tunnel_broker_groups_by_slash_36(tail in any::<[u8; 12]>()) {
        let mut bytes = [0x20, 0x01, 0x04, 0x70, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        bytes[4..].copy_from_slice(&tail);
        let addr = v6(bytes);

        let mut masked = [0u8; 16];
        masked[..4].copy_from_slice(&[0x20, 0x01, 0x04, 0x70]);
        masked[4] = tail[0] & 0xf0;

        prop_assert_eq!(group_key(&addr), v6(masked).to_string());
    }

    #[test]
    fn decode_accepts_any_full_record(bytes in proptest::collection::vec(any::<u8>(), 30..64)) {
        let record = NetAddress::decode(&bytes).unwrap();
        prop_assert_eq!(&record.encode()[..], &bytes[..NetAddress::WIRE_SIZE]);
    }
}

// =============================================================================
// TEST GROUP 3: End-to-End Through The Service
// =============================================================================

#[test]
fn test_gossip_batch_through_toml_policy() {
    init_tracing();

    let provider = TomlPolicyProvider::parse(
        r#"
        [address_policy]
        accept_unroutable = false
        accept_onion = false
        "#,
    )
    .unwrap();
    let service = NetGroupService::from_provider(&provider);

    let batch: Vec<NetAddress> = [
        "8.8.8.8",
        "10.1.2.3",
        "fd87:d87e:eb43:ab12::1",
        "2001:470:1234:5678::1",
        "::ffff:127.0.0.1",
    ]
    .iter()
    .map(|ip| NetAddress::new(ip.parse().unwrap(), 16111, 1, 1_700_000_000))
    .collect();

    let kept = service.filter_addresses(&batch);
    let keys: Vec<String> = kept.iter().map(|a| service.group_key(&a.ip)).collect();

    assert_eq!(keys, vec!["8.8.0.0", "2001:470:1000::"]);
}

#[test]
fn test_decoded_record_is_classified_as_ipv4() {
    init_tracing();

    let original = NetAddress::new(NetworkAddress::v4(1, 2, 3, 4), 16111, 1, 1_700_000_000);
    let decoded = NetAddress::decode(&original.encode()).unwrap();

    assert_eq!(decoded.ip, NetworkAddress::v4(1, 2, 3, 4));
    assert_eq!(NetGroupService::default().group_key(&decoded.ip), "1.2.0.0");
}
