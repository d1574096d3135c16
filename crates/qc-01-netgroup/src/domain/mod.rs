//! Domain Layer - Pure address classification with no I/O
//!
//! This module contains:
//! - The tagged IPv4/IPv6 address value and its embedding helpers
//! - The process-wide reserved-range table
//! - Classifier predicates (validity, routability, RFC block membership)
//! - Network group derivation (anti-eclipse bucketing keys)
//! - Reachability ranking between local and remote addresses
//! - The gossiped address record and its wire decoding

pub mod address;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod group;
pub mod net_address;
pub mod ranges;
pub mod reachability;

pub use address::NetworkAddress;
pub use classifier::{is_routable, AddressClassifier, Classification};
pub use config::AddressPolicyConfig;
pub use errors::AddressError;
pub use group::{group_key, NetworkGroup};
pub use net_address::NetAddress;
pub use ranges::{reserved_ranges, ReservedRange, ReservedRanges, RESERVED_RANGES};
pub use reachability::Reachability;
