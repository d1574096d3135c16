//! # Network Address Classification & Grouping
//!
//! **Subsystem ID:** 1 (peer address manager support)
//!
//! This crate classifies peer-advertised network addresses against the
//! IETF reserved ranges and derives the network group key the address
//! manager uses to bucket peers, so that a single operator cannot fill the
//! address table from one network block (eclipse resistance).
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Reserved-range table, RFC predicates, group keys,
//!   reachability ranking, gossiped address records
//! - **Ports Layer:** `AddressClassifierApi` (driving) and
//!   `PolicyConfigProvider` (driven)
//! - **Service Layer:** `NetGroupService` wires the classifier to a policy
//! - **Adapters Layer:** Static and TOML policy providers
//!
//! ## Example
//!
//! ```rust
//! use qc_01_netgroup::{group_key, is_routable, AddressClassifier, NetworkAddress};
//!
//! let addr: NetworkAddress = "2001:470:1234:5678::1".parse().unwrap();
//! assert!(is_routable(&addr));
//! assert_eq!(group_key(&addr), "2001:470:1000::");
//!
//! let private: NetworkAddress = "192.168.1.5".parse().unwrap();
//! assert!(AddressClassifier::global().is_rfc1918(&private));
//! assert_eq!(group_key(&private), "unroutable");
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

/// Policy configuration adapters.
pub mod adapters;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use domain::{
    group_key, is_routable, reserved_ranges, AddressClassifier, AddressError,
    AddressPolicyConfig, Classification, NetAddress, NetworkAddress, NetworkGroup, Reachability,
    ReservedRange, ReservedRanges, RESERVED_RANGES,
};
pub use ports::{AddressClassifierApi, PolicyConfigProvider};
pub use service::NetGroupService;

pub use adapters::{ConfigError, StaticPolicyProvider, TomlPolicyProvider};
