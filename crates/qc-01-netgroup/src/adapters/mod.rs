//! # Adapters
//!
//! Concrete implementations of the driven ports.
//!
//! - `StaticPolicyProvider` - hardcoded policy for tests and embedding
//! - `TomlPolicyProvider` - policy loaded from a TOML file

/// Policy configuration providers
pub mod config;

pub use config::{ConfigError, StaticPolicyProvider, TomlPolicyProvider};
