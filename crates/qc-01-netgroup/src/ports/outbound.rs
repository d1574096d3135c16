//! # Driven Ports (Outbound SPI)
//!
//! Interfaces the host application provides.

use crate::domain::AddressPolicyConfig;

/// Source of the address acceptance policy.
pub trait PolicyConfigProvider: Send + Sync {
    /// Current policy.
    fn get_policy_config(&self) -> AddressPolicyConfig;
}
