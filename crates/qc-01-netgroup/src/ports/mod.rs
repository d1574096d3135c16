//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the API the peer address manager consumes
//! - **Driven Ports (Outbound):** where the acceptance policy comes from

pub mod inbound;
pub mod outbound;

pub use inbound::AddressClassifierApi;
pub use outbound::PolicyConfigProvider;
