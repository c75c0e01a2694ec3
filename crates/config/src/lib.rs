//! Network address configuration for Chainlink-enabled testnets.
//!
//! This crate provides:
//! - Contract address records for the built-in networks (Sepolia, Fuji)
//! - A read-only registry keyed by network name
//! - TOML overrides applied once before the registry is frozen

pub mod address;
mod error;
pub mod network;
pub mod overrides;
pub mod registry;

pub use address::{parse_address, ContractAddress};
pub use error::ConfigError;
pub use network::{AddressField, Network, NetworkAddresses, NetworkConfig};
pub use overrides::{NetworkOverride, RegistryOverrides};
pub use registry::{NetworkRegistry, NetworkRegistryBuilder};
