//! Network address records for the supported testnets.
//!
//! Provides the per-network contract addresses (LINK token, automation
//! registrar, CCIP router, USDC, VRF coordinator) along with chain metadata.

use crate::ContractAddress;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Literal contract address, checked at compile time and rendered verbatim.
macro_rules! contract {
    ($addr:literal) => {
        Some(ContractAddress::from_literal(
            alloy_primitives::address!($addr),
            $addr,
        ))
    };
}

/// Built-in networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Ethereum Sepolia testnet
    Sepolia,
    /// Avalanche Fuji testnet
    Fuji,
}

impl Network {
    pub const ALL: [Self; 2] = [Self::Sepolia, Self::Fuji];

    /// Registry key for this network.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sepolia => "sepolia",
            Self::Fuji => "fuji",
        }
    }

    /// Full configuration for this network.
    pub fn config(self) -> NetworkConfig {
        match self {
            Self::Sepolia => NetworkConfig::sepolia(),
            Self::Fuji => NetworkConfig::fuji(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named address slot in a [`NetworkAddresses`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Link,
    Registrar,
    Router,
    UsdcAddress,
    VrfCoordinator,
}

impl AddressField {
    pub const ALL: [Self; 5] = [
        Self::Link,
        Self::Registrar,
        Self::Router,
        Self::UsdcAddress,
        Self::VrfCoordinator,
    ];

    /// Field name as it appears in serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Registrar => "registrar",
            Self::Router => "router",
            Self::UsdcAddress => "usdcAddress",
            Self::VrfCoordinator => "vrfCoordinator",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Contract addresses deployed on a single network.
///
/// Every slot is optional: not every service is deployed on every network,
/// and consumers have to handle the missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAddresses {
    /// LINK token contract address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ContractAddress>,
    /// Automation registrar contract address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar: Option<ContractAddress>,
    /// CCIP router contract address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<ContractAddress>,
    /// USDC token contract address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usdc_address: Option<ContractAddress>,
    /// VRF coordinator contract address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf_coordinator: Option<ContractAddress>,
}

impl NetworkAddresses {
    /// Ethereum Sepolia testnet addresses.
    pub const fn sepolia() -> Self {
        Self {
            // https://sepolia.etherscan.io/token/0x779877a7b0d9e8603169ddbd7836e478b4624789
            link: contract!("0x779877A7B0D9E8603169DdbD7836e478b4624789"),
            registrar: contract!("0xb0E49c5D0d05cbc241d68c05BC5BA1d1B7B72976"),
            router: contract!("0x0BF3dE8c5D3e8A2B34D2BEeB17ABfCeBaf363A59"),
            usdc_address: contract!("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d"),
            vrf_coordinator: contract!("0x8103B0A8A00be2DDC778e6e7eaa21791Cd364625"),
        }
    }

    /// Avalanche Fuji testnet addresses.
    pub const fn fuji() -> Self {
        Self {
            link: contract!("0x0b9d5D9136855f6FEc3c0993feE6E9CE8a297846"),
            registrar: None,
            router: contract!("0xF694E193200268f9a4868e4Aa017A0118C9a8177"),
            usdc_address: contract!("0x5425890298aed601595a70ab815c96711a31bc65"),
            vrf_coordinator: None,
        }
    }

    /// Address stored in the given slot, if any.
    pub const fn get(&self, field: AddressField) -> Option<&ContractAddress> {
        match field {
            AddressField::Link => self.link.as_ref(),
            AddressField::Registrar => self.registrar.as_ref(),
            AddressField::Router => self.router.as_ref(),
            AddressField::UsdcAddress => self.usdc_address.as_ref(),
            AddressField::VrfCoordinator => self.vrf_coordinator.as_ref(),
        }
    }

    /// Replace the address in the given slot.
    pub fn with(mut self, field: AddressField, address: ContractAddress) -> Self {
        let slot = match field {
            AddressField::Link => &mut self.link,
            AddressField::Registrar => &mut self.registrar,
            AddressField::Router => &mut self.router,
            AddressField::UsdcAddress => &mut self.usdc_address,
            AddressField::VrfCoordinator => &mut self.vrf_coordinator,
        };
        *slot = Some(address);
        self
    }

    /// Populated slots in declaration order.
    pub fn populated(&self) -> impl Iterator<Item = (AddressField, &ContractAddress)> + '_ {
        AddressField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|address| (field, address)))
    }

    /// Pairs of slots holding the same address.
    pub fn shared_addresses(&self) -> Vec<(AddressField, AddressField)> {
        let populated: Vec<_> = self.populated().collect();
        let mut shared = Vec::new();
        for (i, (a, addr_a)) in populated.iter().enumerate() {
            for (b, addr_b) in &populated[i + 1..] {
                if addr_a == addr_b {
                    shared.push((*a, *b));
                }
            }
        }
        shared
    }
}

/// Network entry held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Registry key
    pub name: String,
    /// Chain ID
    pub chain_id: u64,
    /// Block explorer base url, empty when unknown
    pub explorer: String,
    /// Contract addresses
    pub addresses: NetworkAddresses,
}

impl NetworkConfig {
    /// Ethereum Sepolia testnet configuration.
    pub fn sepolia() -> Self {
        Self {
            name: Network::Sepolia.name().to_string(),
            chain_id: 11155111,
            explorer: "https://sepolia.etherscan.io".to_string(),
            addresses: NetworkAddresses::sepolia(),
        }
    }

    /// Avalanche Fuji testnet configuration.
    pub fn fuji() -> Self {
        Self {
            name: Network::Fuji.name().to_string(),
            chain_id: 43113,
            explorer: "https://testnet.snowtrace.io".to_string(),
            addresses: NetworkAddresses::fuji(),
        }
    }

    /// Explorer url for an address on this network.
    pub fn explorer_url(&self, address: &ContractAddress) -> Option<String> {
        if self.explorer.is_empty() {
            return None;
        }
        Some(format!("{}/address/{}", self.explorer.trim_end_matches('/'), address))
    }
}
