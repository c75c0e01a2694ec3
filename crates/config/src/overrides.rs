//! Startup overlay for the built-in address data.
//!
//! Overrides are deserialized from TOML and merged field by field into the
//! registry builder. Once the registry is built they have no further effect.

use crate::{address::parse_address, AddressField, ConfigError, NetworkAddresses, NetworkConfig};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Per-network overrides keyed by network name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryOverrides {
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkOverride>,
}

/// Override table for a single network.
///
/// Address slots are kept as raw TOML values until [`NetworkOverride::resolve`]
/// validates them, so a bad key or value is reported with its network and field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NetworkOverride {
    /// Chain ID, required when the network is not built in
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Block explorer base url
    #[serde(default)]
    pub explorer: Option<String>,
    /// Address slots by serialized field name
    #[serde(flatten)]
    pub addresses: BTreeMap<String, toml::Value>,
}

impl RegistryOverrides {
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl NetworkOverride {
    /// Merge this override onto `base`, or build a new network when there is none.
    pub fn resolve(
        &self,
        name: &str,
        base: Option<&NetworkConfig>,
    ) -> Result<NetworkConfig, ConfigError> {
        let mut updates = Vec::with_capacity(self.addresses.len());
        for (key, value) in &self.addresses {
            let field: AddressField = key.parse().map_err(|field| ConfigError::UnknownField {
                network: name.to_string(),
                field,
            })?;
            let value = value.as_str().ok_or_else(|| ConfigError::MalformedAddress {
                network: name.to_string(),
                field: key.clone(),
                value: value.to_string(),
            })?;
            updates.push((field, parse_address(name, key, value)?));
        }

        let mut config = match base {
            Some(base) => base.clone(),
            None => NetworkConfig {
                name: name.to_string(),
                chain_id: self
                    .chain_id
                    .ok_or_else(|| ConfigError::MissingChainId(name.to_string()))?,
                explorer: String::new(),
                addresses: NetworkAddresses::default(),
            },
        };

        if let Some(chain_id) = self.chain_id {
            config.chain_id = chain_id;
        }
        if let Some(explorer) = &self.explorer {
            config.explorer.clone_from(explorer);
        }
        for (field, address) in updates {
            config.addresses = config.addresses.with(field, address);
        }

        Ok(config)
    }
}
