//! Read-only registry of network address records.
//!
//! The registry is assembled once through [`NetworkRegistryBuilder`] and has
//! no mutating methods afterwards, so a single instance can be shared across
//! threads by reference.

use crate::{ConfigError, Network, NetworkAddresses, NetworkConfig, RegistryOverrides};
use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};
use tracing::{debug, warn};

static BUILTIN: LazyLock<NetworkRegistry> = LazyLock::new(|| NetworkRegistry {
    networks: Network::ALL
        .into_iter()
        .map(|network| (network.name().to_string(), network.config()))
        .collect(),
});

/// Frozen mapping from network name to its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    networks: BTreeMap<String, NetworkConfig>,
}

impl NetworkRegistry {
    /// Process-wide handle to the built-in networks.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Address record for `name`.
    pub fn get(&self, name: &str) -> Result<&NetworkAddresses, ConfigError> {
        self.network(name).map(|config| &config.addresses)
    }

    pub fn has(&self, name: &str) -> bool {
        self.networks.contains_key(name)
    }

    /// Full configuration for `name`.
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    pub fn by_chain_id(&self, chain_id: u64) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .values()
            .find(|config| config.chain_id == chain_id)
            .ok_or(ConfigError::UnknownChainId(chain_id))
    }

    /// Network names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.networks.values()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Re-check the configured text of every populated address.
    ///
    /// Built-in literals only have their hex digits checked at compile time,
    /// so this is where their checksum casing gets verified.
    pub fn verify(&self) -> Vec<ConfigError> {
        self.networks
            .values()
            .flat_map(|config| {
                config.addresses.populated().filter_map(move |(field, address)| {
                    address.validate(&config.name, field.as_str()).err()
                })
            })
            .collect()
    }
}

/// Builder for custom registries.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistryBuilder {
    networks: BTreeMap<String, NetworkConfig>,
}

impl NetworkRegistryBuilder {
    /// Start with no networks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the built-in networks.
    pub fn builtin() -> Self {
        Network::ALL
            .into_iter()
            .fold(Self::new(), |builder, network| builder.network(network.config()))
    }

    /// Add or replace a network entry.
    pub fn network(mut self, config: NetworkConfig) -> Self {
        debug!(network = %config.name, chain_id = config.chain_id, "Registering network");
        self.networks.insert(config.name.clone(), config);
        self
    }

    /// Merge a startup overlay into the pending entries.
    pub fn apply(mut self, overrides: &RegistryOverrides) -> Result<Self, ConfigError> {
        for (name, network_override) in &overrides.networks {
            if name.is_empty() {
                return Err(ConfigError::EmptyNetworkName);
            }
            let resolved = network_override.resolve(name, self.networks.get(name))?;
            debug!(
                network = %name,
                fields = network_override.addresses.len(),
                "Applied network override"
            );
            self.networks.insert(name.clone(), resolved);
        }
        Ok(self)
    }

    /// Validate and freeze the registry.
    pub fn build(self) -> Result<NetworkRegistry, ConfigError> {
        let mut chain_ids: HashMap<u64, &str> = HashMap::new();
        let mut records: HashMap<&NetworkAddresses, &str> = HashMap::new();

        for (name, config) in &self.networks {
            if name.is_empty() {
                return Err(ConfigError::EmptyNetworkName);
            }

            if let Some(first) = chain_ids.insert(config.chain_id, name) {
                return Err(ConfigError::DuplicateChainId {
                    chain_id: config.chain_id,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }

            if let Some(first) = records.insert(&config.addresses, name) {
                return Err(ConfigError::DuplicateRecord {
                    first: first.to_string(),
                    second: name.clone(),
                });
            }

            for (a, b) in config.addresses.shared_addresses() {
                warn!(network = %name, %a, %b, "Record reuses the same address in two slots");
            }
        }

        Ok(NetworkRegistry {
            networks: self.networks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_address, AddressField, ContractAddress, NetworkOverride};
    use alloy_primitives::address;

    fn text(address: Option<&ContractAddress>) -> Option<&str> {
        address.map(ContractAddress::as_str)
    }

    #[test]
    fn test_builtin_networks() {
        let registry = NetworkRegistry::builtin();
        assert!(registry.has("sepolia"));
        assert!(registry.has("fuji"));
        assert!(!registry.has("mainnet"));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["fuji", "sepolia"]);
    }

    #[test]
    fn test_sepolia_link() {
        let sepolia = NetworkRegistry::builtin().get("sepolia").unwrap();
        assert_eq!(text(sepolia.link.as_ref()), Some("0x779877A7B0D9E8603169DdbD7836e478b4624789"));
        assert_eq!(
            sepolia.link.as_ref().map(ContractAddress::address),
            Some(address!("0x779877A7B0D9E8603169DdbD7836e478b4624789"))
        );
    }

    #[test]
    fn test_fuji_usdc() {
        let fuji = NetworkRegistry::builtin().get("fuji").unwrap();
        assert_eq!(
            text(fuji.usdc_address.as_ref()),
            Some("0x5425890298aed601595a70ab815c96711a31bc65")
        );
    }

    #[test]
    fn test_unknown_network() {
        let registry = NetworkRegistry::builtin();
        assert!(matches!(
            registry.get("mainnet"),
            Err(ConfigError::UnknownNetwork(name)) if name == "mainnet"
        ));
        assert!(matches!(registry.get(""), Err(ConfigError::UnknownNetwork(_))));
    }

    #[test]
    fn test_repeated_get_is_stable() {
        let registry = NetworkRegistry::builtin();
        let first = registry.get("sepolia").unwrap().clone();
        let second = registry.get("sepolia").unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    fn test_builtin_literals_verify() {
        let errors = NetworkRegistry::builtin().verify();
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_verify_reports_miscased_literal() {
        // registrar with the first `E` lowercased
        let mut sepolia = NetworkConfig::sepolia();
        sepolia.addresses = sepolia.addresses.with(
            AddressField::Registrar,
            ContractAddress::from_literal(
                address!("0xb0E49c5D0d05cbc241d68c05BC5BA1d1B7B72976"),
                "0xb0e49c5D0d05cbc241d68c05BC5BA1d1B7B72976",
            ),
        );

        let registry = NetworkRegistryBuilder::new().network(sepolia).build().unwrap();
        let errors = registry.verify();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ConfigError::InvalidChecksum { network, field, .. }
                if network == "sepolia" && field == "registrar"
        ));
    }

    #[test]
    fn test_builtin_records_unique() {
        let records: Vec<_> = NetworkRegistry::builtin().iter().map(|c| &c.addresses).collect();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_builder_matches_builtin() {
        let built = NetworkRegistryBuilder::builtin().build().unwrap();
        assert_eq!(&built, NetworkRegistry::builtin());
    }

    #[test]
    fn test_by_chain_id() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(registry.by_chain_id(11155111).unwrap().name, "sepolia");
        assert_eq!(registry.by_chain_id(43113).unwrap().name, "fuji");
        assert!(matches!(registry.by_chain_id(1), Err(ConfigError::UnknownChainId(1))));
    }

    #[test]
    fn test_duplicate_record_rejected() {
        let mut copy = NetworkConfig::fuji();
        copy.name = "fuji-copy".to_string();
        copy.chain_id = 1;

        let err = NetworkRegistryBuilder::builtin().network(copy).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateRecord { ref first, ref second }
                if first == "fuji" && second == "fuji-copy"
        ));
    }

    #[test]
    fn test_duplicate_chain_id_rejected() {
        let link =
            parse_address("sepolia-fork", "link", "0x1111111111111111111111111111111111111111").unwrap();
        let mut other = NetworkConfig::sepolia();
        other.name = "sepolia-fork".to_string();
        other.addresses = other.addresses.with(AddressField::Link, link);

        let err = NetworkRegistryBuilder::builtin().network(other).build().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateChainId { chain_id: 11155111, .. }));
    }

    #[test]
    fn test_overlay_applied_before_freeze() {
        let overrides: RegistryOverrides = toml::from_str(
            r#"
            [networks.fuji]
            registrar = "0x1111111111111111111111111111111111111111"
            "#,
        )
        .unwrap();

        let registry = NetworkRegistryBuilder::builtin().apply(&overrides).unwrap().build().unwrap();

        assert_eq!(
            text(registry.get("fuji").unwrap().registrar.as_ref()),
            Some("0x1111111111111111111111111111111111111111")
        );
        assert_eq!(registry.get("sepolia").unwrap(), &NetworkAddresses::sepolia());
        // the shared handle is untouched
        assert!(NetworkRegistry::builtin().get("fuji").unwrap().registrar.is_none());
    }

    #[test]
    fn test_overlay_creating_duplicate_rejected() {
        let addresses = NetworkAddresses::sepolia()
            .populated()
            .map(|(field, address)| {
                (field.as_str().to_string(), toml::Value::String(address.to_string()))
            })
            .collect();
        let overrides = RegistryOverrides {
            networks: BTreeMap::from([(
                "sepolia-copy".to_string(),
                NetworkOverride {
                    chain_id: Some(5),
                    explorer: None,
                    addresses,
                },
            )]),
        };

        let err = NetworkRegistryBuilder::builtin()
            .apply(&overrides)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRecord { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let overrides = RegistryOverrides {
            networks: BTreeMap::from([(
                String::new(),
                NetworkOverride {
                    chain_id: Some(5),
                    ..Default::default()
                },
            )]),
        };

        assert!(matches!(
            NetworkRegistryBuilder::builtin().apply(&overrides),
            Err(ConfigError::EmptyNetworkName)
        ));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NetworkRegistry>();
    }
}
