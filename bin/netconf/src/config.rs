use ::config::{NetworkOverride, RegistryOverrides};
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};

/// Top-level netconf configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Network used when a command is not given one
    #[serde(default)]
    pub network: Option<String>,

    /// Per-network address overrides
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkOverride>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    pub fn overrides(&self) -> RegistryOverrides {
        RegistryOverrides {
            networks: self.networks.clone(),
        }
    }
}
