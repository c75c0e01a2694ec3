pub mod config;

use crate::config::Config;
use ::config::{
    AddressField, ContractAddress, NetworkAddresses, NetworkConfig, NetworkRegistry,
    NetworkRegistryBuilder,
};
use eyre::eyre;
use std::fmt::Write;
use tracing::{info, warn};

/// Network used when neither the command line nor the config file names one.
pub const DEFAULT_NETWORK: &str = "sepolia";

/// Build the registry from the built-in data plus the config file overrides.
pub fn load_registry(config: &Config) -> eyre::Result<NetworkRegistry> {
    let overrides = config.overrides();
    if !overrides.is_empty() {
        info!("Applying overrides for {} network(s)", overrides.networks.len());
    }

    let registry = NetworkRegistryBuilder::builtin().apply(&overrides)?.build()?;
    info!("Loaded {} networks", registry.len());

    Ok(registry)
}

/// Pick the network a command operates on.
pub fn select_network<'a>(config: &'a Config, requested: Option<&'a str>) -> &'a str {
    requested
        .or(config.network.as_deref())
        .unwrap_or(DEFAULT_NETWORK)
}

/// Look up a single address slot, failing when it is unset.
pub fn lookup_field<'a>(
    registry: &'a NetworkRegistry,
    network: &str,
    field: &str,
) -> eyre::Result<&'a ContractAddress> {
    let field: AddressField = field
        .parse()
        .map_err(|field| eyre!("Unknown field: {field}"))?;
    let addresses = registry.get(network)?;

    addresses
        .get(field)
        .ok_or_else(|| eyre!("{field} is not configured for {network}"))
}

/// Human readable rendering of a network entry.
pub fn render_network(config: &NetworkConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (chain id {})", config.name, config.chain_id);
    for field in AddressField::ALL {
        match config.addresses.get(field) {
            Some(address) => {
                let _ = write!(out, "  {:<15} {}", field.as_str(), address);
                if let Some(url) = config.explorer_url(address) {
                    let _ = write!(out, "  {url}");
                }
                out.push('\n');
            }
            None => {
                let _ = writeln!(out, "  {:<15} -", field.as_str());
            }
        }
    }
    out
}

/// JSON rendering of an address record in its external shape.
pub fn render_json(addresses: &NetworkAddresses) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(addresses)?)
}

/// Summary produced by [`check_registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub networks: usize,
    pub addresses: usize,
    /// `network: fieldA = fieldB` for every record that reuses an address
    pub shared: Vec<String>,
}

/// Re-validate the configured text of every address in the registry.
///
/// Fails when any text is malformed, carries broken checksum casing, or no
/// longer names the stored address. Records that reuse an address in two
/// slots are reported but do not fail the check.
pub fn check_registry(registry: &NetworkRegistry) -> eyre::Result<CheckReport> {
    let errors = registry.verify();
    if !errors.is_empty() {
        let details = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n  ");
        return Err(eyre!("{} invalid address(es):\n  {}", errors.len(), details));
    }

    let mut report = CheckReport {
        networks: registry.len(),
        addresses: 0,
        shared: Vec::new(),
    };
    for config in registry.iter() {
        report.addresses += config.addresses.populated().count();
        for (a, b) in config.addresses.shared_addresses() {
            warn!(network = %config.name, "{} and {} hold the same address", a, b);
            report.shared.push(format!("{}: {} = {}", config.name, a, b));
        }
    }

    Ok(report)
}
