//! Contract addresses and validation of configured address text.

use crate::ConfigError;
use alloy_primitives::Address;
use serde::{Serialize, Serializer};
use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
};

/// Contract address together with the text it was configured from.
///
/// Every output path renders the configured text, so a record prints the
/// same way it was written. Equality and hashing only look at the address.
#[derive(Debug, Clone)]
pub struct ContractAddress {
    address: Address,
    text: Cow<'static, str>,
}

impl ContractAddress {
    /// Pair a compile-time checked address with its literal text.
    pub const fn from_literal(address: Address, text: &'static str) -> Self {
        Self {
            address,
            text: Cow::Borrowed(text),
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Re-parse the configured text and confirm it still names this address.
    pub fn validate(&self, network: &str, field: &str) -> Result<(), ConfigError> {
        let parsed = parse_address(network, field, &self.text)?;
        if parsed.address != self.address {
            return Err(ConfigError::MalformedAddress {
                network: network.to_string(),
                field: field.to_string(),
                value: self.text.to_string(),
            });
        }
        Ok(())
    }
}

impl PartialEq for ContractAddress {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for ContractAddress {}

impl Hash for ContractAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for ContractAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Parse a `0x`-prefixed, 40 hex character address.
///
/// All-lowercase and all-uppercase values carry no checksum and are accepted
/// as is. Mixed-case values must have valid EIP-55 casing.
pub fn parse_address(
    network: &str,
    field: &str,
    value: &str,
) -> Result<ContractAddress, ConfigError> {
    let malformed = || ConfigError::MalformedAddress {
        network: network.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    };

    let hex = value.strip_prefix("0x").ok_or_else(malformed)?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let address = if is_mixed_case(hex) {
        Address::parse_checksummed(value, None).map_err(|_| ConfigError::InvalidChecksum {
            network: network.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        })?
    } else {
        value.parse().map_err(|_| malformed())?
    };

    Ok(ContractAddress {
        address,
        text: Cow::Owned(value.to_string()),
    })
}

fn is_mixed_case(hex: &str) -> bool {
    hex.bytes().any(|b| b.is_ascii_lowercase()) && hex.bytes().any(|b| b.is_ascii_uppercase())
}
