use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Requested network is not in the registry
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// No registered network has this chain id
    #[error("Unknown chain id: {0}")]
    UnknownChainId(u64),

    /// Address value is not `0x` followed by 40 hex characters
    #[error("Malformed address for {network}.{field}: {value:?}")]
    MalformedAddress {
        network: String,
        field: String,
        value: String,
    },

    /// Mixed-case address value whose casing is not a valid EIP-55 checksum
    #[error("Invalid checksum for {network}.{field}: {value:?}")]
    InvalidChecksum {
        network: String,
        field: String,
        value: String,
    },

    /// Override names a field that is not part of an address record
    #[error("Unknown field for {network}: {field}")]
    UnknownField { network: String, field: String },

    /// Override adds a network without a chain id
    #[error("Missing chain_id for new network: {0}")]
    MissingChainId(String),

    /// Two networks resolve to the same address record
    #[error("Networks {first} and {second} have identical address records")]
    DuplicateRecord { first: String, second: String },

    /// Two networks share a chain id
    #[error("Networks {first} and {second} share chain id {chain_id}")]
    DuplicateChainId {
        chain_id: u64,
        first: String,
        second: String,
    },

    #[error("Network name must not be empty")]
    EmptyNetworkName,
}
