//! Input validation for provider credentials and Ethereum addresses.
//!
//! Both checks are plain character-class tests, so they are written out
//! directly instead of going through a regex engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::InfuraError;

pub const API_KEY_LEN: usize = 32;

/// Number of hex digits after the `0x` prefix of an address.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Returns true if `key` is exactly 32 ASCII letters or digits.
pub fn is_valid_api_key(key: &str) -> bool {
    key.len() == API_KEY_LEN && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true if `address` is `0x` followed by exactly 40 hex digits.
/// Hex digits may be upper or lower case; the prefix must be lower case.
pub fn is_ethereum_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

// ==============================================================================
// ApiKey
// ==============================================================================

/// A validated Infura project key.
///
/// `Debug` never prints the key; use [`ApiKey::expose`] where the raw value
/// is actually needed (building the endpoint URL).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse(key: &str) -> Result<Self, InfuraError> {
        if !is_valid_api_key(key) {
            return Err(InfuraError::InvalidApiKey {
                len: key.chars().count(),
            });
        }
        Ok(Self(key.to_owned()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl FromStr for ApiKey {
    type Err = InfuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ==============================================================================
// EthereumAddress
// ==============================================================================

/// An address-shaped string (`0x` + 40 hex digits). No checksum is verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EthereumAddress(String);

impl EthereumAddress {
    pub fn parse(address: &str) -> Result<Self, InfuraError> {
        if !is_ethereum_address(address) {
            return Err(InfuraError::InvalidEthereumAddress(address.to_owned()));
        }
        Ok(Self(address.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EthereumAddress {
    type Err = InfuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
