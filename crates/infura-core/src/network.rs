//! The fixed set of Infura networks and their JSON-RPC base URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InfuraError;

/// An Infura-hosted Ethereum network.
///
/// The set is closed: a `Network` can only ever be one of the table entries,
/// so an endpoint built from it is always one Infura actually serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Main,
    Ropsten,
    Kovan,
    Rinkeby,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Ropsten,
        Network::Kovan,
        Network::Rinkeby,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Ropsten => "ropsten",
            Network::Kovan => "kovan",
            Network::Rinkeby => "rinkeby",
        }
    }

    /// Base URL without a trailing slash; the API key is appended as the
    /// final path segment.
    pub fn base_url(self) -> &'static str {
        match self {
            Network::Main => "https://mainnet.infura.io/v3",
            Network::Ropsten => "https://ropsten.infura.io/v3",
            Network::Kovan => "https://kovan.infura.io/v3",
            Network::Rinkeby => "https://rinkeby.infura.io/v3",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Network {
    type Err = InfuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.identifier() == s)
            .ok_or_else(|| InfuraError::InvalidNetwork(s.to_owned()))
    }
}
