use serde::Deserialize;

use crate::network::Network;
use crate::validation::ApiKey;

/// Settings needed to build an [`RpcClient`](crate::rpc::RpcClient).
///
/// Deserializing validates the key, so a `ClientConfig` value is always
/// usable as-is. `network` defaults to `main` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    #[serde(default)]
    pub network: Network,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey, network: Network) -> Self {
        Self { api_key, network }
    }
}
