//! JSON-RPC client for Infura endpoints.
//!
//! [`RpcClient`] binds a validated API key to a [`Network`] and performs one
//! JSON-RPC 2.0 round-trip per [`RpcClient::call`]. The HTTP exchange goes
//! through the [`Transport`] trait; [`HttpTransport`] is the `reqwest`
//! implementation and tests swap in `mock::MockTransport`.

mod http_transport;
#[cfg(test)]
pub mod mock;
mod protocol;

pub use http_transport::HttpTransport;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::InfuraError;
use crate::network::Network;
use crate::validation::ApiKey;

use protocol::{decode_response, params_kind, parse_jsonrpc_error, JsonRpcRequest, REQUEST_ID};

/// Moves one serialized JSON-RPC request to the provider and returns the raw
/// response body.
///
/// Implementations send exactly one request per call and must not retry.
/// Transport-level failures are returned as they are; interpreting the body
/// is left to [`RpcClient`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: String) -> Result<String, InfuraError>;
}

// ==============================================================================
// RpcClient
// ==============================================================================

pub struct RpcClient<T = HttpTransport> {
    api_key: ApiKey,
    network: Network,
    /// `<network base URL>/<api key>`, fixed at construction.
    endpoint: String,
    transport: T,
}

impl RpcClient<HttpTransport> {
    /// Create a client for `network`. Fails with
    /// [`InfuraError::InvalidApiKey`] if `api_key` is not 32 ASCII letters or
    /// digits. No network I/O happens until the first call.
    pub fn new(api_key: &str, network: Network) -> Result<Self, InfuraError> {
        Self::with_transport(api_key, network, HttpTransport::new())
    }

    /// Like [`RpcClient::new`], with the network given by its identifier
    /// (`main`, `ropsten`, `kovan`, `rinkeby`). The key is checked first.
    pub fn from_identifiers(api_key: &str, network: &str) -> Result<Self, InfuraError> {
        let api_key = ApiKey::parse(api_key)?;
        let network = network.parse()?;
        Ok(Self::from_parts(api_key, network, HttpTransport::new()))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::from_parts(config.api_key.clone(), config.network, HttpTransport::new())
    }
}

impl<T: Transport> RpcClient<T> {
    pub fn with_transport(
        api_key: &str,
        network: Network,
        transport: T,
    ) -> Result<Self, InfuraError> {
        let api_key = ApiKey::parse(api_key)?;
        Ok(Self::from_parts(api_key, network, transport))
    }

    fn from_parts(api_key: ApiKey, network: Network, transport: T) -> Self {
        let endpoint = format!("{}/{}", network.base_url(), api_key.expose());
        Self {
            api_key,
            network,
            endpoint,
            transport,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Full request URL. Contains the API key, so keep it out of logs.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invoke `method` with `params` and return the `result` member of the
    /// response (`null` if the provider omitted it).
    ///
    /// `params` is sent exactly as given; JSON-RPC expects an array or an
    /// object but the shape is not checked here.
    ///
    /// # Errors
    ///
    /// - [`InfuraError::Call`] if the provider returned a JSON-RPC error.
    /// - [`InfuraError::InvalidResponse`] if that error is not `{code, message}`.
    /// - [`InfuraError::Transport`] for HTTP failures (DNS, TLS, connect, ...).
    /// - [`InfuraError::Decode`] if the body is not a JSON-RPC response object.
    pub async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, InfuraError> {
        debug!(
            rpc.id = REQUEST_ID,
            rpc.method = method,
            rpc.params = params_kind(&params),
            network = %self.network,
            "rpc call"
        );
        let body = serde_json::to_string(&JsonRpcRequest::new(method, &params))?;

        let response = self.transport.post_json(&self.endpoint, body).await?;
        debug!(rpc.method = method, body_len = response.len(), "rpc response");
        trace!(rpc.method = method, body = %response, "rpc response body");

        let decoded = decode_response(&response)?;
        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(method, err));
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }

    /// [`RpcClient::call`] followed by deserializing the result into `R`.
    pub async fn call_as<R: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<R, InfuraError> {
        let raw = self.call(method, params).await?;
        Ok(serde_json::from_value(raw)?)
    }
}

impl<T> fmt::Debug for RpcClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("api_key", &self.api_key)
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}
