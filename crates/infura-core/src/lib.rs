pub mod config;
pub mod error;
pub mod network;
pub mod rpc;
pub mod validation;

pub use config::ClientConfig;
pub use error::InfuraError;
pub use network::Network;
pub use rpc::{HttpTransport, RpcClient, Transport};
pub use validation::{is_ethereum_address, is_valid_api_key, ApiKey, EthereumAddress};
