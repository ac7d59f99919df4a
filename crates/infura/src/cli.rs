use clap::{Parser, Subcommand};

/// infura — issue JSON-RPC calls against an Infura-hosted Ethereum network.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Infura project key (32 ASCII letters or digits). Required by `call`.
    #[arg(long, env = "INFURA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Target network: main, ropsten, kovan or rinkeby.
    #[arg(long, default_value = "main", env = "INFURA_NETWORK")]
    pub network: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Invoke a JSON-RPC method and print its result.
    Call {
        /// Method name, e.g. `eth_blockNumber`.
        method: String,

        /// Params as a JSON array or object.
        #[arg(default_value = "[]")]
        params: String,
    },

    /// Check that a string is a well-formed Ethereum address.
    CheckAddress { address: String },
}
