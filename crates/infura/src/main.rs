mod cli;

use clap::Parser;
use eyre::{bail, eyre, WrapErr};

use infura_core::{ApiKey, ClientConfig, EthereumAddress, InfuraError, Network, RpcClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    match args.command {
        cli::Command::Call { method, params } => {
            let config = build_config(args.api_key.as_deref(), &args.network)?;
            let params = parse_params(&params)?;
            let client = RpcClient::from_config(&config);
            tracing::info!(network = %client.network(), %method, "calling Infura");

            let result = client
                .call(&method, params)
                .await
                .map_err(|err| describe_call_error(&method, err))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        cli::Command::CheckAddress { address } => {
            let address: EthereumAddress = address.parse()?;
            println!("{address} is a well-formed Ethereum address");
        }
    }

    Ok(())
}

/// Only `call` talks to Infura, so the key is checked here rather than by clap.
fn build_config(api_key: Option<&str>, network: &str) -> eyre::Result<ClientConfig> {
    let api_key = api_key
        .ok_or_else(|| {
            eyre!("`call` needs an Infura API key; pass --api-key or set INFURA_API_KEY")
        })?
        .parse::<ApiKey>()
        .wrap_err("check --api-key / INFURA_API_KEY")?;
    let network = network
        .parse::<Network>()
        .wrap_err("check --network / INFURA_NETWORK")?;
    Ok(ClientConfig::new(api_key, network))
}

/// Params must be a JSON array or object, as JSON-RPC 2.0 requires.
fn parse_params(raw: &str) -> eyre::Result<serde_json::Value> {
    let params: serde_json::Value =
        serde_json::from_str(raw).wrap_err_with(|| format!("params `{raw}` are not valid JSON"))?;
    if !(params.is_array() || params.is_object()) {
        bail!("params must be a JSON array or object, got `{raw}`");
    }
    Ok(params)
}

fn describe_call_error(method: &str, err: InfuraError) -> eyre::Report {
    let context = if err.is_provider() {
        format!("Infura rejected `{method}`")
    } else if matches!(err, InfuraError::Transport(_)) {
        "could not reach Infura; check network access and DNS".to_owned()
    } else {
        format!("unexpected response to `{method}`")
    };
    eyre::Report::new(err).wrap_err(context)
}
