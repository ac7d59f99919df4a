use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfuraError {
    /// The key itself is a credential, so only its length is reported.
    #[error("invalid Infura API key: expected 32 ASCII letters or digits, got {len} characters")]
    InvalidApiKey { len: usize },

    #[error("invalid network `{0}`: expected one of main, ropsten, kovan, rinkeby")]
    InvalidNetwork(String),

    #[error("invalid Ethereum address `{0}`: expected 0x followed by 40 hex characters")]
    InvalidEthereumAddress(String),

    #[error("Error ({code}): Infura API call {method} gave message: '{message}'")]
    Call {
        code: serde_json::Number,
        method: String,
        message: String,
    },

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl InfuraError {
    /// True for errors raised by local input checks, before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey { .. } | Self::InvalidNetwork(_) | Self::InvalidEthereumAddress(_)
        )
    }

    /// True when the provider answered with a JSON-RPC `error` object.
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Call { .. } | Self::InvalidResponse(_))
    }
}
