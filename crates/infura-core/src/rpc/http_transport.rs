use async_trait::async_trait;
use reqwest::header;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::InfuraError;

use super::Transport;

/// [`Transport`] backed by `reqwest`.
///
/// The underlying `reqwest::Client` is built on the first request and reused
/// afterwards. `OnceCell` makes concurrent first calls share one client.
/// Timeouts are left at reqwest's defaults.
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: OnceCell<reqwest::Client>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the HTTP client has been created yet.
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    async fn client(&self) -> Result<&reqwest::Client, InfuraError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                debug!("building HTTP client");
                reqwest::Client::builder().build()
            })
            .await?;
        Ok(client)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, InfuraError> {
        let client = self.client().await?;
        let response = client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();

        let text = response.text().await?;
        debug!(%status, body_len = text.len(), "http response");
        Ok(text)
    }
}
