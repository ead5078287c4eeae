use reqwest::{Client, header::ACCEPT};
use serde_json::Value;
use tracing::info;

use super::JsonSource;
use crate::config::LoaderConfig;

/// `JsonSource` over HTTP GET, resolving paths against the configured base url.
#[derive(Clone, Debug)]
pub struct HttpJsonClient {
    client: Client,
    config: LoaderConfig,
}

impl HttpJsonClient {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: LoaderConfig) -> Self {
        Self { client, config }
    }
}

impl JsonSource for HttpJsonClient {
    async fn get_json(&self, path: &str) -> anyhow::Result<Value> {
        let url = self.config.endpoint(path)?;

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch {}: {}", path, e))?;

        info!(
            endpoint = url.as_str(),
            status_code = response.status().as_u16(),
            "Endpoint responded"
        );

        response
            .json::<Value>()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON from {}: {}", path, e))
    }
}
