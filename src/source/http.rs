use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::PageSource;
use crate::config::SourceConfig;
use crate::core::error::{DumpError, Result};

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn network_error(url: &str, reason: impl ToString) -> DumpError {
    DumpError::Network {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl PageSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        if !response.status().is_success() {
            return Err(network_error(url, format!("HTTP {}", response.status())));
        }

        let body = response.text().await.map_err(|e| network_error(url, e))?;
        if body.is_empty() {
            return Err(network_error(url, "response returned no body"));
        }

        Ok(body)
    }
}
