//! HTTP client for the upstream item endpoint.
//!
//! # Responsibilities
//! - Issue the GET for the item list
//! - Map transport, status and decode failures to `FetchError`
//! - Record fetch metrics

use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{FetchError, FetchResult, Item};
use crate::upstream::DataSource;

/// Reads items from a JSON endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    client: reqwest::Client,
    items_url: url::Url,
}

impl HttpItemSource {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> FetchResult<Self> {
        let items_url: url::Url = config.items_url.parse().map_err(|e| {
            FetchError::Request(format!("invalid upstream url '{}': {}", config.items_url, e))
        })?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, items_url })
    }

    /// The endpoint this source reads from.
    pub fn items_url(&self) -> &url::Url {
        &self.items_url
    }

    async fn get_items(&self) -> FetchResult<Vec<Item>> {
        let start = Instant::now();
        tracing::debug!(url = %self.items_url, "Fetching upstream items");

        let result = async {
            let response = self
                .client
                .get(self.items_url.clone())
                .send()
                .await?
                .error_for_status()?;
            let items: Vec<Item> = response.json().await?;
            Ok::<_, FetchError>(items)
        }
        .await;

        match &result {
            Ok(items) => {
                metrics::record_upstream_fetch("ok", start);
                tracing::debug!(count = items.len(), elapsed = ?start.elapsed(), "Upstream items fetched");
            }
            Err(e) => {
                metrics::record_upstream_fetch("error", start);
                tracing::warn!(url = %self.items_url, error = %e, "Upstream fetch failed");
            }
        }
        result
    }
}

impl DataSource for HttpItemSource {
    fn fetch_items(&self) -> BoxFuture<'_, FetchResult<Vec<Item>>> {
        Box::pin(self.get_items())
    }
}
