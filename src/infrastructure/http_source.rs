// HTTP data source - reqwest-backed implementation of ChartDataSource
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::data_source::ChartDataSource;
use crate::domain::payload::{CategoryPayload, ChartPayload};

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("failed to send request to {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("request to {url} failed with status {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode response from {url}"))
    }
}

#[async_trait]
impl ChartDataSource for HttpDataSource {
    async fn fetch_chart(&self, endpoint: &str) -> Result<ChartPayload> {
        self.get_json(endpoint).await
    }

    async fn fetch_categories(&self, endpoint: &str) -> Result<CategoryPayload> {
        self.get_json(endpoint).await
    }

    async fn fetch_top_posts(&self, endpoint: &str) -> Result<Vec<String>> {
        self.get_json(endpoint).await
    }
}
